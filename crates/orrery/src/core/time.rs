/// Play/pause state and the timestamp of the previous frame.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    running: bool,
    last_frame_timestamp: Option<f64>,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            running: true,
            last_frame_timestamp: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Flip play/pause. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn last_frame_timestamp(&self) -> Option<f64> {
        self.last_frame_timestamp
    }

    /// Record a frame timestamp (seconds) and return the elapsed time since
    /// the previous one. The first frame reports 0. Timestamps that go
    /// backwards report a negative value; callers decide what to skip.
    pub fn advance(&mut self, now: f64) -> f64 {
        let elapsed = match self.last_frame_timestamp {
            Some(last) => now - last,
            None => 0.0,
        };
        self.last_frame_timestamp = Some(now);
        elapsed
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames-per-second estimate from the most recent frame interval.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    fps: Option<u32>,
    frames: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame interval. Zero or negative intervals (clock resolution
    /// artifacts, first frame) leave the estimate untouched and return None.
    pub fn record(&mut self, elapsed_seconds: f64) -> Option<u32> {
        self.frames += 1;
        if !(elapsed_seconds > 0.0) || !elapsed_seconds.is_finite() {
            return None;
        }
        let fps = (1.0 / elapsed_seconds).round().min(u32::MAX as f64) as u32;
        self.fps = Some(fps);
        Some(fps)
    }

    /// Latest estimate, if any valid interval has been seen.
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }

    /// Total frames recorded, including skipped ones.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_running() {
        let clock = SimulationClock::new();
        assert!(clock.is_running());
        assert_eq!(clock.last_frame_timestamp(), None);
    }

    #[test]
    fn toggle_flips_state() {
        let mut clock = SimulationClock::new();
        assert!(!clock.toggle());
        assert!(clock.toggle());
    }

    #[test]
    fn first_frame_has_zero_elapsed() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.advance(10.0), 0.0);
        let dt = clock.advance(10.5);
        assert!((dt - 0.5).abs() < 1e-9);
    }

    #[test]
    fn fps_rounds_reciprocal() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.record(1.0 / 60.0), Some(60));
        assert_eq!(timer.record(0.017), Some(59));
        assert_eq!(timer.fps(), Some(59));
    }

    #[test]
    fn zero_interval_skips_update() {
        let mut timer = FrameTimer::new();
        timer.record(1.0 / 30.0);
        assert_eq!(timer.record(0.0), None);
        assert_eq!(timer.record(-0.001), None);
        assert_eq!(timer.fps(), Some(30));
        assert_eq!(timer.frames(), 3);
    }
}
