/// Input events the orrery understands: raw pointer activity from the canvas
/// plus the discrete controls of the host UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to canvas pixel coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A click landed at canvas pixel coordinates (x, y).
    PointerClick { x: f32, y: f32 },
    /// Slider `index` was dragged to `value` (radians per tick).
    SpeedChanged { index: usize, value: f32 },
    /// Play/pause button.
    ToggleRunning,
    /// Reset button: fresh orbits, default speeds.
    ResetRequested,
    /// Focus a body by index, or return to the home view with `None`.
    FocusRequested(Option<usize>),
    /// Top-down view button.
    TopView,
    /// The canvas was resized to `width` x `height` pixels.
    Resize { width: f32, height: f32 },
    ToggleTheme,
}

/// A queue of input events.
/// The host writes events into the queue; the runner drains it once per tick,
/// so events are handled in arrival order between two frames.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::ToggleRunning);
        q.push(InputEvent::SpeedChanged { index: 3, value: 0.02 });
        assert_eq!(q.len(), 3);

        let events = q.drain();
        assert_eq!(events[0], InputEvent::PointerMove { x: 10.0, y: 20.0 });
        assert_eq!(events[1], InputEvent::ToggleRunning);
        assert_eq!(events[2], InputEvent::SpeedChanged { index: 3, value: 0.02 });
        assert!(q.is_empty());
    }

    #[test]
    fn focus_request_payload() {
        let mut q = InputQueue::new();
        q.push(InputEvent::FocusRequested(None));
        q.push(InputEvent::FocusRequested(Some(4)));
        let got: Vec<_> = q.iter().copied().collect();
        assert_eq!(got.len(), 2);
        match got[1] {
            InputEvent::FocusRequested(Some(i)) => assert_eq!(i, 4),
            _ => panic!("Expected FocusRequested(Some)"),
        }
    }
}
