use serde::{Deserialize, Serialize};

/// Outbound side effect produced by the core during a tick.
/// The host drains these after each frame and forwards them to its UI sinks
/// (tooltip, info panel, FPS counter, sliders).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum SimEvent {
    /// The pointer moved onto a different body.
    HoverChanged {
        index: usize,
        name: String,
        description: String,
        x: f32,
        y: f32,
    },
    /// The pointer moved while staying over the same body.
    HoverMoved { x: f32, y: f32 },
    /// The pointer left the last hovered body.
    HoverCleared,
    /// A body was clicked and is now the focus target.
    Selected {
        index: usize,
        name: String,
        description: String,
    },
    /// Rolling frames-per-second estimate.
    Fps(u32),
    /// Play/pause state after a toggle.
    RunningChanged(bool),
    /// Speeds after a simulation reset, indexed like the registry.
    SpeedsReset(Vec<f32>),
    /// A speed change was applied (value after clamping).
    SpeedApplied { index: usize, value: f32 },
    /// Colour theme after a toggle.
    ThemeChanged { theme: Theme, background: u32 },
}

/// Colour theme for the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Scene background colour as 0xRRGGBB.
    pub fn background(self) -> u32 {
        match self {
            Theme::Dark => 0x000011,
            Theme::Light => 0x87CEEB,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggles_background() {
        let t = Theme::default();
        assert_eq!(t.background(), 0x000011);
        assert_eq!(t.toggled().background(), 0x87CEEB);
        assert_eq!(t.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_string(&SimEvent::Fps(60)).unwrap();
        assert_eq!(json, r#"{"type":"fps","data":60}"#);

        let json = serde_json::to_string(&SimEvent::HoverCleared).unwrap();
        assert_eq!(json, r#"{"type":"hover_cleared"}"#);
    }
}
