pub mod api;
pub mod bodies;
pub mod core;
pub mod extensions;
pub mod input;
pub mod renderer;
pub mod runner;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{BodyConfig, CameraConfig, FocusConfig, OrreryConfig, SpeedBounds, TimeScaling};
pub use api::error::{OrreryError, Result};
pub use api::types::{SimEvent, Theme};
pub use bodies::{Body, BodyKind, BodyRegistry};
pub use crate::core::time::{FrameTimer, SimulationClock};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{Camera3D, Ray, Viewport};
pub use renderer::instance::{BodyInstance, InstanceBuffer};
pub use renderer::traits::{FrameData, NullRenderer, Renderer};
pub use runner::OrreryRunner;
pub use systems::focus::{FocusController, FocusRequest, FocusTransition};
pub use systems::interaction::InteractionController;
pub use systems::picking::{pick, pick_ndc, PickHit};

// Extensions: camera animation
pub use extensions::{CameraChannel, Easing, Tween, TweenId, TweenState, Tweener};
