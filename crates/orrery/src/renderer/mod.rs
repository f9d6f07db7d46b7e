pub mod camera;
pub mod instance;
pub mod traits;

pub use camera::{Camera3D, Ray, Viewport};
pub use instance::{BodyInstance, InstanceBuffer};
pub use traits::{FrameData, NullRenderer, Renderer};
