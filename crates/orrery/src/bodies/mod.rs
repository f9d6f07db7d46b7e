pub mod registry;
pub mod solar;

pub use registry::{Body, BodyKind, BodyRegistry};
