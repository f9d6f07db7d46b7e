//! Renderer collaborator contract.
//!
//! Drawing lives outside the core (WebGL in the browser, or a test double).
//! The frame driver calls `render` exactly once per tick, after all state
//! for that tick has been updated.

use super::camera::Camera3D;
use super::instance::InstanceBuffer;
use crate::api::types::Theme;
use crate::bodies::registry::Body;

/// Read-only view of everything a renderer needs for one frame.
pub struct FrameData<'a> {
    pub bodies: &'a [Body],
    pub instances: &'a InstanceBuffer,
    pub camera: &'a Camera3D,
    pub theme: Theme,
    /// Frame counter, starting at 1 for the first tick.
    pub frame: u64,
}

pub trait Renderer {
    fn render(&mut self, frame: &FrameData<'_>);
}

/// Renderer that draws nothing. Useful for headless runs.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameData<'_>) {}
}
