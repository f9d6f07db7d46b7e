//! Pointer hover and click handling.
//!
//! Translates pointer positions into at most one pick each and turns the
//! result into hover/selection state plus outbound events. Keeps no history
//! beyond the current hovered and selected indices.

use glam::Vec2;

use super::picking::{pick_ndc, PickHit};
use crate::api::types::SimEvent;
use crate::bodies::registry::BodyRegistry;
use crate::renderer::camera::{Camera3D, Viewport};

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    hovered: Option<usize>,
    selected: Option<usize>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn reset(&mut self) {
        self.hovered = None;
        self.selected = None;
    }

    /// Update hover state for a pointer at `screen` pixels.
    ///
    /// Emits `HoverChanged` when a different body comes under the pointer,
    /// `HoverMoved` while it stays on the same one, and `HoverCleared` once
    /// when it leaves. Nothing is emitted while moving over empty space.
    pub fn on_pointer_move(
        &mut self,
        screen: Vec2,
        viewport: &Viewport,
        camera: &Camera3D,
        bodies: &BodyRegistry,
        events: &mut Vec<SimEvent>,
    ) -> Option<PickHit> {
        let hit = pick_at(screen, viewport, camera, bodies);
        match (hit, self.hovered) {
            (Some(hit), Some(prev)) if prev == hit.index => {
                events.push(SimEvent::HoverMoved { x: screen.x, y: screen.y });
            }
            (Some(hit), _) => {
                self.hovered = Some(hit.index);
                if let Some(body) = bodies.get(hit.index) {
                    events.push(SimEvent::HoverChanged {
                        index: hit.index,
                        name: body.name.clone(),
                        description: body.description.clone(),
                        x: screen.x,
                        y: screen.y,
                    });
                }
            }
            (None, Some(_)) => {
                self.hovered = None;
                events.push(SimEvent::HoverCleared);
            }
            (None, None) => {}
        }
        hit
    }

    /// Select the body under a click. Returns its index so the caller can
    /// start a focus transition. A click on empty space changes nothing and
    /// keeps the previous selection.
    pub fn on_click(
        &mut self,
        screen: Vec2,
        viewport: &Viewport,
        camera: &Camera3D,
        bodies: &BodyRegistry,
        events: &mut Vec<SimEvent>,
    ) -> Option<usize> {
        let hit = pick_at(screen, viewport, camera, bodies)?;
        let body = bodies.get(hit.index)?;
        self.selected = Some(hit.index);
        events.push(SimEvent::Selected {
            index: hit.index,
            name: body.name.clone(),
            description: body.description.clone(),
        });
        Some(hit.index)
    }
}

fn pick_at(
    screen: Vec2,
    viewport: &Viewport,
    camera: &Camera3D,
    bodies: &BodyRegistry,
) -> Option<PickHit> {
    if !viewport.is_valid() {
        return None;
    }
    pick_ndc(viewport.to_ndc(screen), camera, bodies.as_slice())
}
