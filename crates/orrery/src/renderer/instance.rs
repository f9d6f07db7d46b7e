use bytemuck::{Pod, Zeroable};

use crate::bodies::registry::{Body, BodyKind};

/// Per-body draw data in a flat layout a JS renderer can read straight out
/// of WASM memory. 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Spin angle around the Y axis in radians.
    pub rotation: f32,
    pub radius: f32,
    /// 0 = star, 1 = planet.
    pub kind: f32,
    /// 1.0 while the pointer is over this body.
    pub hovered: f32,
    /// 1.0 for the current focus/selection.
    pub selected: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_body(body: &Body, hovered: bool, selected: bool) -> Self {
        let p = body.position();
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
            rotation: body.rotation_angle(),
            radius: body.radius,
            kind: match body.kind {
                BodyKind::Star => 0.0,
                BodyKind::Planet => 1.0,
            },
            hovered: if hovered { 1.0 } else { 0.0 },
            selected: if selected { 1.0 } else { 0.0 },
        }
    }
}

/// One instance per body, rebuilt every frame in registry order.
pub struct InstanceBuffer {
    pub instances: Vec<BodyInstance>,
}

impl InstanceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    /// Refill from the registry.
    pub fn rebuild<'a>(
        &mut self,
        bodies: impl Iterator<Item = &'a Body>,
        hovered: Option<usize>,
        selected: Option<usize>,
    ) {
        self.instances.clear();
        for (i, body) in bodies.enumerate() {
            self.instances
                .push(BodyInstance::from_body(body, hovered == Some(i), selected == Some(i)));
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer for direct reads from WASM memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::with_capacity(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::OrreryConfig;
    use crate::bodies::registry::BodyRegistry;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn body_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), BodyInstance::STRIDE_BYTES);
        assert_eq!(BodyInstance::FLOATS, 8);
    }

    #[test]
    fn rebuild_flags_hover_and_selection() {
        let cfg = OrreryConfig::default();
        let reg = BodyRegistry::create(&cfg.bodies, cfg.speed_bounds, &mut SmallRng::seed_from_u64(1));
        let mut buf = InstanceBuffer::default();
        buf.rebuild(reg.iter(), Some(2), Some(0));

        assert_eq!(buf.instance_count(), 9);
        assert_eq!(buf.instances[0].kind, 0.0);
        assert_eq!(buf.instances[0].selected, 1.0);
        assert_eq!(buf.instances[2].hovered, 1.0);
        assert_eq!(buf.instances[3].hovered, 0.0);
        assert_eq!(buf.as_floats().len(), 9 * BodyInstance::FLOATS);
        assert_eq!(buf.instances[4].x, reg.get(4).unwrap().position().x);
    }
}
