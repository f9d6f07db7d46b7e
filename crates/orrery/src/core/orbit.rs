use crate::api::config::TimeScaling;
use crate::bodies::registry::{BodyKind, BodyRegistry};

/// Advance every body by one simulation tick.
///
/// Planets step their orbital angle by their current speed and their spin by
/// their base rotation speed; the star only spins, by `star_rotation_step`.
/// Under `TimeScaling::PerTick` the step ignores `dt` entirely.
///
/// The caller must invoke this at most once per frame.
pub fn advance(
    bodies: &mut BodyRegistry,
    dt: f32,
    scaling: TimeScaling,
    star_rotation_step: f32,
) {
    let k = scaling.factor(dt);
    for body in bodies.iter_mut() {
        match body.kind {
            BodyKind::Star => {
                body.advance_rotation(star_rotation_step * k);
            }
            BodyKind::Planet => {
                let orbit_step = body.current_orbital_speed() * k;
                let spin_step = body.base_rotation_speed * k;
                body.advance_orbit(orbit_step);
                body.advance_rotation(spin_step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::OrreryConfig;
    use crate::bodies::registry::{wrap_angle, Body};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn registry() -> BodyRegistry {
        let cfg = OrreryConfig::default();
        let mut rng = SmallRng::seed_from_u64(3);
        BodyRegistry::create(&cfg.bodies, cfg.speed_bounds, &mut rng)
    }

    fn angle_diff(a: f32, b: f32) -> f32 {
        wrap_angle(b - a)
    }

    #[test]
    fn planets_step_by_speed() {
        let mut reg = registry();
        let before: Vec<f32> = reg.iter().map(|b| b.orbital_angle()).collect();
        advance(&mut reg, 1.0 / 60.0, TimeScaling::PerTick, 0.005);
        for (i, body) in reg.iter().enumerate().skip(1) {
            let step = angle_diff(before[i], body.orbital_angle());
            assert!(
                (step - body.current_orbital_speed()).abs() < 1e-5,
                "{} stepped {}",
                body.name,
                step
            );
        }
    }

    #[test]
    fn per_tick_step_ignores_dt() {
        let mut a = registry();
        let mut b = registry();
        advance(&mut a, 1.0 / 30.0, TimeScaling::PerTick, 0.005);
        advance(&mut b, 1.0 / 144.0, TimeScaling::PerTick, 0.005);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.orbital_angle(), y.orbital_angle());
        }
    }

    #[test]
    fn per_second_scales_with_dt() {
        let mut reg = registry();
        let before = reg.get(3).unwrap().orbital_angle();
        let scaling = TimeScaling::PerSecond { reference_fps: 60.0 };
        advance(&mut reg, 1.0 / 30.0, scaling, 0.005);
        let earth = reg.get(3).unwrap();
        let step = angle_diff(before, earth.orbital_angle());
        assert!((step - 2.0 * earth.current_orbital_speed()).abs() < 1e-5);
    }

    #[test]
    fn star_spins_in_place() {
        let mut reg = registry();
        for _ in 0..10 {
            advance(&mut reg, 1.0 / 60.0, TimeScaling::PerTick, 0.005);
        }
        let sun = reg.get(0).unwrap();
        assert!((sun.rotation_angle() - 0.05).abs() < 1e-5);
        assert_eq!(sun.orbital_angle(), 0.0);
        assert_eq!(sun.position(), glam::Vec3::ZERO);
    }

    #[test]
    fn positions_recomputed_from_angle() {
        let mut reg = registry();
        for _ in 0..250 {
            advance(&mut reg, 1.0 / 60.0, TimeScaling::PerTick, 0.005);
        }
        for body in reg.iter() {
            let expected = Body::orbit_position(body.orbit_radius, body.orbital_angle());
            assert!((body.position() - expected).length() < 1e-4);
        }
    }

    #[test]
    fn retrograde_spin_stays_wrapped() {
        let mut reg = registry();
        advance(&mut reg, 1.0 / 60.0, TimeScaling::PerTick, 0.005);
        let venus = reg.get(2).unwrap();
        assert!(venus.base_rotation_speed < 0.0);
        assert!(venus.rotation_angle() >= 0.0 && venus.rotation_angle() < std::f32::consts::TAU);
    }
}
