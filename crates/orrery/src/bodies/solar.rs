//! Default data set: the Sun and the eight planets.
//!
//! Sizes and distances are exaggerated for readability, not to scale.
//! Speeds are radians per tick at roughly 60 ticks per second.

use crate::api::config::BodyConfig;
use crate::bodies::registry::BodyKind;

pub const SUN_RADIUS: f32 = 8.0;

/// Per-planet data: name, radius, orbit radius, orbital speed, spin speed, description.
const PLANETS: [(&str, f32, f32, f32, f32, &str); 8] = [
    ("Mercury", 1.5, 25.0, 0.04, 0.01,
        "Closest planet to the Sun. Extremely hot days, freezing nights."),
    ("Venus", 2.2, 32.0, 0.015, -0.005,
        "Hottest planet due to greenhouse effect. Rotates backwards."),
    ("Earth", 2.5, 42.0, 0.01, 0.02,
        "Our home planet. The only known planet with life."),
    ("Mars", 2.0, 52.0, 0.008, 0.018,
        "The Red Planet. Has the largest volcano in the solar system."),
    ("Jupiter", 6.0, 72.0, 0.005, 0.04,
        "Largest planet. Great Red Spot is a storm larger than Earth."),
    ("Saturn", 5.2, 95.0, 0.0038, 0.038,
        "Famous for its beautiful ring system. Less dense than water."),
    ("Uranus", 3.8, 118.0, 0.0027, 0.03,
        "Ice giant that rotates on its side. Has faint rings."),
    ("Neptune", 3.6, 140.0, 0.0022, 0.032,
        "Windiest planet with speeds up to 2,100 km/h."),
];

/// Sun first, then planets from the inside out.
pub fn default_bodies() -> Vec<BodyConfig> {
    let sun = BodyConfig {
        name: "Sun".to_string(),
        kind: BodyKind::Star,
        radius: SUN_RADIUS,
        orbit_radius: 0.0,
        orbital_speed: 0.0,
        rotation_speed: 0.0,
        description: "The star at the center of our solar system. Surface temperature: 5,778 K"
            .to_string(),
        initial_angle: None,
    };

    std::iter::once(sun)
        .chain(PLANETS.iter().map(
            |&(name, radius, orbit_radius, orbital_speed, rotation_speed, description)| BodyConfig {
                name: name.to_string(),
                kind: BodyKind::Planet,
                radius,
                orbit_radius,
                orbital_speed,
                rotation_speed,
                description: description.to_string(),
                initial_angle: None,
            },
        ))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbits_increase_outward() {
        let bodies = default_bodies();
        assert_eq!(bodies.len(), 9);
        for pair in bodies[1..].windows(2) {
            assert!(pair[0].orbit_radius < pair[1].orbit_radius);
        }
    }

    #[test]
    fn planets_clear_the_sun() {
        for body in &default_bodies()[1..] {
            assert!(body.orbit_radius - body.radius > SUN_RADIUS);
        }
    }
}
