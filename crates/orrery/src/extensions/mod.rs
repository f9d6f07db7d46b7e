// extensions/mod.rs
//
// Camera animation building blocks. Decoupled from bodies and picking;
// the focus controller composes them.

pub mod easing;
pub mod tween;

pub use easing::{Easing, ease_vec3, lerp_vec3};
pub use tween::{CameraChannel, Tween, TweenId, TweenState, Tweener};
