pub mod focus;
pub mod interaction;
pub mod picking;

pub use focus::{FocusController, FocusRequest, FocusTransition};
pub use interaction::InteractionController;
pub use picking::{pick, pick_ndc, PickHit};
