pub mod orbit;
pub mod time;
