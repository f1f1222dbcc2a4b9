//! Agent systems (state machine logic)

pub mod contacts;
pub mod mode_switch;
pub mod steering;


pub use contacts::*;
pub use mode_switch::*;
pub use steering::*;
