pub mod action;
pub use action::*;

pub mod stakes;
pub use stakes::*;
