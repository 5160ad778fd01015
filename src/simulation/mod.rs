pub mod outcome;
pub use outcome::*;

pub mod spot;
pub use spot::*;
