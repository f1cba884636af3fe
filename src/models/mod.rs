pub mod chain;
pub mod schedule;

pub use chain::*;
pub use schedule::*;
