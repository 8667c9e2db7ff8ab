pub mod cycle;
pub mod error;

pub use cycle::*;
