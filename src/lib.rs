pub mod cs;

pub use cs::cycle;
pub use cs::error::{Error, Result};
