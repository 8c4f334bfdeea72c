//! CLI command implementations

mod expand;
mod info;

pub use expand::expand;
pub use info::info;
