//! Command implementations

mod describe;
mod flags;

pub use describe::run_describe;
pub use flags::run_flags;
