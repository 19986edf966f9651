//! Utilities for benchmarking.

#[macro_use]
mod macros;

pub mod benchmark;

#[doc(hidden)]
pub use pastey;
