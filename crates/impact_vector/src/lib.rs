//! Fixed-size single-precision vectors with 2, 3 and 4 components.
//!
//! All three arities are instances of the one generic [`Vector`] type, so
//! they share every operation and its exact numerical behavior.

#[macro_use]
mod macros;

pub mod arity;
pub mod num;
pub mod vector;

#[cfg(feature = "benchmark")]
pub mod benchmark;

pub use arity::{Arity, HasW, HasZ, SupportedArity};
pub use num::EPSILON;
pub use vector::{Vector, Vector2, Vector3, Vector4};
