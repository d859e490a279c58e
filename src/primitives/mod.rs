//! # Layer 0: Primitives
//!
//! Basic building blocks for the view system:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `tuple.rs`: Record rank and concatenation (the tuple interface Zip uses).

pub mod bool;
pub mod tuple;

// Re-export key types at this level
pub use bool::{Absent, Bool, If, Present, SelectBool};
pub use tuple::{Arity, TupleCat};
