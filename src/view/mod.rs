//! # Layer 2: Views and Adapters
//!
//! - `span.rs`: contiguous base-case view (pointer + count).
//! - `reverse.rs`: front/back exchange with the double-reversal identity.
//! - `zip.rs`: lockstep advance over a record of views, with one-level
//!   flattening in the `zip!` constructor.
//!
//! Adapters hold their sources directly by value (composition, never
//! inheritance), so arbitrarily deep stacks like zip-of-reverse-of-span are
//! just nested structs, lifetime-bounded by the copied sources.

pub mod reverse;
pub mod span;
pub mod zip;

// Re-export key types at this level
pub use reverse::{reverse, Reverse, Reversible};
pub use span::Span;
pub use zip::Zip;
