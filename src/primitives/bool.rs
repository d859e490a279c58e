//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! The interesting consumer is `tier::dispatch`: a const bool produced by
//! `tier_check!` is lifted to a type-level `Bool` via [`SelectBool`], and
//! [`Bool::If`] then commits to one implementation strategy before anything
//! runs.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (general type selector).
    type If<Then, Else>;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
}

/// Convert a const bool to a type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Conditional type alias.
pub type If<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::If<T, E>;
