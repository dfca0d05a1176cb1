//! # quintus-poly
//!
//! Polynomial arithmetic over complex coefficients for the Quintus toolkit.
//!
//! This crate provides:
//! - [`Polynomial`], a dense univariate polynomial with `Complex64`
//!   coefficients and value semantics
//! - Long division with quotient and remainder
//! - A numerical root finder combining closed forms, deflation and
//!   Newton-Raphson iteration with random restarts
//!
//! ## Degree convention
//!
//! The zero polynomial is stored as an empty coefficient vector and has
//! degree **−1** (not −∞). Every other polynomial stores exactly
//! `degree() + 1` coefficients with a nonzero leading coefficient.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod polynomial;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use polynomial::{PolyError, Polynomial};
pub use roots::RootFindError;

/// Default tolerance for numerical comparisons against zero.
///
/// Used by callers that have no better problem-specific tolerance. All
/// comparisons are absolute; there is no relative-tolerance scaling.
pub const DEFAULT_EPSILON: f64 = 1e-7;
