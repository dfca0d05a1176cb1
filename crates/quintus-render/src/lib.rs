//! Rendering for the Quintus toolkit.
//!
//! Typeset output lives here: the [`ToLatex`] trait turns complex numbers,
//! polynomials, partial fraction terms, rationals, matrices and recorded
//! row operations into LaTeX source, the way a worked derivation would be
//! written. Plain-text `Display` stays on the value types themselves; this
//! crate only owns the typeset forms plus a few display helpers.

pub mod latex;
pub mod pretty;

pub use latex::{chop, ToLatex};
pub use pretty::{geogebra, is_near_integer, pretty};
