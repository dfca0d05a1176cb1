//! Fourier-series fitting for the Quintus toolkit.
//!
//! A periodic function is approximated either by a real trigonometric
//! polynomial ([`TrigSeries`]) or by a two-sided complex exponential series
//! ([`ExpSeries`]). Coefficients are computed by uniform-step numerical
//! integration over one period; the exponential fit also comes in a
//! rayon-parallel variant that computes the independent coefficient
//! integrals concurrently.

pub mod fit;
pub mod series;

pub use fit::{
    fit, fit_complex, integrate, integrate_complex, par_fit_complex, DEFAULT_STEPS,
};
pub use series::{ExpSeries, TrigSeries};
