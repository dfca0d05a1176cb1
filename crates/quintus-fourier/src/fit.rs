//! Coefficient fitting by numerical integration.

use std::f64::consts::PI;

use num_complex::Complex64;
use rayon::prelude::*;

use crate::series::{ExpSeries, TrigSeries};

/// Default number of integration steps per coefficient.
pub const DEFAULT_STEPS: usize = 16 * 1024;

/// Uniform-step Riemann sum of `f` over `[x1, x2]`.
pub fn integrate<F: Fn(f64) -> f64>(f: F, x1: f64, x2: f64, steps: usize) -> f64 {
    let dx = (x2 - x1) / steps as f64;
    let mut sum = 0.0;
    for i in 0..steps {
        sum += f(x1 + i as f64 * dx);
    }
    sum / steps as f64 * (x2 - x1)
}

/// Uniform-step Riemann sum of a complex-valued `f` over `[x1, x2]`.
pub fn integrate_complex<F: Fn(f64) -> Complex64>(
    f: F,
    x1: f64,
    x2: f64,
    steps: usize,
) -> Complex64 {
    let dx = (x2 - x1) / steps as f64;
    let mut sum = Complex64::new(0.0, 0.0);
    for i in 0..steps {
        sum += f(x1 + i as f64 * dx);
    }
    sum / steps as f64 * (x2 - x1)
}

/// Fits a real trigonometric series with `harmonics` harmonics to a
/// function with the given period:
/// `aₖ = (2/T)·∫₀ᵀ f(t)·cos(kωt) dt`, `bₖ` with sine.
pub fn fit<F: Fn(f64) -> f64>(f: F, period: f64, harmonics: usize) -> TrigSeries {
    let omega = 2.0 * PI / period;
    let scale = 2.0 / period;

    let mut coefficients = Vec::with_capacity(2 * harmonics + 1);
    coefficients.push(scale * integrate(&f, 0.0, period, DEFAULT_STEPS));
    for k in 1..=harmonics {
        let kw = k as f64 * omega;
        coefficients.push(scale * integrate(|t| f(t) * (kw * t).cos(), 0.0, period, DEFAULT_STEPS));
        coefficients.push(scale * integrate(|t| f(t) * (kw * t).sin(), 0.0, period, DEFAULT_STEPS));
    }

    TrigSeries::new(coefficients, period)
}

/// Coefficient `cₖ = (1/T)·∫₀ᵀ f(t)·e^{−ikωt} dt` of the exponential series.
fn exp_coefficient<F: Fn(f64) -> Complex64>(f: &F, period: f64, k: i64) -> Complex64 {
    let omega = 2.0 * PI / period;
    let kw = k as f64 * omega;
    integrate_complex(
        |t| f(t) * Complex64::from_polar(1.0, -kw * t),
        0.0,
        period,
        DEFAULT_STEPS,
    ) / period
}

/// Fits a two-sided exponential series of the given order.
pub fn fit_complex<F: Fn(f64) -> Complex64>(f: F, period: f64, order: i64) -> ExpSeries {
    assert!(order >= 0, "series order cannot be negative");
    let count = (2 * order + 1) as usize;
    let coefficients = (0..count)
        .map(|idx| exp_coefficient(&f, period, idx as i64 - order))
        .collect();
    ExpSeries::new(coefficients, period)
}

/// [`fit_complex`] with the coefficient integrals fanned out over the rayon
/// thread pool. Every integral is independent and owns no shared state; the
/// results are combined only after all tasks complete, in coefficient
/// order.
pub fn par_fit_complex<F: Fn(f64) -> Complex64 + Sync>(
    f: F,
    period: f64,
    order: i64,
) -> ExpSeries {
    assert!(order >= 0, "series order cannot be negative");
    let count = (2 * order + 1) as usize;
    let coefficients = (0..count)
        .into_par_iter()
        .map(|idx| exp_coefficient(&f, period, idx as i64 - order))
        .collect();
    ExpSeries::new(coefficients, period)
}
