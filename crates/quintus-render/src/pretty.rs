//! Display helpers for numerically computed values.

use std::f64::consts::PI;
use std::fmt::Write as _;

use quintus_fourier::ExpSeries;

/// True when `x` is within display tolerance of an integer.
#[must_use]
pub fn is_near_integer(x: f64) -> bool {
    (x.round() - x).abs() < 1e-3
}

/// Folds a numerically computed value into a short readable form: values
/// near zero become `0`, near-integers lose their fractional noise, and
/// integer multiples of `1/π` are written as `k/pi`.
#[must_use]
pub fn pretty(x: f64) -> String {
    if x.abs() < 1e-3 {
        return "0".to_string();
    }
    if is_near_integer(x) {
        return format!("{}", x.round());
    }
    if is_near_integer(PI * x) {
        return format!("{}/pi", (PI * x).round());
    }
    format!("{x}")
}

/// Dumps an exponential series in the input syntax of GeoGebra: each
/// harmonic becomes a rotating unit vector scaled by the coefficient
/// magnitude and phase-shifted by its argument.
#[must_use]
pub fn geogebra(series: &ExpSeries) -> String {
    let mut out = String::new();
    for k in -series.order..=series.order {
        let c = series.coefficient(k);
        let kw = k as f64 * series.omega;
        let _ = write!(
            out,
            "{:.6}*(cos({kw}t+{:.6}),sin({kw}t+{:.6}))",
            c.norm(),
            c.arg(),
            c.arg()
        );
        if k != series.order {
            out.push_str(" + ");
        }
    }
    out
}
