//! Fourier fit of a square wave.
//!
//! Fits the odd square wave on [0, 2π) and prints the classic 4/(kπ)
//! harmonic pattern, then the equivalent exponential series as a GeoGebra
//! expression.

use std::f64::consts::PI;

use quintus::prelude::*;

fn main() {
    let square = |t: f64| if t % (2.0 * PI) < PI { 1.0 } else { -1.0 };

    let series = fit(square, 2.0 * PI, 5);
    println!("trigonometric fit: {series}");
    for (i, c) in series.coefficients.iter().enumerate() {
        println!("  c[{i}] = {}", pretty(*c));
    }

    let csquare = move |t: f64| Complex64::new(square(t), 0.0);
    let exp_series = par_fit_complex(csquare, 2.0 * PI, 5);
    println!("geogebra: {}", geogebra(&exp_series));
}
