//! Trigonometric and exponential series values.

use std::f64::consts::PI;
use std::fmt;

use num_complex::Complex64;

/// A real trigonometric polynomial
/// `a₀/2 + Σₖ aₖ·cos(kωt) + bₖ·sin(kωt)` with fundamental period `period`.
///
/// Coefficients are stored interleaved: index 0 holds `a₀`, odd indices hold
/// the cosine coefficients `a₁, a₂, …` and even indices above zero the sine
/// coefficients `b₁, b₂, …`.
#[derive(Clone, Debug, PartialEq)]
pub struct TrigSeries {
    /// Interleaved coefficients `[a₀, a₁, b₁, a₂, b₂, …]`.
    pub coefficients: Vec<f64>,
    /// Fundamental period.
    pub period: f64,
    /// Angular frequency `2π / period`.
    pub omega: f64,
}

impl TrigSeries {
    /// Wraps interleaved coefficients for the given period.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient list is empty (there is no `a₀`).
    #[must_use]
    pub fn new(coefficients: Vec<f64>, period: f64) -> Self {
        assert!(!coefficients.is_empty(), "a trig series needs at least a₀");
        Self {
            coefficients,
            period,
            omega: 2.0 * PI / period,
        }
    }

    /// Number of harmonics carried beyond the constant term.
    #[must_use]
    pub fn harmonics(&self) -> usize {
        (self.coefficients.len() - 1) / 2
    }

    /// Evaluates the series at `t`.
    #[must_use]
    pub fn eval(&self, t: f64) -> f64 {
        let mut sum = self.coefficients[0] / 2.0;
        for (i, &c) in self.coefficients.iter().enumerate().skip(1) {
            let k = ((i - 1) / 2 + 1) as f64;
            let phase = k * self.omega * t;
            sum += if i % 2 == 1 {
                c * phase.cos()
            } else {
                c * phase.sin()
            };
        }
        sum
    }
}

impl fmt::Display for TrigSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coefficients[0] / 2.0)?;
        for (i, c) in self.coefficients.iter().enumerate().skip(1) {
            let k = (i - 1) / 2 + 1;
            let basis = if i % 2 == 1 { "cos" } else { "sin" };
            write!(f, " + {c} * {basis}({k}t * 2pi/{})", self.period)?;
        }
        Ok(())
    }
}

/// A two-sided complex exponential series `Σₖ cₖ·e^{ikωt}` for
/// `k ∈ [−order, order]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpSeries {
    /// Coefficients indexed by `k + order`.
    pub coefficients: Vec<Complex64>,
    /// Fundamental period.
    pub period: f64,
    /// Angular frequency `2π / period`.
    pub omega: f64,
    /// Highest harmonic `n`; the series carries `2n + 1` coefficients.
    pub order: i64,
}

impl ExpSeries {
    /// Wraps a coefficient list of odd length `2n + 1` for the given period.
    ///
    /// # Panics
    ///
    /// Panics if the coefficient count is even or zero.
    #[must_use]
    pub fn new(coefficients: Vec<Complex64>, period: f64) -> Self {
        assert!(
            coefficients.len() % 2 == 1,
            "an exponential series carries 2n+1 coefficients"
        );
        let order = (coefficients.len() / 2) as i64;
        Self {
            coefficients,
            period,
            omega: 2.0 * PI / period,
            order,
        }
    }

    /// Returns the coefficient of `e^{ikωt}`.
    #[must_use]
    pub fn coefficient(&self, k: i64) -> Complex64 {
        self.coefficients[(k + self.order) as usize]
    }

    /// Evaluates the series at `t`.
    #[must_use]
    pub fn eval(&self, t: f64) -> Complex64 {
        let mut sum = Complex64::new(0.0, 0.0);
        for k in -self.order..=self.order {
            let phase = k as f64 * self.omega * t;
            sum += self.coefficient(k) * Complex64::from_polar(1.0, phase);
        }
        sum
    }
}

impl fmt::Display for ExpSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in -self.order..=self.order {
            let c = self.coefficient(k);
            write!(f, "({} + {}i)*e^({}*{}*t*i)", c.re, c.im, k, self.omega)?;
            if k != self.order {
                write!(f, " + ")?;
            }
        }
        Ok(())
    }
}
