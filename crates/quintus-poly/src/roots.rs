//! Numerical root finding.
//!
//! Closed forms handle degrees one and two. Higher degrees run a deflation
//! loop: Newton-Raphson from a random starting point produces one root, the
//! polynomial is divided by that linear factor, and the search continues on
//! the quotient. The random-restart outer loop is the robustness mechanism;
//! a candidate is only accepted when the polynomial is small at it.

use num_complex::Complex64;
use num_traits::Zero;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

use crate::polynomial::Polynomial;

/// Upper bound on Newton-Raphson steps per attempt.
const NEWTON_MAX_STEPS: usize = 1000;

/// Upper bound on random restarts per root before giving up.
const MAX_RESTARTS: usize = 64;

/// Standard deviation of the normal distribution that seeds starting points,
/// wide relative to the root magnitudes this toolkit encounters.
const START_SIGMA: f64 = 100.0;

/// Step size below which an iteration counts as converged. Kept well under
/// any tolerance a caller would pass so the early exit never limits the
/// achievable accuracy; near multiple roots the iteration instead runs into
/// the step cap, exactly as accurate and still bounded.
const STEP_TOLERANCE: f64 = 1e-12;

/// Iterate magnitude treated as divergence.
const DIVERGENCE_LIMIT: f64 = 1e12;

/// Errors raised by the root finder.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RootFindError {
    /// No Newton-Raphson attempt produced an acceptable candidate within the
    /// restart budget.
    #[error("root search failed after {attempts} random restarts")]
    SearchFailed {
        /// Number of restarts consumed before giving up.
        attempts: usize,
    },
}

impl Polynomial {
    /// Finds all roots, real and complex, with multiplicity: a root of
    /// multiplicity `m` appears `m` times in the result, in no guaranteed
    /// order and not necessarily adjacent.
    ///
    /// A candidate root `z` is accepted when `|p(z)| < epsilon`. The zero
    /// polynomial returns a single NaN sentinel (every value is a root);
    /// callers must check for it. A nonzero constant has no roots.
    ///
    /// # Errors
    ///
    /// [`RootFindError::SearchFailed`] when the bounded random-restart
    /// search exhausts its budget without an acceptable candidate.
    pub fn roots(&self, epsilon: f64) -> Result<Vec<Complex64>, RootFindError> {
        match self.degree() {
            -1 => Ok(vec![Complex64::new(f64::NAN, f64::NAN)]),
            0 => Ok(Vec::new()),
            1 => Ok(vec![-self.coeff(0) / self.coeff(1)]),
            2 => {
                let a = self.coeff(2);
                let b = self.coeff(1);
                let c = self.coeff(0);
                let disc = (b * b - a * c * 4.0).sqrt();
                Ok(vec![(-b + disc) / (a * 2.0), (-b - disc) / (a * 2.0)])
            }
            _ => self.roots_by_deflation(epsilon),
        }
    }

    /// Deflation loop for degree ≥ 3.
    fn roots_by_deflation(&self, epsilon: f64) -> Result<Vec<Complex64>, RootFindError> {
        let derivative = self.derivative();
        let mut rng = ChaCha8Rng::seed_from_u64(1729);
        let starts = Normal::new(0.0, START_SIGMA).expect("distribution parameters are valid");

        let mut remaining = self.clone();
        let mut found = Vec::with_capacity(self.coeffs().len() - 1);

        while remaining.degree() > 2 {
            let candidate = search_root(&remaining, epsilon, &mut rng, &starts)?;
            // One polish step against the undeflated polynomial counteracts
            // the floating-point drift that accumulates across divisions.
            let candidate = polish(self, &derivative, candidate);
            let factor = Polynomial::from_root(candidate, 1);
            let (quotient, _) = remaining
                .div_rem(&factor)
                .expect("linear factor is nonzero");
            remaining = quotient;
            found.push(candidate);
        }

        found.extend(remaining.roots(epsilon)?);
        Ok(found)
    }
}

/// Searches for a single root of `p` with bounded random restarts.
fn search_root(
    p: &Polynomial,
    epsilon: f64,
    rng: &mut ChaCha8Rng,
    starts: &Normal<f64>,
) -> Result<Complex64, RootFindError> {
    let dp = p.derivative();
    for _ in 0..MAX_RESTARTS {
        let start = Complex64::new(starts.sample(rng), starts.sample(rng));
        let z = newton_iterate(p, &dp, start);
        if p.eval(z).norm() < epsilon {
            return Ok(z);
        }
    }
    Err(RootFindError::SearchFailed {
        attempts: MAX_RESTARTS,
    })
}

/// Newton-Raphson iteration `z ← z − p(z)/p'(z)` from `start`.
///
/// Stops on a converged step, a vanishing derivative, divergence, or the
/// step cap, and returns the final iterate; the caller decides acceptance.
fn newton_iterate(p: &Polynomial, dp: &Polynomial, start: Complex64) -> Complex64 {
    let mut z = start;
    for _ in 0..NEWTON_MAX_STEPS {
        let df = dp.eval(z);
        if df.is_zero() {
            break;
        }
        let step = p.eval(z) / df;
        z -= step;
        if !z.is_finite() || z.norm() > DIVERGENCE_LIMIT {
            break;
        }
        if step.norm() < STEP_TOLERANCE {
            break;
        }
    }
    z
}

/// One guarded Newton step against the original polynomial. The step is kept
/// only when it actually shrinks `|p|`, which keeps the polish harmless at
/// multiple roots where the derivative is nearly zero.
fn polish(p: &Polynomial, dp: &Polynomial, z: Complex64) -> Complex64 {
    let df = dp.eval(z);
    if df.is_zero() {
        return z;
    }
    let refined = z - p.eval(z) / df;
    if refined.is_finite() && p.eval(refined).norm() < p.eval(z).norm() {
        refined
    } else {
        z
    }
}
