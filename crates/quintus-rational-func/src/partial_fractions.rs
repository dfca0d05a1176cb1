//! Complex partial fraction decomposition.
//!
//! Given `p(z)/q(z)`, the decomposer divides to obtain the polynomial part,
//! finds the poles as the roots of `q`, clusters numerically close roots
//! into multiplicity groups, and computes coefficients by the cover-up
//! (residue) method at each group's full multiplicity. A single remaining
//! unknown is solved by evaluating the identity at a sample point; the
//! finished decomposition is verified against the input before it is
//! returned.

use std::fmt;

use num_complex::Complex64;
use num_traits::Zero;
use thiserror::Error;

use quintus_poly::{PolyError, Polynomial, RootFindError};

/// Errors raised by [`decompose`].
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DecomposeError {
    /// The denominator was the zero polynomial.
    #[error(transparent)]
    Division(#[from] PolyError),

    /// The root search for the denominator gave up.
    #[error(transparent)]
    RootSearch(#[from] RootFindError),

    /// The reconstruction differed from the input by more than the
    /// tolerance. This happens when two or more coefficients stay
    /// unresolved (several poles of multiplicity above one) and their true
    /// values are not zero: the cover-up method only pins down the
    /// full-multiplicity term of each group, and only a single leftover
    /// unknown can be solved without a linear system.
    #[error(
        "incomplete decomposition: residual {residual:.3e} with {unresolved} unresolved coefficients"
    )]
    Incomplete {
        /// Number of coefficients that could not be determined.
        unresolved: usize,
        /// Reconstruction error observed at the verification point.
        residual: f64,
    },
}

/// One term `coefficient / (z − root)^multiplicity` of a decomposition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartialFractionTerm {
    /// Numerator of the term.
    pub coefficient: Complex64,
    /// Pole location.
    pub root: Complex64,
    /// Pole order of this term, at least 1.
    pub multiplicity: u32,
}

impl PartialFractionTerm {
    /// Evaluates the term at `z`. Unbounded near the pole.
    #[must_use]
    pub fn eval(&self, z: Complex64) -> Complex64 {
        self.coefficient / (z - self.root).powu(self.multiplicity)
    }
}

impl fmt::Display for PartialFractionTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})/(z-({}))^{}",
            self.coefficient, self.root, self.multiplicity
        )
    }
}

/// A partial fraction decomposition: polynomial part plus pole terms.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposition {
    /// Quotient of the polynomial division, zero for proper inputs.
    pub polynomial_part: Polynomial,
    /// Pole terms, ordered by pole location (real part, then imaginary).
    pub terms: Vec<PartialFractionTerm>,
}

impl Decomposition {
    /// Evaluates the decomposition at `z`, which must not be a pole.
    #[must_use]
    pub fn eval(&self, z: Complex64) -> Complex64 {
        self.polynomial_part.eval(z) + self.terms.iter().map(|t| t.eval(z)).sum::<Complex64>()
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.polynomial_part)?;
        for term in &self.terms {
            write!(f, " + {term}")?;
        }
        Ok(())
    }
}

/// Decomposes `p(z)/q(z)` into a polynomial part and simple-pole terms so
/// that `p(z)/q(z) ≈ polynomial_part(z) + Σ termᵢ(z)` within `epsilon` for
/// `z` away from the poles.
///
/// Roots of `q` closer than `epsilon` are treated as one pole of higher
/// multiplicity, snapped to the first value seen.
///
/// # Errors
///
/// - [`DecomposeError::Division`] if `q` is the zero polynomial
/// - [`DecomposeError::RootSearch`] if the root finder gives up on `q`
/// - [`DecomposeError::Incomplete`] if the verified reconstruction misses
///   the input by `epsilon` or more
pub fn decompose(
    p: &Polynomial,
    q: &Polynomial,
    epsilon: f64,
) -> Result<Decomposition, DecomposeError> {
    let (s, r) = p.div_rem(q)?;

    let mut roots = q.roots(epsilon)?;
    roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));

    // Walk the sorted roots and fold near-duplicates into multiplicity
    // groups. Snapping to the group's first value keeps every entry of a
    // group bitwise identical, so groups stay contiguous runs.
    let mut terms: Vec<PartialFractionTerm> = Vec::with_capacity(roots.len());
    for root in roots {
        let term = match terms.last() {
            Some(prev) if (root - prev.root).norm() < epsilon => PartialFractionTerm {
                coefficient: Complex64::zero(),
                root: prev.root,
                multiplicity: prev.multiplicity + 1,
            },
            _ => PartialFractionTerm {
                coefficient: Complex64::zero(),
                root,
                multiplicity: 1,
            },
        };
        terms.push(term);
    }

    // Cover-up method: only the last entry of each run carries the group's
    // full multiplicity m, and only there is r(root) / (q/(z−root)^m)(root)
    // the exact coefficient. Lower-multiplicity entries stay pending.
    let mut pending = Vec::new();
    for i in 0..terms.len() {
        let group_end = i + 1 == terms.len() || terms[i + 1].root != terms[i].root;
        if group_end {
            let root = terms[i].root;
            let (qm, _) = q.div_rem(&Polynomial::from_root(root, terms[i].multiplicity))?;
            terms[i].coefficient = r.eval(root) / qm.eval(root);
        } else {
            pending.push(i);
        }
    }

    // A single leftover coefficient is determined by the identity at one
    // sample point; the still-zero pending term drops out of the known sum.
    let mut resolution_point = None;
    if pending.len() == 1 {
        let index = pending[0];
        let z0 = sample_point(&terms, None);
        let known: Complex64 = terms.iter().map(|t| t.eval(z0)).sum();
        let target = r.eval(z0) / q.eval(z0);
        let term = &mut terms[index];
        term.coefficient = (target - known) * (z0 - term.root).powu(term.multiplicity);
        resolution_point = Some(z0);
    }

    // Verify the reconstruction at a fresh sample point. Coefficients that
    // could not be determined surface here instead of being returned as
    // silent zeros.
    let z1 = sample_point(&terms, resolution_point);
    let reconstructed =
        s.eval(z1) + terms.iter().map(|t| t.eval(z1)).sum::<Complex64>();
    let residual = (p.eval(z1) / q.eval(z1) - reconstructed).norm();
    if residual >= epsilon {
        return Err(DecomposeError::Incomplete {
            unresolved: pending.len(),
            residual,
        });
    }

    // Terms that kept an exactly-zero coefficient contribute nothing.
    terms.retain(|t| !t.coefficient.is_zero());

    Ok(Decomposition {
        polynomial_part: s,
        terms,
    })
}

/// Picks a real sample point at least 1/2 away from every pole and from
/// `avoid`. Each excluded disk rules out at most one non-negative integer,
/// so scanning 0, 1, 2, … terminates quickly.
fn sample_point(terms: &[PartialFractionTerm], avoid: Option<Complex64>) -> Complex64 {
    let mut k = 0.0;
    loop {
        let z = Complex64::new(k, 0.0);
        let clear = terms.iter().all(|t| (z - t.root).norm() >= 0.5)
            && avoid.map_or(true, |a| (z - a).norm() >= 0.5);
        if clear {
            return z;
        }
        k += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quintus_poly::DEFAULT_EPSILON;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn real_poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::from_descending(coeffs.iter().map(|&x| c(x, 0.0)).collect())
    }

    #[test]
    fn zero_denominator_is_an_error() {
        let p = real_poly(&[1.0]);
        assert_eq!(
            decompose(&p, &Polynomial::zero(), DEFAULT_EPSILON),
            Err(DecomposeError::Division(PolyError::DivisionByZero))
        );
    }

    #[test]
    fn constant_denominator_has_no_terms() {
        // (2z + 4) / 2 = z + 2
        let p = real_poly(&[2.0, 4.0]);
        let q = real_poly(&[2.0]);
        let d = decompose(&p, &q, DEFAULT_EPSILON).unwrap();
        assert!(d.terms.is_empty());
        assert_eq!(d.polynomial_part, real_poly(&[1.0, 2.0]));
    }

    #[test]
    fn distinct_simple_poles_use_cover_up_only() {
        // 1 / (z(z + 1)) = 1/z - 1/(z + 1)
        let p = real_poly(&[1.0]);
        let q = Polynomial::from_roots(&[c(0.0, 0.0), c(-1.0, 0.0)]);
        let d = decompose(&p, &q, DEFAULT_EPSILON).unwrap();

        assert!(d.polynomial_part.is_zero());
        assert_eq!(d.terms.len(), 2);
        // Sorted by real part: the pole at -1 comes first.
        assert!((d.terms[0].root - c(-1.0, 0.0)).norm() < 1e-9);
        assert!((d.terms[0].coefficient - c(-1.0, 0.0)).norm() < 1e-9);
        assert_eq!(d.terms[0].multiplicity, 1);
        assert!((d.terms[1].root - c(0.0, 0.0)).norm() < 1e-9);
        assert!((d.terms[1].coefficient - c(1.0, 0.0)).norm() < 1e-9);
        assert_eq!(d.terms[1].multiplicity, 1);
    }

    #[test]
    fn triple_pole_collapses_to_a_single_exact_term() {
        // 1 / (z - 2)^3: the lower-multiplicity coefficients are truly zero,
        // so the cover-up term is the whole decomposition.
        let p = real_poly(&[1.0]);
        let q = real_poly(&[1.0, -6.0, 12.0, -8.0]);
        let d = decompose(&p, &q, 1e-3).unwrap();

        assert!(d.polynomial_part.is_zero());
        assert_eq!(d.terms.len(), 1);
        let term = d.terms[0];
        assert_eq!(term.multiplicity, 3);
        assert!((term.root - c(2.0, 0.0)).norm() < 1e-2);
        assert!((term.coefficient - c(1.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn double_pole_resolves_the_pending_coefficient() {
        // (z^3 - 4z^2 - 2z + 17) / (z - 3)^2
        //   = (z + 2) + 1/(z - 3) + 2/(z - 3)^2
        let p = real_poly(&[1.0, -4.0, -2.0, 17.0]);
        let q = real_poly(&[1.0, -6.0, 9.0]);
        let d = decompose(&p, &q, DEFAULT_EPSILON).unwrap();

        assert_eq!(d.polynomial_part, real_poly(&[1.0, 2.0]));
        assert_eq!(d.terms.len(), 2);

        assert_eq!(d.terms[0].multiplicity, 1);
        assert!((d.terms[0].root - c(3.0, 0.0)).norm() < 1e-9);
        assert!((d.terms[0].coefficient - c(1.0, 0.0)).norm() < 1e-9);

        assert_eq!(d.terms[1].multiplicity, 2);
        assert!((d.terms[1].root - c(3.0, 0.0)).norm() < 1e-9);
        assert!((d.terms[1].coefficient - c(2.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn reconstruction_matches_the_input_away_from_poles() {
        // (3z + 1) / (z(z + 1)(z - 2))
        let p = real_poly(&[3.0, 1.0]);
        let q = Polynomial::from_roots(&[c(0.0, 0.0), c(-1.0, 0.0), c(2.0, 0.0)]);
        let d = decompose(&p, &q, DEFAULT_EPSILON).unwrap();

        for z in [c(5.0, 1.0), c(-3.0, 0.5), c(0.5, -2.0)] {
            let expected = p.eval(z) / q.eval(z);
            assert!((d.eval(z) - expected).norm() < DEFAULT_EPSILON);
        }
    }

    #[test]
    fn improper_input_keeps_the_polynomial_part() {
        // (z^2 + 1) / (z + 1) = (z - 1) + 2/(z + 1)
        let p = real_poly(&[1.0, 0.0, 1.0]);
        let q = real_poly(&[1.0, 1.0]);
        let d = decompose(&p, &q, DEFAULT_EPSILON).unwrap();

        assert_eq!(d.polynomial_part, real_poly(&[1.0, -1.0]));
        assert_eq!(d.terms.len(), 1);
        assert!((d.terms[0].coefficient - c(2.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn two_unresolved_coefficients_are_reported() {
        // 1 / ((z - 1)^2 (z - 2)^2): both groups leave a pending
        // multiplicity-1 term whose true coefficient is nonzero, which the
        // single-unknown resolution cannot handle.
        let p = real_poly(&[1.0]);
        let q = &Polynomial::from_root(c(1.0, 0.0), 2) * &Polynomial::from_root(c(2.0, 0.0), 2);
        match decompose(&p, &q, 1e-2) {
            Err(DecomposeError::Incomplete { unresolved, .. }) => assert_eq!(unresolved, 2),
            other => panic!("expected an incomplete decomposition, got {other:?}"),
        }
    }

    #[test]
    fn term_display_is_readable() {
        let term = PartialFractionTerm {
            coefficient: c(2.0, 0.0),
            root: c(3.0, 0.0),
            multiplicity: 2,
        };
        assert_eq!(term.to_string(), "(2+0i)/(z-(3+0i))^2");
    }
}
