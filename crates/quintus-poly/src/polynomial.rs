//! Dense univariate polynomials with complex coefficients.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_complex::Complex64;
use num_traits::Zero;
use thiserror::Error;

/// Errors raised by polynomial arithmetic.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PolyError {
    /// Long division with the zero polynomial as divisor.
    #[error("division by the zero polynomial")]
    DivisionByZero,
}

/// A dense univariate polynomial over `Complex64`.
///
/// Coefficients are stored in ascending exponent order: `coeffs[i]` is the
/// coefficient of `z^i`. The representation is normalized on construction:
/// trailing zero coefficients are stripped, and the zero polynomial is the
/// empty vector. Every operation returns a new value; nothing mutates a
/// polynomial after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    /// Coefficients in ascending exponent order.
    coeffs: Vec<Complex64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending exponent order.
    ///
    /// Trailing zero coefficients are stripped so that the stored degree is
    /// minimal; an all-zero input collapses to the zero polynomial.
    #[must_use]
    pub fn new(mut coeffs: Vec<Complex64>) -> Self {
        while coeffs.last().is_some_and(Complex64::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Creates a polynomial from coefficients in descending exponent order,
    /// the usual written-out form: `[1, -6, 9]` is `z² − 6z + 9`.
    #[must_use]
    pub fn from_descending(mut coeffs: Vec<Complex64>) -> Self {
        coeffs.reverse();
        Self::new(coeffs)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Complex64::new(1.0, 0.0))
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: Complex64) -> Self {
        Self::new(vec![c])
    }

    /// Creates the monomial `c·z^degree`; all lower coefficients are zero.
    #[must_use]
    pub fn monomial(c: Complex64, degree: usize) -> Self {
        let mut coeffs = vec![Complex64::zero(); degree + 1];
        coeffs[degree] = c;
        Self::new(coeffs)
    }

    /// Creates `(z − r)^exponent` by repeated multiplication of the linear
    /// factor. `exponent = 0` yields the constant polynomial 1.
    #[must_use]
    pub fn from_root(r: Complex64, exponent: u32) -> Self {
        let linear = Self::new(vec![-r, Complex64::new(1.0, 0.0)]);
        let mut result = Self::one();
        for _ in 0..exponent {
            result = &result * &linear;
        }
        result
    }

    /// Creates the product of `(z − rᵢ)` over all the given roots.
    ///
    /// An empty list yields the **zero polynomial**, not the empty product 1.
    /// This matches the historical behavior of the toolkit and is relied on
    /// by callers that treat "no roots" as "no polynomial".
    #[must_use]
    pub fn from_roots(roots: &[Complex64]) -> Self {
        let Some((first, rest)) = roots.split_first() else {
            return Self::zero();
        };
        let mut result = Self::from_root(*first, 1);
        for r in rest {
            result = &result * &Self::from_root(*r, 1);
        }
        result
    }

    /// Returns the degree: the highest exponent with a nonzero coefficient,
    /// or −1 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> i64 {
        self.coeffs.len() as i64 - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the coefficient of `z^i`, zero beyond the stored degree.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Complex64 {
        self.coeffs.get(i).copied().unwrap_or_else(Complex64::zero)
    }

    /// Returns all stored coefficients in ascending exponent order.
    ///
    /// Renderers consume this to format a polynomial without reaching into
    /// the representation.
    #[must_use]
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `z` using Horner's method.
    #[must_use]
    pub fn eval(&self, z: Complex64) -> Complex64 {
        self.coeffs
            .iter()
            .rev()
            .fold(Complex64::zero(), |acc, &c| acc * z + c)
    }

    /// Returns the formal derivative.
    ///
    /// The derivative of the zero polynomial and of any constant is the zero
    /// polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * i as f64)
            .collect();
        Self::new(coeffs)
    }

    /// Long division: returns `(quotient, remainder)` with
    /// `self = quotient·divisor + remainder` and
    /// `degree(remainder) < degree(divisor)` (or a zero remainder).
    ///
    /// Quotient positions skipped by leading-term cancellation are padded
    /// with zeros, so the quotient coefficients always line up with their
    /// exponents.
    ///
    /// # Errors
    ///
    /// [`PolyError::DivisionByZero`] if `divisor` is the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        if self.degree() < divisor.degree() {
            return Ok((Self::zero(), self.clone()));
        }

        let d = &divisor.coeffs;
        let d_lead = d[d.len() - 1];
        let mut quotient = vec![Complex64::zero(); self.coeffs.len() - d.len() + 1];
        let mut rem = self.coeffs.clone();

        while rem.len() >= d.len() {
            let shift = rem.len() - d.len();
            let c = rem[rem.len() - 1] / d_lead;
            quotient[shift] = c;

            for i in 0..d.len() - 1 {
                rem[shift + i] = rem[shift + i] - c * d[i];
            }
            // The leading term cancels by construction; drop it explicitly
            // rather than trusting floating-point subtraction to produce an
            // exact zero.
            rem.pop();
            while rem.last().is_some_and(Complex64::is_zero) {
                rem.pop();
            }
        }

        Ok((Self::new(quotient), Self::new(rem)))
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) + rhs.coeff(i)).collect();
        Polynomial::new(coeffs)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        &self + &rhs
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) - rhs.coeff(i)).collect();
        Polynomial::new(coeffs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Polynomial {
        &self - &rhs
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|&c| -c).collect())
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![Complex64::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(coeffs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        &self * &rhs
    }
}

impl Mul<Complex64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Complex64) -> Polynomial {
        self * &Polynomial::constant(rhs)
    }
}

impl Mul<Complex64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Complex64) -> Polynomial {
        &self * rhs
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "({c})")?,
                1 => write!(f, "({c})z")?,
                _ => write!(f, "({c})z^{i}")?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn real_poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::from_descending(coeffs.iter().map(|&x| c(x, 0.0)).collect())
    }

    #[test]
    fn trims_trailing_zeros() {
        // 0z^3 + 0z^2 + z - 5 = z - 5
        let p = real_poly(&[0.0, 0.0, 1.0, -5.0]);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.coeffs().len(), 2);
        assert_eq!(p.coeff(0), c(-5.0, 0.0));
        assert_eq!(p.coeff(1), c(1.0, 0.0));
    }

    #[test]
    fn zero_polynomial_has_degree_minus_one() {
        assert_eq!(Polynomial::zero().degree(), -1);
        assert_eq!(real_poly(&[0.0, 0.0]).degree(), -1);
        assert!(real_poly(&[]).is_zero());
    }

    #[test]
    fn degree_matches_coefficient_count() {
        for coeffs in [&[1.0][..], &[1.0, 2.0][..], &[3.0, 0.0, 1.0][..]] {
            let p = real_poly(coeffs);
            assert_eq!(p.coeffs().len() as i64, p.degree() + 1);
        }
    }

    #[test]
    fn monomial_pads_lower_coefficients() {
        let p = Polynomial::monomial(c(3.0, 0.0), 4);
        assert_eq!(p.degree(), 4);
        assert_eq!(p.coeff(4), c(3.0, 0.0));
        for i in 0..4 {
            assert!(p.coeff(i).is_zero());
        }
    }

    #[test]
    fn from_root_expands_the_power() {
        // (z - 2)^3 = z^3 - 6z^2 + 12z - 8
        let p = Polynomial::from_root(c(2.0, 0.0), 3);
        assert_eq!(p, real_poly(&[1.0, -6.0, 12.0, -8.0]));
    }

    #[test]
    fn from_roots_of_empty_list_is_zero() {
        assert!(Polynomial::from_roots(&[]).is_zero());
    }

    #[test]
    fn from_roots_multiplies_linear_factors() {
        // (z - 1)(z + 1) = z^2 - 1
        let p = Polynomial::from_roots(&[c(1.0, 0.0), c(-1.0, 0.0)]);
        assert_eq!(p, real_poly(&[1.0, 0.0, -1.0]));
    }

    #[test]
    fn add_sub_neg() {
        let p = real_poly(&[1.0, 2.0]); // z + 2
        let q = real_poly(&[1.0, 0.0, 3.0]); // z^2 + 3
        assert_eq!(&p + &q, real_poly(&[1.0, 1.0, 5.0]));
        assert_eq!(&q - &p, real_poly(&[1.0, -1.0, 1.0]));
        assert_eq!(-&p, real_poly(&[-1.0, -2.0]));
    }

    #[test]
    fn subtraction_can_drop_the_degree() {
        let p = real_poly(&[1.0, 2.0, 3.0]);
        let q = real_poly(&[1.0, 0.0, 0.0]);
        assert_eq!((&p - &q).degree(), 1);
    }

    #[test]
    fn multiplication_convolves() {
        // (z + 1)(z - 1) = z^2 - 1
        let p = real_poly(&[1.0, 1.0]);
        let q = real_poly(&[1.0, -1.0]);
        assert_eq!(&p * &q, real_poly(&[1.0, 0.0, -1.0]));
        assert!((&p * &Polynomial::zero()).is_zero());
    }

    #[test]
    fn scalar_multiplication_scales_every_coefficient() {
        let p = real_poly(&[1.0, -2.0, 3.0]);
        assert_eq!(&p * c(2.0, 0.0), real_poly(&[2.0, -4.0, 6.0]));
    }

    #[test]
    fn evaluation_uses_all_terms() {
        // p(z) = z^2 + 2z + 3, p(2) = 11
        let p = real_poly(&[1.0, 2.0, 3.0]);
        assert_eq!(p.eval(c(2.0, 0.0)), c(11.0, 0.0));
        // p(i) = -1 + 2i + 3 = 2 + 2i
        assert_eq!(p.eval(c(0.0, 1.0)), c(2.0, 2.0));
        assert!(Polynomial::zero().eval(c(5.0, 1.0)).is_zero());
    }

    #[test]
    fn derivative_of_constants_is_zero() {
        assert!(Polynomial::zero().derivative().is_zero());
        assert!(Polynomial::constant(c(4.0, 1.0)).derivative().is_zero());
    }

    #[test]
    fn derivative_applies_the_power_rule() {
        // d/dz (z^3 - 6z^2 + 12z - 8) = 3z^2 - 12z + 12
        let p = real_poly(&[1.0, -6.0, 12.0, -8.0]);
        assert_eq!(p.derivative(), real_poly(&[3.0, -12.0, 12.0]));
    }

    #[test]
    fn division_by_zero_polynomial_fails() {
        let p = real_poly(&[1.0, 2.0]);
        assert_eq!(
            p.div_rem(&Polynomial::zero()),
            Err(PolyError::DivisionByZero)
        );
    }

    #[test]
    fn division_satisfies_the_identity() {
        // (z^3 - 4z^2 - 2z + 17) / (z^2 - 6z + 9) = z + 2, remainder z - 1
        let p = real_poly(&[1.0, -4.0, -2.0, 17.0]);
        let q = real_poly(&[1.0, -6.0, 9.0]);
        let (s, r) = p.div_rem(&q).unwrap();
        assert_eq!(s, real_poly(&[1.0, 2.0]));
        assert_eq!(r, real_poly(&[1.0, -1.0]));
        assert!(r.degree() < q.degree());

        let back = &(&s * &q) + &r;
        for i in 0..p.coeffs().len() {
            assert_abs_diff_eq!(back.coeff(i).re, p.coeff(i).re, epsilon = 1e-12);
            assert_abs_diff_eq!(back.coeff(i).im, p.coeff(i).im, epsilon = 1e-12);
        }
    }

    #[test]
    fn division_pads_cancelled_quotient_positions() {
        // (z^3 + 1) / (z + 1) = z^2 - z + 1: the quotient's middle
        // coefficients come from cancelled leading terms.
        let p = real_poly(&[1.0, 0.0, 0.0, 1.0]);
        let q = real_poly(&[1.0, 1.0]);
        let (s, r) = p.div_rem(&q).unwrap();
        assert_eq!(s, real_poly(&[1.0, -1.0, 1.0]));
        assert!(r.is_zero());
    }

    #[test]
    fn division_by_higher_degree_returns_self_as_remainder() {
        let p = real_poly(&[1.0, 2.0]);
        let q = real_poly(&[1.0, 0.0, 0.0]);
        let (s, r) = p.div_rem(&q).unwrap();
        assert!(s.is_zero());
        assert_eq!(r, p);
    }

    #[test]
    fn display_skips_zero_terms() {
        let p = real_poly(&[1.0, 0.0, -8.0]);
        assert_eq!(p.to_string(), "(1+0i)z^2 + (-8+0i)");
        assert_eq!(Polynomial::zero().to_string(), "0");
    }
}
