//! LaTeX rendering of toolkit values.

use std::fmt::Write as _;

use num_complex::Complex64;
use num_traits::Zero;

use quintus_linalg::{Matrix, RowOp, Scalar};
use quintus_poly::{Polynomial, DEFAULT_EPSILON};
use quintus_rational::Rational;
use quintus_rational_func::PartialFractionTerm;

/// Types that can render themselves as LaTeX source.
pub trait ToLatex {
    /// Returns LaTeX source for this value.
    fn to_latex(&self) -> String;
}

/// Zaps real and imaginary parts smaller than `epsilon`, for display of
/// numerically computed values that are morally real or imaginary.
#[must_use]
pub fn chop(c: Complex64, epsilon: f64) -> Complex64 {
    let mut c = c;
    if c.re.abs() < epsilon {
        c.re = 0.0;
    }
    if c.im.abs() < epsilon {
        c.im = 0.0;
    }
    c
}

impl ToLatex for f64 {
    fn to_latex(&self) -> String {
        format!("{self}")
    }
}

impl ToLatex for Complex64 {
    fn to_latex(&self) -> String {
        if self.im == 0.0 {
            format!("{}", self.re)
        } else if self.re == 0.0 {
            if self.im == 1.0 {
                "i".to_string()
            } else if self.im == -1.0 {
                "-i".to_string()
            } else {
                format!("{}i", self.im)
            }
        } else {
            let mut out = format!("({}", self.re);
            if self.im == 1.0 {
                out.push_str(" + i");
            } else if self.im == -1.0 {
                out.push_str(" - i");
            } else {
                let sign = if self.im < 0.0 { '-' } else { '+' };
                let _ = write!(out, " {sign} {}i", self.im.abs());
            }
            out.push(')');
            out
        }
    }
}

impl ToLatex for Polynomial {
    fn to_latex(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let one = Complex64::new(1.0, 0.0);
        let coeffs = self.coeffs();
        let top = coeffs.len() - 1;
        let mut out = String::new();

        for i in (0..=top).rev() {
            let c = coeffs[i];
            if c.is_zero() {
                continue;
            }

            if i == top {
                if c != one || i == 0 {
                    let _ = write!(out, "{} ", c.to_latex());
                }
            } else if c.im == 0.0 && c.re < 0.0 {
                // Fold the sign of a negative real coefficient into the
                // separator instead of writing "+ -6".
                if c.re == -1.0 && i > 0 {
                    out.push_str(" - ");
                } else {
                    let _ = write!(out, " - {} ", -c.re);
                }
            } else {
                out.push_str(" + ");
                if c != one || i == 0 {
                    let _ = write!(out, "{} ", c.to_latex());
                }
            }

            if i == 1 {
                out.push('z');
            } else if i > 1 {
                let _ = write!(out, "z^{{{i}}}");
            }
        }

        out.trim().to_string()
    }
}

impl ToLatex for PartialFractionTerm {
    fn to_latex(&self) -> String {
        let coeff = chop(self.coefficient, DEFAULT_EPSILON);
        let root = chop(self.root, DEFAULT_EPSILON);

        let mut out = format!("\\frac{{{}}}{{", coeff.to_latex());
        if self.multiplicity > 1 {
            out.push('(');
        }
        if root.im == 0.0 && root.re < 0.0 {
            let _ = write!(out, "z + {}", -root.re);
        } else {
            let _ = write!(out, "z - {}", root.to_latex());
        }
        if self.multiplicity > 1 {
            let _ = write!(out, ")^{{{}}}", self.multiplicity);
        }
        out.push('}');
        out
    }
}

impl ToLatex for Rational {
    fn to_latex(&self) -> String {
        if self.is_integer() {
            return self.numerator().to_string();
        }
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{sign}\\frac{{{}}}{{{}}}",
            self.numerator().abs(),
            self.denominator()
        )
    }
}

impl<K: Scalar + ToLatex> ToLatex for Matrix<K> {
    fn to_latex(&self) -> String {
        let mut out = String::from("\\begin{bmatrix}");
        for r in 0..self.num_rows() {
            for c in 0..self.num_cols() {
                out.push_str(&self[(r, c)].to_latex());
                if c + 1 != self.num_cols() {
                    out.push_str(" & ");
                }
            }
            if r + 1 != self.num_rows() {
                out.push_str("\\\\");
            }
        }
        out.push_str("\\end{bmatrix}");
        out
    }
}

impl<K: ToLatex> ToLatex for RowOp<K> {
    fn to_latex(&self) -> String {
        match self {
            RowOp::Swap { a, b } => format!(
                "\\xrightarrow{{R_{{{}}} \\leftrightarrow R_{{{}}}}}",
                a + 1,
                b + 1
            ),
            RowOp::Scale { row, factor } => {
                let f = factor.to_latex();
                let wrapped = if f.starts_with('-') {
                    format!("\\left({f}\\right)")
                } else {
                    f
                };
                format!("\\xrightarrow{{R_{{{}}} \\cdot {wrapped}}}", row + 1)
            }
            RowOp::AddMultiple { dest, factor, src } => {
                let f = factor.to_latex();
                let (sign, magnitude) = match f.strip_prefix('-') {
                    Some(m) => ("-", m.to_string()),
                    None => ("+", f),
                };
                let scale = if magnitude == "1" {
                    String::new()
                } else {
                    format!("{magnitude} \\cdot ")
                };
                format!(
                    "\\xrightarrow{{R_{{{}}} {sign} {scale}R_{{{}}}}}",
                    dest + 1,
                    src + 1
                )
            }
        }
    }
}
