//! # Quintus
//!
//! A small symbolic/numeric algebra toolkit.
//!
//! Quintus bundles exact polynomial arithmetic over complex coefficients,
//! numerical root finding, complex partial fraction decomposition, exact
//! rational numbers, generic matrix row reduction, Fourier-series fitting
//! and LaTeX rendering of all of the above.
//!
//! ## Quick start
//!
//! ```rust
//! use quintus::prelude::*;
//!
//! // Decompose 1 / (z - 2)^3.
//! let p = Polynomial::one();
//! let q = Polynomial::from_root(Complex64::new(2.0, 0.0), 3);
//! let d = decompose(&p, &q, 1e-3).unwrap();
//! assert_eq!(d.terms.len(), 1);
//! assert_eq!(d.terms[0].multiplicity, 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quintus_fourier as fourier;
pub use quintus_linalg as linalg;
pub use quintus_poly as poly;
pub use quintus_rational as rational;
pub use quintus_rational_func as rational_func;
pub use quintus_render as render;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use num_complex::Complex64;

    pub use quintus_fourier::{fit, fit_complex, par_fit_complex, ExpSeries, TrigSeries};
    pub use quintus_linalg::{Matrix, MatrixError, RowOp};
    pub use quintus_poly::{PolyError, Polynomial, RootFindError, DEFAULT_EPSILON};
    pub use quintus_rational::Rational;
    pub use quintus_rational_func::{decompose, DecomposeError, Decomposition, PartialFractionTerm};
    pub use quintus_render::{chop, geogebra, pretty, ToLatex};
}
