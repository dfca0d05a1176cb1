//! Generic linear algebra for the Quintus toolkit.
//!
//! This crate provides [`Matrix`], a dense matrix over any field-like
//! scalar, with Gaussian elimination to (reduced) row echelon form and
//! inversion via an augmented identity block. Every reduction records the
//! row operations it performed as [`RowOp`] values, which the render crate
//! can format as a worked derivation.

pub mod dense_matrix;

pub use dense_matrix::{Matrix, MatrixError, RowOp, Scalar};
