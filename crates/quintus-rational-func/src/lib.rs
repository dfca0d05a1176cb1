//! Rational function utilities for the Quintus toolkit.
//!
//! This crate provides complex partial fraction decomposition: a rational
//! function `p(z)/q(z)` is split into a polynomial part plus a sum of
//! simple-pole terms `c / (z − root)^m`, built on polynomial division and
//! the numerical root finder from `quintus-poly`.

pub mod partial_fractions;

pub use partial_fractions::{decompose, Decomposition, DecomposeError, PartialFractionTerm};
