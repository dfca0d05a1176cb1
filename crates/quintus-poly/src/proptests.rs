//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients are drawn from small Gaussian integers so that addition and
//! multiplication stay exact in `f64` and the ring axioms can be asserted
//! with structural equality.

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;

    fn small_coeff() -> impl Strategy<Value = Complex64> {
        (-100i64..100i64, -100i64..100i64)
            .prop_map(|(re, im)| Complex64::new(re as f64, im as f64))
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 0..=5).prop_map(Polynomial::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    /// Largest absolute difference between corresponding coefficients.
    fn coeff_distance(a: &Polynomial, b: &Polynomial) -> f64 {
        let len = a.coeffs().len().max(b.coeffs().len());
        (0..len)
            .map(|i| (a.coeff(i) - b.coeff(i)).norm())
            .fold(0.0, f64::max)
    }

    proptest! {
        #[test]
        fn degree_matches_stored_coefficients(p in small_poly()) {
            if p.is_zero() {
                prop_assert_eq!(p.coeffs().len(), 0);
                prop_assert_eq!(p.degree(), -1);
            } else {
                prop_assert_eq!(p.coeffs().len() as i64, p.degree() + 1);
                prop_assert!(p.coeffs().last().unwrap().norm() > 0.0);
            }
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn add_identity(a in small_poly()) {
            prop_assert_eq!(&a + &Polynomial::zero(), a.clone());
        }

        #[test]
        fn additive_inverse(a in small_poly()) {
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn sub_is_add_of_negation(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn mul_distributes_over_add(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn mul_identity(a in small_poly()) {
            prop_assert_eq!(&a * &Polynomial::one(), a.clone());
        }

        #[test]
        fn mul_by_zero_is_zero(a in small_poly()) {
            prop_assert!((&a * &Polynomial::zero()).is_zero());
        }

        #[test]
        fn mul_adds_degrees(a in nonzero_poly(), b in nonzero_poly()) {
            prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn division_identity_holds(a in small_poly(), b in nonzero_poly()) {
            let (s, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.degree() < b.degree() || r.is_zero());

            // The identity holds to roundoff in the magnitudes that actually
            // flow through the reconstruction, which can greatly exceed the
            // input coefficients when the divisor's trailing terms dominate
            // its leading one.
            let back = &(&s * &b) + &r;
            let s_max = s.coeffs().iter().map(|c| c.norm()).fold(1.0, f64::max);
            let b_max = b.coeffs().iter().map(|c| c.norm()).fold(1.0, f64::max);
            prop_assert!(coeff_distance(&back, &a) < 1e-10 * (1.0 + s_max * b_max));
        }
    }
}
