//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::sparse::Polynomial;
    use crate::term::Term;

    // Small integer coefficients keep every sum and product exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..=20i32).prop_map(f64::from)
    }

    fn small_exp() -> impl Strategy<Value = i32> {
        -3i32..=8i32
    }

    // Raw pairs, possibly with zeros, duplicates and cancellations
    fn raw_terms() -> impl Strategy<Value = Vec<(f64, i32)>> {
        proptest::collection::vec((small_coeff(), small_exp()), 0..=8)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        raw_terms().prop_map(Polynomial::from_terms)
    }

    // Evaluation points away from zero so negative exponents stay finite
    fn eval_point() -> impl Strategy<Value = f64> {
        prop_oneof![(-4i32..=-1i32), (1i32..=4i32)].prop_map(|x| f64::from(x) * 0.5)
    }

    fn naive_coefficient(terms: &[(f64, i32)], exponent: i32) -> f64 {
        terms
            .iter()
            .filter(|(_, e)| *e == exponent)
            .map(|(c, _)| c)
            .sum()
    }

    proptest! {
        // Normalization

        #[test]
        fn insertions_stay_normalized(terms in raw_terms()) {
            let mut p = Polynomial::new();
            for &(c, e) in &terms {
                p.insert_term(c, e);
                prop_assert!(p.is_normalized());
            }
        }

        #[test]
        fn insertions_match_net_coefficients(terms in raw_terms()) {
            let p = Polynomial::from_terms(terms.iter().copied());
            for e in -3..=8 {
                let net = naive_coefficient(&terms, e);
                prop_assert_eq!(p.coefficient(e), net);
                prop_assert_eq!(p.iter().any(|t| t.exponent() == e), net != 0.0);
            }
        }

        #[test]
        fn results_stay_normalized(a in small_poly(), b in small_poly()) {
            prop_assert!((&a + &b).is_normalized());
            prop_assert!((&a - &b).is_normalized());
            prop_assert!((&a * &b).is_normalized());
        }

        // Ring axioms

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::<f64>::zero();
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(&zero + &a, a);
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = &(&a + &b) + &c;
            let right = &a + &(&b + &c);
            prop_assert!(left.approx_eq(&right, 1e-9));
        }

        #[test]
        fn poly_sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert!(left.approx_eq(&right, 1e-9));
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Polynomial::constant(1.0);
            prop_assert_eq!(&a * &one, a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            prop_assert!((&a * &Polynomial::<f64>::zero()).is_zero());
        }

        // Evaluation

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in eval_point()) {
            // (a + b)(x) = a(x) + b(x)
            let sum = (&a + &b).evaluate(x);
            let expected = a.evaluate(x) + b.evaluate(x);
            prop_assert!((sum - expected).abs() <= 1e-6 * (1.0 + expected.abs()));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in eval_point()) {
            let product = (&a * &b).evaluate(x);
            let expected = a.evaluate(x) * b.evaluate(x);
            prop_assert!((product - expected).abs() <= 1e-6 * (1.0 + expected.abs()));
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            // Integer-valued coefficients never vanish in a product
            if let (Some(da), Some(db)) = (a.degree(), b.degree()) {
                prop_assert_eq!((&a * &b).degree(), Some(da + db));
            }
        }

        #[test]
        fn poly_add_length_bound(a in small_poly(), b in small_poly()) {
            prop_assert!((&a + &b).len() <= a.len() + b.len());
            prop_assert!((&a * &b).len() <= a.len() * b.len());
        }

        // Copies

        #[test]
        fn clone_is_independent(a in small_poly(), c in small_coeff(), e in small_exp()) {
            let original = a.clone();
            let mut copy = a.clone();
            copy.insert_term(c, e);
            prop_assert_eq!(&a, &original);
            prop_assert!(copy.is_normalized());
        }

        // Text

        #[test]
        fn parse_matches_from_terms(terms in raw_terms()) {
            let mut text = terms.len().to_string();
            for (c, e) in &terms {
                text.push_str(&format!(" {c} {e}"));
            }
            let parsed: Polynomial = text.parse().unwrap();
            prop_assert_eq!(parsed, Polynomial::from_terms(terms));
        }

        #[test]
        fn neg_flips_every_term(a in small_poly()) {
            let negated = -&a;
            let expected: Vec<Term> = a.iter().map(Term::negate).collect();
            prop_assert_eq!(negated.terms(), expected.as_slice());
        }
    }
}
