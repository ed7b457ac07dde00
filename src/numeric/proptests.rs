//! Property-based tests for decimal arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    use crate::numeric::{Bcd, ProductPrecision};

    // Syntactically valid decimal text within the integer digit limit
    fn decimal_text() -> impl Strategy<Value = String> {
        "[+-]?[0-9]{0,10}(\\.[0-9]{0,12})?"
    }

    // Values small enough that sums and differences stay within the limit
    fn bcd_value() -> impl Strategy<Value = Bcd> {
        "[+-]?[0-9]{0,9}(\\.[0-9]{0,9})?".prop_map(|s| s.parse::<Bcd>().unwrap())
    }

    // Values whose exact products fit a rust_decimal::Decimal
    fn small_bcd_value() -> impl Strategy<Value = Bcd> {
        "[+-]?[0-9]{0,4}(\\.[0-9]{0,4})?".prop_map(|s| s.parse::<Bcd>().unwrap())
    }

    proptest! {
        // Text boundary

        #[test]
        fn parse_format_round_trip(s in decimal_text()) {
            let value: Bcd = s.parse().unwrap();
            let formatted = value.to_string();
            let reparsed: Bcd = formatted.parse().unwrap();
            prop_assert_eq!(&reparsed, &value);
            prop_assert_eq!(reparsed.to_string(), formatted);
        }

        #[test]
        fn parsed_values_are_canonical(s in decimal_text()) {
            let value: Bcd = s.parse().unwrap();
            let digits = value.digits();
            prop_assert!(!digits.is_empty());
            if value.is_zero() {
                prop_assert!(!value.is_negative());
                prop_assert_eq!(value.fractional_digits(), 0);
            } else {
                if value.integer_digits() > 0 {
                    prop_assert_ne!(digits[0], 0);
                }
                if value.fractional_digits() > 0 {
                    prop_assert_ne!(digits[digits.len() - 1], 0);
                }
            }
        }

        // Algebra

        #[test]
        fn add_commutative(a in bcd_value(), b in bcd_value()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_identity(a in bcd_value()) {
            prop_assert_eq!(&a + &Bcd::zero(), a.clone());
            prop_assert_eq!(&Bcd::zero() + &a, a);
        }

        #[test]
        fn sub_antisymmetric(a in bcd_value(), b in bcd_value()) {
            prop_assert_eq!(&a - &b, -(&b - &a));
        }

        #[test]
        fn sub_self_is_zero(a in bcd_value()) {
            let zero = &a - &a;
            prop_assert!(zero.is_zero());
            prop_assert!(!zero.is_negative());
        }

        #[test]
        fn mul_commutative(a in bcd_value(), b in bcd_value()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_sign_is_xor(a in bcd_value(), b in bcd_value()) {
            let product = &a * &b;
            if product.is_zero() {
                prop_assert!(!product.is_negative());
            } else {
                prop_assert_eq!(product.is_negative(), a.is_negative() != b.is_negative());
            }
        }

        #[test]
        fn mul_identity(a in bcd_value()) {
            prop_assert_eq!(&a * &Bcd::one(), a);
        }

        // Agreement with rust_decimal

        #[test]
        fn add_sub_match_rust_decimal(a in bcd_value(), b in bcd_value()) {
            let (da, db) = (a.to_decimal().unwrap(), b.to_decimal().unwrap());
            prop_assert_eq!(&a + &b, Bcd::from_decimal(da + db).unwrap());
            prop_assert_eq!(&a - &b, Bcd::from_decimal(da - db).unwrap());
        }

        #[test]
        fn exact_mul_matches_rust_decimal(a in small_bcd_value(), b in small_bcd_value()) {
            let product = a.mul_with(&b, ProductPrecision::Exact);
            let expected = a.to_decimal().unwrap() * b.to_decimal().unwrap();
            prop_assert_eq!(product.to_decimal().unwrap(), expected);
        }

        #[test]
        fn scaled_mul_never_exceeds_exact(a in small_bcd_value(), b in small_bcd_value()) {
            let scaled = (&a * &b).abs();
            let exact = a.mul_with(&b, ProductPrecision::Exact).abs();
            prop_assert!(scaled <= exact);
        }

        // Ordering

        #[test]
        fn ordering_is_trichotomous(a in bcd_value(), b in bcd_value()) {
            let holds = [a < b, a == b, b < a];
            prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
        }

        #[test]
        fn ordering_matches_rust_decimal(a in bcd_value(), b in bcd_value()) {
            let (da, db) = (a.to_decimal().unwrap(), b.to_decimal().unwrap());
            prop_assert_eq!(a.cmp(&b), da.cmp(&db));
        }

        #[test]
        fn ordering_is_translation_invariant(a in bcd_value(), b in bcd_value(), c in bcd_value()) {
            prop_assert_eq!(a.cmp(&b), (&a + &c).cmp(&(&b + &c)));
        }
    }

    quickcheck! {
        fn integer_text_matches_from_i32(n: i32) -> bool {
            n.to_string().parse::<Bcd>() == Ok(Bcd::from(n))
        }

        fn to_integer_inverts_from_i32(n: i32) -> bool {
            Bcd::from(n).to_integer() == Ok(i64::from(n))
        }
    }
}
