//! Property tests for decimal arithmetic, rounding and text conversion.
//!
//! Values are generated as `mantissa * 10^exponent` with up to 16 digits
//! and exponents spanning several limbs in either direction, so alignment,
//! carries across limb boundaries and the fixed/exponential switch all get
//! exercised.

use decimal_engine::prelude::*;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// (negative, mantissa, decimal exponent)
fn arb_parts() -> impl Strategy<Value = (bool, u64, i64)> {
    (
        any::<bool>(),
        prop_oneof![0u64..1_000, 0u64..10_000_000, 0u64..10_000_000_000_000_000],
        -40i64..40,
    )
}

fn arb_decimal() -> impl Strategy<Value = Decimal> {
    arb_parts().prop_map(|(negative, mantissa, exponent)| {
        let sign = if negative { "-" } else { "" };
        format!("{sign}{mantissa}e{exponent}").parse().unwrap()
    })
}

fn arb_nonzero() -> impl Strategy<Value = Decimal> {
    arb_decimal().prop_filter("nonzero", |d| !d.is_zero())
}

fn arb_mode() -> impl Strategy<Value = RoundingMode> {
    proptest::sample::select(RoundingMode::ALL.to_vec())
}

fn config() -> Configuration {
    Configuration::with_defaults()
}

/// One unit in the digit `digits` places below the leading digit of `value`.
fn unit_below(value: &Decimal, digits: i64) -> Decimal {
    format!("1e{}", value.exponent() - digits).parse().unwrap()
}

// ---------------------------------------------------------------------------
// Property: text round trip
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn fixed_text_round_trips(value in arb_decimal()) {
        // Enough places to hold the least significant digit
        let lowest = value.exponent() - value.digit_count() as i64 + 1;
        let places = (-lowest).max(0) as usize;
        let text = value.to_fixed(places, &config()).unwrap();
        prop_assert_eq!(text.parse::<Decimal>().unwrap(), value);
    }

    #[test]
    fn display_round_trips(value in arb_decimal()) {
        let text = value.to_string();
        prop_assert_eq!(text.parse::<Decimal>().unwrap(), value);
    }

    #[test]
    fn exponential_text_round_trips(value in arb_decimal()) {
        let places = value.digit_count().saturating_sub(1);
        let text = value.to_exponential(places, &config()).unwrap();
        prop_assert_eq!(text.parse::<Decimal>().unwrap(), value);
    }

    #[test]
    fn integer_radix_round_trips(n in any::<u64>(), base in 2u32..=64) {
        let value = Decimal::from(n);
        let text = value.to_radix(base, &config()).unwrap();
        prop_assert_eq!(parse(&text, Some(base)).unwrap(), value);
    }

    #[test]
    fn binary_fraction_round_trips(n in any::<u32>(), shift in 0u32..20) {
        // n / 2^shift terminates in every power-of-two base
        let wide = config().with_precision(40).unwrap();
        let value = div(&Decimal::from(n), &Decimal::from(1u64 << shift), &wide).unwrap();
        for base in [2u32, 4, 8, 16, 32, 64] {
            let text = value.to_radix(base, &wide).unwrap();
            prop_assert_eq!(parse(&text, Some(base)).unwrap(), value.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Property: algebraic laws
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn addition_commutes(a in arb_decimal(), b in arb_decimal()) {
        prop_assert_eq!(add(&a, &b, &config()).unwrap(), add(&b, &a, &config()).unwrap());
    }

    #[test]
    fn multiplication_commutes(a in arb_decimal(), b in arb_decimal()) {
        prop_assert_eq!(mul(&a, &b, &config()).unwrap(), mul(&b, &a, &config()).unwrap());
    }

    #[test]
    fn subtraction_undoes_addition(a in arb_decimal(), b in arb_decimal()) {
        let sum = add(&a, &b, &config()).unwrap();
        prop_assert_eq!(sub(&sum, &b, &config()).unwrap(), a);
    }

    #[test]
    fn division_inverts_multiplication(a in arb_nonzero(), b in arb_nonzero()) {
        let quotient = div(&a, &b, &config()).unwrap();
        let back = mul(&quotient, &b, &config()).unwrap();
        let error = sub(&back, &a, &config()).unwrap().abs();
        let precision = config().precision() as i64;
        // Rounding the quotient and the product each cost half a unit;
        // scaling by b widens the first by at most one more digit.
        prop_assert!(lte(&error, &unit_below(&a, precision - 2)));
    }

    #[test]
    fn exact_square_roots(mantissa in 1u64..10_000_000_000, exponent in -20i64..20) {
        let x: Decimal = format!("{mantissa}e{exponent}").parse().unwrap();
        let square = mul(&x, &x, &config()).unwrap();
        prop_assert_eq!(sqrt(&square, &config()).unwrap(), x);
    }

    #[test]
    fn remainder_is_smaller_than_divisor(a in arb_decimal(), b in arb_nonzero()) {
        let r = rem(&a, &b, &config()).unwrap();
        prop_assert!(lt(&r.abs(), &b.abs()));
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }
}

// ---------------------------------------------------------------------------
// Property: rounding
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn to_fixed_matches_round(value in arb_decimal(), places in 0usize..12, mode in arb_mode()) {
        let cfg = config().with_rounding(mode);
        let text = value.to_fixed(places, &cfg).unwrap();
        prop_assert_eq!(text.parse::<Decimal>().unwrap(), value.round(places as i64, mode));
        if places > 0 {
            let point = text.find('.').unwrap();
            prop_assert_eq!(text.len() - point - 1, places);
        }
    }

    #[test]
    fn prec_limits_digits(value in arb_nonzero(), digits in 1u32..10, mode in arb_mode()) {
        let rounded = value.prec(digits, mode).unwrap();
        prop_assert!(rounded.digit_count() <= digits as usize);
        let error = sub(&rounded, &value, &config()).unwrap().abs();
        prop_assert!(lt(&error, &unit_below(&value, digits as i64 - 2)));
    }

    #[test]
    fn directed_modes_bracket_value(value in arb_decimal(), places in 0i64..6) {
        let down = value.round(places, RoundingMode::Floor);
        let up = value.round(places, RoundingMode::Ceil);
        prop_assert!(lte(&down, &value));
        prop_assert!(gte(&up, &value));
    }
}

// ---------------------------------------------------------------------------
// Property: comparator totality
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn exactly_one_ordering_holds(a in arb_decimal(), b in arb_decimal()) {
        let holds = [lt(&a, &b), eq(&a, &b), gt(&a, &b)];
        prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
    }

    #[test]
    fn difference_sign_matches_comparison(a in arb_decimal(), b in arb_decimal()) {
        let difference = sub(&a, &b, &config()).unwrap();
        let expected = if difference.is_zero() {
            std::cmp::Ordering::Equal
        } else if difference.is_negative() {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Greater
        };
        prop_assert_eq!(compare(&a, &b), expected);
    }
}
