// ============================================================================
// Decimal Engine Library
// Arbitrary-precision decimal arithmetic with configurable rounding
// ============================================================================

//! # Decimal Engine
//!
//! Exact decimal arithmetic for values that binary floating point cannot
//! represent, such as `0.1`.
//!
//! ## Features
//!
//! - **Base-10^7 limbs** in a `SmallVec`, so small values never allocate
//! - **Nine rounding modes**, applied once per operation with guard digits
//! - **Immutable configuration** passed explicitly or captured by a [`Context`](engine::Context)
//! - **Alternate radices** from 2 to 64 for parsing and output
//! - **Canonical form**: equal values have identical representations
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//!
//! let config = Configuration::with_defaults();
//!
//! // Exact where f64 is not
//! let a: Decimal = "0.1".parse().unwrap();
//! let b: Decimal = "0.2".parse().unwrap();
//! assert_eq!(add(&a, &b, &config).unwrap().to_fixed(1, &config).unwrap(), "0.3");
//!
//! // Division rounds to the configured precision
//! let third = div(&Decimal::one(), &Decimal::from(3), &config).unwrap();
//! assert_eq!(third.to_fixed(5, &config).unwrap(), "0.33333");
//!
//! // A context captures its own configuration
//! let ctx = ContextBuilder::new()
//!     .precision(50)
//!     .rounding(RoundingMode::HalfEven)
//!     .build()
//!     .unwrap();
//! let root = ctx.sqrt(&Decimal::from(2)).unwrap();
//! assert_eq!(root.digit_count(), 50);
//! ```

pub mod codec;
pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        parse, parse_with, to_exponential, to_fixed, to_precision, to_radix,
    };
    pub use crate::domain::{
        default_configuration, set_default_configuration, ConfigOverrides, Configuration,
        Decimal,
    };
    pub use crate::engine::{
        add, compare, div, eq, gt, gte, lt, lte, mul, pow, rem, sqrt, sub, Context,
        ContextBuilder,
    };
    pub use crate::numeric::{NumericError, NumericResult, RoundingMode};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_exact_simple_sum() {
        let config = Configuration::with_defaults();
        let sum = add(&dec("0.1"), &dec("0.2"), &config).unwrap();
        assert_eq!(sum.to_fixed(1, &config).unwrap(), "0.3");
        assert_eq!(sum, dec("0.3"));
    }

    #[test]
    fn test_division_example() {
        let config = Configuration::with_defaults();
        let third = div(&dec("1"), &dec("3"), &config).unwrap();
        assert_eq!(to_fixed(&third, 5, &config).unwrap(), "0.33333");
    }

    #[test]
    fn test_classic_rounding_trap() {
        assert_eq!(dec("1.005").round(2, RoundingMode::HalfUp), dec("1.01"));
    }

    #[test]
    fn test_rounding_carry_out() {
        let rounded = dec("999").prec(2, RoundingMode::HalfUp).unwrap();
        assert_eq!(rounded, dec("1.0E+3"));
        assert_eq!(rounded.digit_count(), 1);
        assert_eq!(rounded.exponent(), 3);
    }

    #[test]
    fn test_base_round_trip() {
        let config = Configuration::with_defaults();
        let value = parse("ff", Some(16)).unwrap();
        assert_eq!(to_radix(&value, 16, &config).unwrap(), "ff");
    }

    #[test]
    fn test_division_inverse() {
        let config = Configuration::with_defaults();
        let a = dec("10");
        let b = dec("3");
        let product = mul(&div(&a, &b, &config).unwrap(), &b, &config).unwrap();
        // 3.3333333333333333333 * 3 = 9.9999999999999999999
        let error = sub(&a, &product, &config).unwrap().abs();
        assert!(lte(&error, &dec("1e-19")));
    }

    #[test]
    fn test_mixed_pipeline() {
        let ctx = ContextBuilder::from_config(Configuration::decimal64())
            .build()
            .unwrap();
        let principal = ctx.parse("1000").unwrap();
        let rate = ctx.parse("1.05").unwrap();
        let growth = ctx.pow(&rate, 10).unwrap();
        let total = ctx.mul(&principal, &growth).unwrap();
        assert_eq!(ctx.to_fixed(&total, 2).unwrap(), "1628.89");
        assert!(gt(&total, &principal));
    }

    #[test]
    fn test_errors_are_explicit() {
        let config = Configuration::with_defaults();
        assert_eq!(
            div(&dec("1"), &dec("0"), &config),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            sqrt(&dec("-4"), &config),
            Err(NumericError::InvalidDomain)
        );
        assert_eq!("1.2.3".parse::<Decimal>(), Err(NumericError::InvalidNumber));
        assert_eq!(
            Configuration::with_defaults().with_precision(0),
            Err(NumericError::InvalidConfiguration)
        );
    }
}
