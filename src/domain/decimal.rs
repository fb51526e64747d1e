// ============================================================================
// Arbitrary-Precision Decimal
// Immutable sign/coefficient/exponent value type
// ============================================================================

use super::config::{default_configuration, Configuration, MAX_EXPONENT};
use crate::codec::{formatter, parser};
use crate::engine::{arithmetic, compare};
use crate::numeric::limbs::{
    self, from_u128, mul_small, scientific_exponent, strip_leading_zeros, strip_trailing_zeros,
    Limb, Limbs, LIMB_DIGITS, LIMB_RADIX, POW10,
};
use crate::numeric::rounding::{round_to_position, round_to_significant};
use crate::numeric::{NumericError, NumericResult, RoundingMode};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Largest rounding position magnitude accepted by [`Decimal::round`].
///
/// Every digit of a value within `±MAX_EXPONENT` lies well inside it.
pub const ROUND_LIMIT: i64 = 4 * MAX_EXPONENT;

/// Arbitrary-precision decimal number.
///
/// Represents `(-1)^negative * coefficient * LIMB_RADIX^exponent` where the
/// coefficient is a sequence of base-10^7 limbs, most significant first.
///
/// # Canonical Form
/// - no leading zero limb and no trailing zero limb
/// - zero is the empty coefficient with exponent 0 and a positive sign
///
/// Equal numbers therefore have identical representations, so the derived
/// `PartialEq` and `Hash` are numeric equality.
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
///
/// let config = Configuration::with_defaults();
/// let a: Decimal = "0.1".parse().unwrap();
/// let b: Decimal = "0.2".parse().unwrap();
/// let sum = a.checked_add(&b, &config).unwrap();
/// assert_eq!(sum.to_string(), "0.3");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    negative: bool,
    coefficient: Limbs,
    exponent: i64,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero
    pub fn zero() -> Self {
        Self {
            negative: false,
            coefficient: Limbs::new(),
            exponent: 0,
        }
    }

    /// One
    pub fn one() -> Self {
        Self::from_parts(false, Limbs::from_slice(&[1]), 0)
    }

    /// Build from parts, normalizing to canonical form.
    pub(crate) fn from_parts(negative: bool, mut coefficient: Limbs, exponent: i64) -> Self {
        strip_leading_zeros(&mut coefficient);
        let stripped = strip_trailing_zeros(&mut coefficient);
        if coefficient.is_empty() {
            return Self::zero();
        }
        Self {
            negative,
            coefficient,
            exponent: exponent + stripped as i64,
        }
    }

    /// Build `digits * 10^exponent` from an integer magnitude.
    pub(crate) fn from_scaled(negative: bool, magnitude: &[Limb], exponent: i64) -> Self {
        let digits = LIMB_DIGITS as i64;
        let coefficient = mul_small(magnitude, POW10[exponent.rem_euclid(digits) as usize]);
        Self::from_parts(negative, coefficient, exponent.div_euclid(digits))
    }

    /// Create from raw limbs (most significant first) and a limb exponent.
    ///
    /// # Errors
    /// - `InvalidNumber` if any limb is not below `LIMB_RADIX`
    /// - `RangeOverflow`/`RangeUnderflow` if the value's scientific exponent
    ///   is outside `±MAX_EXPONENT`
    pub fn from_raw_parts(
        negative: bool,
        coefficient: &[Limb],
        exponent: i64,
    ) -> NumericResult<Self> {
        if coefficient.iter().any(|&limb| limb >= LIMB_RADIX) {
            return Err(NumericError::InvalidNumber);
        }
        if limbs::is_zero(coefficient) {
            return Ok(Self::zero());
        }
        // Rejects limb exponents whose digit exponent would not fit in i64
        if exponent > MAX_EXPONENT {
            return Err(NumericError::RangeOverflow);
        }
        if exponent < -MAX_EXPONENT {
            return Err(NumericError::RangeUnderflow);
        }
        let value = Self::from_parts(negative, Limbs::from_slice(coefficient), exponent);
        match value.exponent() {
            e if e > MAX_EXPONENT => Err(NumericError::RangeOverflow),
            e if e < -MAX_EXPONENT => Err(NumericError::RangeUnderflow),
            _ => Ok(value),
        }
    }

    /// Nearest decimal to `value` under `config`.
    ///
    /// # Errors
    /// - `InvalidNumber` for NaN or infinities, or in strict mode
    /// - `RangeOverflow`/`RangeUnderflow` outside the exponent range
    pub fn from_f64(value: f64, config: &Configuration) -> NumericResult<Self> {
        if config.strict() {
            return Err(NumericError::InvalidNumber);
        }
        if !value.is_finite() {
            return Err(NumericError::InvalidNumber);
        }
        // Display prints the shortest text that round-trips
        parser::parse_with(&value.to_string(), Some(10), config)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Raw coefficient limbs, most significant first.
    #[inline]
    pub fn coefficient(&self) -> &[Limb] {
        &self.coefficient
    }

    /// Raw exponent in limbs.
    #[inline]
    pub const fn limb_exponent(&self) -> i64 {
        self.exponent
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_empty()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// `-1` or `+1` (zero is positive).
    #[inline]
    pub const fn sign(&self) -> i8 {
        if self.negative {
            -1
        } else {
            1
        }
    }

    /// True when there is no fractional part.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.exponent >= 0
    }

    /// Power of ten of the most significant digit (0 for zero).
    pub fn exponent(&self) -> i64 {
        if self.is_zero() {
            return 0;
        }
        scientific_exponent(&self.coefficient, self.exponent)
    }

    /// Number of significant decimal digits (0 for zero).
    pub fn digit_count(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        self.digits().len()
    }

    /// Significant decimal digits without trailing zeros ("0" for zero).
    pub fn digits(&self) -> String {
        let mut digits = limbs::to_decimal_string(&self.coefficient);
        if !self.is_zero() {
            let trimmed = digits.trim_end_matches('0').len();
            digits.truncate(trimmed);
        }
        digits
    }

    // ========================================================================
    // Sign Operations
    // ========================================================================

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Negation (zero stays positive).
    pub fn negated(&self) -> Self {
        Self {
            negative: !self.negative && !self.is_zero(),
            ..self.clone()
        }
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to `decimal_places` digits after the point.
    ///
    /// A negative count rounds to tens, hundreds and so on. Counts beyond
    /// `±ROUND_LIMIT` are treated as that limit.
    pub fn round(&self, decimal_places: i64, mode: RoundingMode) -> Self {
        let position = decimal_places
            .checked_neg()
            .unwrap_or(i64::MAX)
            .clamp(-ROUND_LIMIT, ROUND_LIMIT);
        let (coefficient, exponent) = round_to_position(
            &self.coefficient,
            self.exponent,
            position,
            mode,
            self.negative,
            false,
        );
        Self::from_parts(self.negative, coefficient, exponent)
    }

    /// Round to `significant` significant digits.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `significant` is zero.
    pub fn prec(&self, significant: u32, mode: RoundingMode) -> NumericResult<Self> {
        if significant == 0 {
            return Err(NumericError::InvalidConfiguration);
        }
        let (coefficient, exponent) = round_to_significant(
            &self.coefficient,
            self.exponent,
            significant,
            mode,
            self.negative,
            false,
        );
        Ok(Self::from_parts(self.negative, coefficient, exponent))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Exact addition (range-checked against `config`).
    #[inline]
    pub fn checked_add(&self, rhs: &Self, config: &Configuration) -> NumericResult<Self> {
        arithmetic::add(self, rhs, config)
    }

    /// Exact subtraction (range-checked against `config`).
    #[inline]
    pub fn checked_sub(&self, rhs: &Self, config: &Configuration) -> NumericResult<Self> {
        arithmetic::sub(self, rhs, config)
    }

    /// Multiplication rounded to `config.precision()` significant digits.
    #[inline]
    pub fn checked_mul(&self, rhs: &Self, config: &Configuration) -> NumericResult<Self> {
        arithmetic::mul(self, rhs, config)
    }

    /// Division rounded to `config.precision()` significant digits.
    #[inline]
    pub fn checked_div(&self, rhs: &Self, config: &Configuration) -> NumericResult<Self> {
        arithmetic::div(self, rhs, config)
    }

    /// Remainder of truncated division (sign of `self`).
    #[inline]
    pub fn checked_rem(&self, rhs: &Self, config: &Configuration) -> NumericResult<Self> {
        arithmetic::rem(self, rhs, config)
    }

    /// Square root rounded to `config.precision()` significant digits.
    #[inline]
    pub fn sqrt(&self, config: &Configuration) -> NumericResult<Self> {
        crate::engine::roots::sqrt(self, config)
    }

    /// Non-negative integer power rounded to `config.precision()` digits.
    #[inline]
    pub fn pow(&self, exponent: u64, config: &Configuration) -> NumericResult<Self> {
        crate::engine::roots::pow(self, exponent, config)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render with exactly `decimal_places` digits after the point.
    pub fn to_fixed(
        &self,
        decimal_places: usize,
        config: &Configuration,
    ) -> NumericResult<String> {
        formatter::to_fixed(self, decimal_places, config)
    }

    /// Render as `d.ddd e±x` with exactly `decimal_places` mantissa digits
    /// after the point.
    pub fn to_exponential(
        &self,
        decimal_places: usize,
        config: &Configuration,
    ) -> NumericResult<String> {
        formatter::to_exponential(self, decimal_places, config)
    }

    /// Render with `significant` significant digits.
    pub fn to_precision(&self, significant: u32, config: &Configuration) -> NumericResult<String> {
        formatter::to_precision(self, significant, config)
    }

    /// Render in another base (2..=64); see [`crate::codec::radix::to_radix`].
    pub fn to_radix(&self, radix: u32, config: &Configuration) -> NumericResult<String> {
        crate::codec::radix::to_radix(self, radix, config)
    }

    /// Render using `config`'s exponential-notation bounds.
    pub fn to_string_with(&self, config: &Configuration) -> String {
        formatter::to_plain_or_exponential(self, config)
    }

    /// Nearest `f64`.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` in strict mode unless the conversion is exact.
    pub fn to_f64(&self, config: &Configuration) -> NumericResult<f64> {
        let text = format!(
            "{}{}e{}",
            if self.negative { "-" } else { "" },
            limbs::to_decimal_string(&self.coefficient),
            self.exponent * LIMB_DIGITS as i64
        );
        let value = f64::from_str(&text).map_err(|_| NumericError::InvalidNumber)?;
        if config.strict() {
            let exact = value.is_finite()
                && parser::parse(&value.to_string(), Some(10)).as_ref() == Ok(self);
            if !exact {
                return Err(NumericError::PrecisionLoss);
            }
        }
        Ok(value)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare::compare(self, other)
    }
}

impl Neg for Decimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

// Infallible operators for ergonomics, using the process-wide default
// configuration (panic when out of range - use checked_* in production)
impl Add for Decimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs, &default_configuration())
            .expect("Decimal addition out of range")
    }
}

impl Sub for Decimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs, &default_configuration())
            .expect("Decimal subtraction out of range")
    }
}

impl Mul for Decimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(&rhs, &default_configuration())
            .expect("Decimal multiplication out of range")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal({}, negative={}, coefficient={:?}, exponent={})",
            self,
            self.negative,
            self.coefficient.as_slice(),
            self.exponent
        )
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&default_configuration()))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse decimal text, or `0x`/`0b`/`0o`-prefixed text.
    ///
    /// # Examples
    /// - "123.456" -> 123.456
    /// - "-1.5e-3" -> -0.0015
    /// - "0xff" -> 255
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s, None)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                Self::from_parts(false, from_u128(value as u128), 0)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                Self::from_parts(value < 0, from_u128(value.unsigned_abs() as u128), 0)
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for Decimal {
    type Error = NumericError;

    /// Non-strict conversion under the default configuration.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value, &Configuration::DEFAULT)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for Decimal {
    /// Exact conversion.
    fn from(d: rust_decimal::Decimal) -> Self {
        let mantissa = d.mantissa();
        Self::from_scaled(
            mantissa < 0,
            &from_u128(mantissa.unsigned_abs()),
            -(d.scale() as i64),
        )
    }
}

impl TryFrom<&Decimal> for rust_decimal::Decimal {
    type Error = NumericError;

    /// Convert to rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `RangeOverflow` if the value is too large
    /// - `PrecisionLoss` if significant digits would be lost
    fn try_from(value: &Decimal) -> Result<Self, Self::Error> {
        if value.abs() > Decimal::from(rust_decimal::Decimal::MAX) {
            return Err(NumericError::RangeOverflow);
        }
        rust_decimal::Decimal::from_str_exact(&formatter::to_plain(value))
            .map_err(|_| NumericError::PrecisionLoss)
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_canonical_form() {
        let a = Decimal::from_raw_parts(false, &[0, 15, 0, 0], -3).unwrap();
        assert_eq!(a.coefficient(), &[15]);
        assert_eq!(a.limb_exponent(), -1);
        assert_eq!(a, dec("0.0000015"));

        let zero = Decimal::from_raw_parts(true, &[0, 0], 9).unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(zero.limb_exponent(), 0);
        assert_eq!(zero, Decimal::zero());
    }

    #[test]
    fn test_from_raw_parts_invalid() {
        let result = Decimal::from_raw_parts(false, &[LIMB_RADIX], 0);
        assert_eq!(result, Err(NumericError::InvalidNumber));
    }

    #[test]
    fn test_from_raw_parts_exponent_bounds() {
        assert_eq!(
            Decimal::from_raw_parts(false, &[1], i64::MAX / 2),
            Err(NumericError::RangeOverflow)
        );
        assert_eq!(
            Decimal::from_raw_parts(true, &[1], i64::MIN / 2),
            Err(NumericError::RangeUnderflow)
        );

        // 142857142 limbs is digit exponent 999999994
        let limit = MAX_EXPONENT / LIMB_DIGITS as i64;
        let largest = Decimal::from_raw_parts(false, &[1], limit).unwrap();
        assert_eq!(largest.exponent(), 999_999_994);
        let top = Decimal::from_raw_parts(false, &[1_000_000], limit).unwrap();
        assert_eq!(top.exponent(), MAX_EXPONENT);
        assert_eq!(
            Decimal::from_raw_parts(false, &[1], limit + 1),
            Err(NumericError::RangeOverflow)
        );
        assert_eq!(
            Decimal::from_raw_parts(false, &[1], -limit - 1),
            Err(NumericError::RangeUnderflow)
        );

        // Zero has no exponent to check
        assert!(Decimal::from_raw_parts(false, &[0], i64::MAX).unwrap().is_zero());
    }

    #[test]
    fn test_accessors() {
        let x = dec("-1234.5");
        assert!(x.is_negative());
        assert!(!x.is_positive());
        assert_eq!(x.sign(), -1);
        assert_eq!(x.exponent(), 3);
        assert_eq!(x.digits(), "12345");
        assert_eq!(x.digit_count(), 5);
        assert!(!x.is_integer());

        let y = dec("12000000000");
        assert!(y.is_integer());
        assert_eq!(y.exponent(), 10);
        assert_eq!(y.digits(), "12");

        assert_eq!(Decimal::zero().digit_count(), 0);
        assert_eq!(Decimal::zero().exponent(), 0);
    }

    #[test]
    fn test_negation() {
        let x = dec("100");
        assert_eq!(-x.clone(), dec("-100"));
        assert_eq!(-(-x.clone()), x);
        assert!(!(-Decimal::zero()).is_negative());
        assert_eq!(dec("-3.5").abs(), dec("3.5"));
    }

    #[test]
    fn test_round_decimal_places() {
        assert_eq!(dec("1.005").round(2, RoundingMode::HalfUp), dec("1.01"));
        assert_eq!(dec("1.005").round(2, RoundingMode::HalfEven), dec("1"));
        assert_eq!(dec("-2.5").round(0, RoundingMode::HalfCeil), dec("-2"));
        assert_eq!(dec("-2.5").round(0, RoundingMode::Floor), dec("-3"));
        assert_eq!(dec("1234.5").round(-2, RoundingMode::HalfUp), dec("1200"));
        assert_eq!(dec("0.004").round(2, RoundingMode::HalfUp), Decimal::zero());
        assert_eq!(dec("0.004").round(2, RoundingMode::Ceil), dec("0.01"));
    }

    #[test]
    fn test_round_extreme_places() {
        let x = dec("-123.456");
        assert_eq!(x.round(i64::MAX, RoundingMode::HalfUp), x);
        assert!(x.round(i64::MIN, RoundingMode::HalfUp).is_zero());

        let up = dec("5").round(i64::MIN, RoundingMode::Up);
        assert_eq!(up.exponent(), ROUND_LIMIT);
        assert_eq!(up.digits(), "1");
    }

    #[test]
    fn test_prec() {
        let rounded = dec("999").prec(2, RoundingMode::HalfUp).unwrap();
        assert_eq!(rounded, dec("1.0e+3"));
        assert_eq!(rounded.exponent(), 3);

        assert_eq!(
            dec("123.456").prec(4, RoundingMode::Down).unwrap(),
            dec("123.4")
        );
        assert_eq!(
            dec("1").prec(0, RoundingMode::Down),
            Err(NumericError::InvalidConfiguration)
        );
    }

    #[test]
    fn test_from_integers() {
        assert_eq!(Decimal::from(0u8), Decimal::zero());
        assert_eq!(Decimal::from(-42i32), dec("-42"));
        assert_eq!(
            Decimal::from(u128::MAX).to_string(),
            "3.40282366920938463463374607431768211455e+38"
        );
        assert_eq!(Decimal::from(i64::MIN), dec("-9223372036854775808"));
        assert_eq!(Decimal::from(10_000_000u64).coefficient(), &[1]);
    }

    #[test]
    fn test_f64_conversions() {
        let config = Configuration::with_defaults();
        assert_eq!(Decimal::try_from(0.1f64).unwrap(), dec("0.1"));
        assert_eq!(Decimal::try_from(-2.5e-10f64).unwrap(), dec("-2.5e-10"));
        assert_eq!(Decimal::try_from(f64::NAN), Err(NumericError::InvalidNumber));

        assert_eq!(dec("0.1").to_f64(&config), Ok(0.1));
        assert_eq!(dec("-12345e300").to_f64(&config), Ok(-1.2345e304));

        let strict = config
            .with(crate::domain::ConfigOverrides::new().with_strict(true))
            .unwrap();
        assert_eq!(dec("0.5").to_f64(&strict), Ok(0.5));
        assert_eq!(
            dec("0.12345678901234567890123").to_f64(&strict),
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(
            Decimal::from_f64(0.5, &strict),
            Err(NumericError::InvalidNumber)
        );
    }

    #[test]
    fn test_from_decimal() {
        let d = rust_decimal::Decimal::new(12345, 2); // 123.45
        let x = Decimal::from(d);
        assert_eq!(x, dec("123.45"));

        let negative = rust_decimal::Decimal::new(-5, 0);
        assert_eq!(Decimal::from(negative), dec("-5"));
    }

    #[test]
    fn test_to_decimal() {
        let d = rust_decimal::Decimal::try_from(&dec("123.456")).unwrap();
        assert_eq!(d.to_string(), "123.456");

        assert_eq!(
            rust_decimal::Decimal::try_from(&dec("1e40")),
            Err(NumericError::RangeOverflow)
        );
        assert_eq!(
            rust_decimal::Decimal::try_from(&dec("1e-40")),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_to_decimal_mantissa_limit() {
        // 2^96 - 1 is the largest rust_decimal magnitude
        let max = dec("79228162514264337593543950335");
        assert_eq!(
            rust_decimal::Decimal::try_from(&max),
            Ok(rust_decimal::Decimal::MAX)
        );
        assert_eq!(
            rust_decimal::Decimal::try_from(&dec("79228162514264337593543950336")),
            Err(NumericError::RangeOverflow)
        );
        assert_eq!(
            rust_decimal::Decimal::try_from(&dec("-79228162514264337593543950336")),
            Err(NumericError::RangeOverflow)
        );
        // In range but too many digits
        assert_eq!(
            rust_decimal::Decimal::try_from(&dec("7922816251426433759354395033.51")),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_debug() {
        let x = dec("1.5");
        assert_eq!(
            format!("{:?}", x),
            "Decimal(1.5, negative=false, coefficient=[1, 5000000], exponent=-1)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let x = dec("-1234.5e-20");
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"-1.2345e-17\"");
        let back: Decimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
        assert!(serde_json::from_str::<Decimal>("\"1..2\"").is_err());
    }
}
