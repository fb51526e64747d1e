// ============================================================================
// Arithmetic Core
// Addition, subtraction, multiplication, division and remainder
// ============================================================================

use crate::domain::config::{Configuration, GUARD_DIGITS};
use crate::domain::Decimal;
use crate::numeric::limbs::{
    add_magnitude, compare_magnitude, digit_count, divmod_magnitude, is_zero, mul_magnitude,
    shift_limbs, sub_magnitude, Limbs, LIMB_DIGITS,
};
use crate::numeric::rounding::round_to_significant;
use crate::numeric::{NumericError, NumericResult, RoundingMode};
use std::cmp::Ordering;

// ============================================================================
// Range Checks
// ============================================================================

/// Fail if a nonzero value's exponent is outside `config`'s range.
pub(crate) fn check_range(value: Decimal, config: &Configuration) -> NumericResult<Decimal> {
    ensure_in_range(&value, config)?;
    Ok(value)
}

pub(crate) fn ensure_in_range(value: &Decimal, config: &Configuration) -> NumericResult<()> {
    if value.is_zero() {
        return Ok(());
    }
    let exponent = value.exponent();
    if exponent > config.max_exponent() {
        Err(NumericError::RangeOverflow)
    } else if exponent < config.min_exponent() {
        Err(NumericError::RangeUnderflow)
    } else {
        Ok(())
    }
}

// ============================================================================
// Addition and Subtraction
// ============================================================================

/// `a + b`, exact.
///
/// # Errors
/// `RangeOverflow`/`RangeUnderflow` if an operand or the result is outside
/// `config`'s exponent range.
pub fn add(a: &Decimal, b: &Decimal, config: &Configuration) -> NumericResult<Decimal> {
    ensure_in_range(a, config)?;
    ensure_in_range(b, config)?;
    check_range(add_signed(a, b, b.is_negative()), config)
}

/// `a - b`, exact.
///
/// # Errors
/// Same as [`add`].
pub fn sub(a: &Decimal, b: &Decimal, config: &Configuration) -> NumericResult<Decimal> {
    ensure_in_range(a, config)?;
    ensure_in_range(b, config)?;
    check_range(add_signed(a, b, !b.is_negative() && !b.is_zero()), config)
}

/// `a + (±|b|)` where the sign of the second operand is `b_negative`.
fn add_signed(a: &Decimal, b: &Decimal, b_negative: bool) -> Decimal {
    if b.is_zero() {
        return a.clone();
    }
    if a.is_zero() {
        return Decimal::from_parts(b_negative, Limbs::from_slice(b.coefficient()), b.limb_exponent());
    }

    // Align both coefficients to the smaller exponent.
    let exponent = a.limb_exponent().min(b.limb_exponent());
    let x = shift_limbs(a.coefficient(), (a.limb_exponent() - exponent) as usize);
    let y = shift_limbs(b.coefficient(), (b.limb_exponent() - exponent) as usize);

    if a.is_negative() == b_negative {
        return Decimal::from_parts(b_negative, add_magnitude(&x, &y), exponent);
    }
    match compare_magnitude(&x, &y) {
        Ordering::Equal => Decimal::zero(),
        Ordering::Greater => Decimal::from_parts(a.is_negative(), sub_magnitude(&x, &y), exponent),
        Ordering::Less => Decimal::from_parts(b_negative, sub_magnitude(&y, &x), exponent),
    }
}

// ============================================================================
// Multiplication
// ============================================================================

/// `a * b` rounded to `config.precision()` significant digits.
///
/// # Errors
/// `RangeOverflow`/`RangeUnderflow` if the rounded result is out of range.
pub fn mul(a: &Decimal, b: &Decimal, config: &Configuration) -> NumericResult<Decimal> {
    let negative = a.is_negative() != b.is_negative();
    let product = multiply_rounded(a, b, config.precision(), config.rounding(), negative);
    check_range(product, config)
}

/// Exact product rounded once to `precision` significant digits.
///
/// `negative` is the sign the rounding decision is made for; the result
/// carries it as well.
pub(crate) fn multiply_rounded(
    a: &Decimal,
    b: &Decimal,
    precision: u32,
    mode: RoundingMode,
    negative: bool,
) -> Decimal {
    if a.is_zero() || b.is_zero() {
        return Decimal::zero();
    }
    let product = mul_magnitude(a.coefficient(), b.coefficient());
    let exponent = a.limb_exponent() + b.limb_exponent();
    let (coefficient, exponent) =
        round_to_significant(&product, exponent, precision, mode, negative, false);
    Decimal::from_parts(negative, coefficient, exponent)
}

// ============================================================================
// Division
// ============================================================================

/// `a / b` rounded to `config.precision()` significant digits.
///
/// Long division produces at least `precision + GUARD_DIGITS` quotient
/// digits; the remainder is folded into a sticky flag so the single final
/// rounding is exact.
///
/// # Errors
/// - `DivisionByZero` if `b` is zero
/// - `RangeOverflow`/`RangeUnderflow` if the result is out of range
pub fn div(a: &Decimal, b: &Decimal, config: &Configuration) -> NumericResult<Decimal> {
    if b.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    if a.is_zero() {
        return Ok(Decimal::zero());
    }
    let negative = a.is_negative() != b.is_negative();

    // floor(A * R^s / B) has at least digits(A) + 7s - digits(B) digits.
    let wanted = (config.precision() + GUARD_DIGITS) as i64;
    let natural = digit_count(a.coefficient()) as i64 - digit_count(b.coefficient()) as i64;
    let shortfall = wanted - natural;
    let shift = if shortfall > 0 {
        (shortfall as usize).div_ceil(LIMB_DIGITS)
    } else {
        0
    };

    let numerator = shift_limbs(a.coefficient(), shift);
    let (quotient, remainder) = divmod_magnitude(&numerator, b.coefficient());
    let exponent = a.limb_exponent() - b.limb_exponent() - shift as i64;

    let (coefficient, exponent) = round_to_significant(
        &quotient,
        exponent,
        config.precision(),
        config.rounding(),
        negative,
        !is_zero(&remainder),
    );
    check_range(Decimal::from_parts(negative, coefficient, exponent), config)
}

/// Remainder of truncated division: `a - b * trunc(a / b)`, exact, with the
/// sign of `a`.
///
/// # Errors
/// - `DivisionByZero` if `b` is zero
/// - `RangeOverflow`/`RangeUnderflow` if an operand is out of range
pub fn rem(a: &Decimal, b: &Decimal, config: &Configuration) -> NumericResult<Decimal> {
    if b.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    ensure_in_range(a, config)?;
    ensure_in_range(b, config)?;
    if a.is_zero() {
        return Ok(Decimal::zero());
    }

    let exponent = a.limb_exponent().min(b.limb_exponent());
    let x = shift_limbs(a.coefficient(), (a.limb_exponent() - exponent) as usize);
    let y = shift_limbs(b.coefficient(), (b.limb_exponent() - exponent) as usize);
    let (_, remainder) = divmod_magnitude(&x, &y);

    check_range(
        Decimal::from_parts(a.is_negative(), Limbs::from_slice(&remainder), exponent),
        config,
    )
}

// ============================================================================
// Tests
// ============================================================================
