// ============================================================================
// Square Root and Integer Power
// ============================================================================

use super::arithmetic::{check_range, ensure_in_range, multiply_rounded};
use crate::domain::config::{Configuration, GUARD_DIGITS};
use crate::domain::Decimal;
use crate::numeric::limbs::{
    add_magnitude, compare_magnitude, digit_count, divmod_magnitude, divmod_small, mul_magnitude,
    power_of_ten, shift_limbs, Limb, Limbs, LIMB_DIGITS,
};
use crate::numeric::rounding::round_to_significant;
use crate::numeric::{NumericError, NumericResult};
use std::cmp::Ordering;

/// Square root rounded to `config.precision()` significant digits.
///
/// The coefficient is scaled by an even power of the limb radix until its
/// integer root carries `precision + GUARD_DIGITS` digits, then rounded
/// once. An inexact root sets the sticky flag, so ties are never
/// misjudged.
///
/// # Errors
/// - `InvalidDomain` for a negative operand
/// - `RangeOverflow`/`RangeUnderflow` if the result is out of range
pub fn sqrt(value: &Decimal, config: &Configuration) -> NumericResult<Decimal> {
    if value.is_zero() {
        return Ok(Decimal::zero());
    }
    if value.is_negative() {
        return Err(NumericError::InvalidDomain);
    }

    let mut radicand = Limbs::from_slice(value.coefficient());
    let mut exponent = value.limb_exponent();
    if exponent.rem_euclid(2) == 1 {
        radicand = shift_limbs(&radicand, 1);
        exponent -= 1;
    }

    let wanted = 2 * (config.precision() + GUARD_DIGITS) as usize;
    let digits = digit_count(&radicand);
    if digits < wanted {
        let pairs = (wanted - digits).div_ceil(2 * LIMB_DIGITS);
        radicand = shift_limbs(&radicand, 2 * pairs);
        exponent -= 2 * pairs as i64;
    }

    let root = integer_sqrt(&radicand);
    let inexact = compare_magnitude(&mul_magnitude(&root, &root), &radicand) != Ordering::Equal;

    let (coefficient, exponent) = round_to_significant(
        &root,
        exponent / 2,
        config.precision(),
        config.rounding(),
        false,
        inexact,
    );
    check_range(Decimal::from_parts(false, coefficient, exponent), config)
}

/// `floor(sqrt(n))` by Newton-Raphson on integers.
///
/// The seed `10^ceil(d/2)` is above the root, so the iterates decrease
/// monotonically until the first one that does not.
pub(crate) fn integer_sqrt(n: &[Limb]) -> Limbs {
    let digits = digit_count(n);
    if digits == 0 {
        return Limbs::new();
    }

    let mut x = power_of_ten(digits.div_ceil(2));
    loop {
        let (quotient, _) = divmod_magnitude(n, &x);
        let (y, _) = divmod_small(&add_magnitude(&x, &quotient), 2);
        if compare_magnitude(&y, &x) != Ordering::Less {
            return x;
        }
        x = y;
    }
}

/// `value` raised to a non-negative integer power, rounded to
/// `config.precision()` significant digits.
///
/// Binary exponentiation runs at `precision + GUARD_DIGITS + bits(n)`
/// digits so the accumulated intermediate roundings stay below the final
/// rounding unit. `pow(x, 0)` is one for every `x`, zero included.
///
/// # Errors
/// - `InvalidDomain` if `exponent` exceeds `config.max_power()`
/// - `RangeOverflow`/`RangeUnderflow` if the result (or an intermediate
///   square on the way to it) is out of range
pub fn pow(value: &Decimal, exponent: u64, config: &Configuration) -> NumericResult<Decimal> {
    if exponent > config.max_power() {
        return Err(NumericError::InvalidDomain);
    }
    if exponent == 0 {
        return Ok(Decimal::one());
    }
    if value.is_zero() {
        return Ok(Decimal::zero());
    }

    let negative = value.is_negative() && exponent % 2 == 1;
    let bits = u64::BITS - exponent.leading_zeros();
    let working = config.precision() + GUARD_DIGITS + bits;
    let mode = config.rounding();

    let mut base = Decimal::from_parts(
        negative,
        Limbs::from_slice(value.coefficient()),
        value.limb_exponent(),
    );
    let mut result: Option<Decimal> = None;
    let mut remaining = exponent;
    loop {
        if remaining & 1 == 1 {
            let next = match &result {
                Some(acc) => multiply_rounded(acc, &base, working, mode, negative),
                None => base.clone(),
            };
            ensure_in_range(&next, config)?;
            result = Some(next);
        }
        remaining >>= 1;
        if remaining == 0 {
            break;
        }
        base = multiply_rounded(&base, &base, working, mode, negative);
        // Every square is a factor of the result, so its range bounds the result's.
        ensure_in_range(&base, config)?;
    }

    let result = result.unwrap_or_else(Decimal::one);
    let (coefficient, limb_exponent) = round_to_significant(
        result.coefficient(),
        result.limb_exponent(),
        config.precision(),
        mode,
        negative,
        false,
    );
    check_range(Decimal::from_parts(negative, coefficient, limb_exponent), config)
}

// ============================================================================
// Tests
// ============================================================================
