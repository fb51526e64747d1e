// ============================================================================
// Alternate Radix Output
// Digit alphabet and conversion of a Decimal to bases 2 through 64
// ============================================================================

use super::parser::{MAX_RADIX, MIN_RADIX};
use crate::domain::config::Configuration;
use crate::domain::Decimal;
use crate::numeric::limbs::{divmod_small, is_zero, mul_small, shift_limbs, Limb, Limbs};
use crate::numeric::{NumericError, NumericResult};

/// Digits for every supported radix, in value order.
pub const ALPHABET: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ$_";

/// Value of digit `c` in `radix`, if it is one.
///
/// Letters are case-insensitive up to radix 36; above that `a` and `A`
/// are different digits.
pub(crate) fn digit_value(c: char, radix: u32) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    let byte = if radix <= 36 {
        c.to_ascii_lowercase() as u8
    } else {
        c as u8
    };
    let value = ALPHABET.iter().position(|&d| d == byte)? as u32;
    (value < radix).then_some(value)
}

/// Render `value` in `base`.
///
/// The integer part is exact. The fractional part is produced digit by
/// digit and stops once it is exhausted or after `config.precision()`
/// digits; a fraction that does not terminate in `base` (one tenth in
/// binary, say) is therefore truncated, not rounded.
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
///
/// let config = Configuration::with_defaults();
/// let value: Decimal = "255.5".parse().unwrap();
/// assert_eq!(value.to_radix(16, &config).unwrap(), "ff.8");
/// ```
///
/// # Errors
/// Returns `InvalidRadix` if `base` is outside `2..=64`.
pub fn to_radix(value: &Decimal, base: u32, config: &Configuration) -> NumericResult<String> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
        return Err(NumericError::InvalidRadix(base));
    }
    if value.is_zero() {
        return Ok("0".to_string());
    }

    let coefficient = value.coefficient();
    let exponent = value.limb_exponent();
    let (integer, fraction): (Limbs, &[Limb]) = if exponent >= 0 {
        (shift_limbs(coefficient, exponent as usize), &[])
    } else {
        let width = exponent.unsigned_abs() as usize;
        let split = coefficient.len().saturating_sub(width);
        (Limbs::from_slice(&coefficient[..split]), &coefficient[split..])
    };

    let fraction = fraction_digits(fraction, exponent.unsigned_abs() as usize, base, config);

    // Truncation may leave nothing nonzero; that prints as plain "0"
    let mut out = String::new();
    if value.is_negative() && (!is_zero(&integer) || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&integer_digits(&integer, base));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    Ok(out)
}

fn integer_digits(integer: &[Limb], base: u32) -> String {
    if is_zero(integer) {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    let mut rest = Limbs::from_slice(integer);
    while !rest.is_empty() {
        let (quotient, digit) = divmod_small(&rest, base);
        digits.push(ALPHABET[digit as usize]);
        rest = quotient;
    }
    digits.iter().rev().map(|&d| d as char).collect()
}

/// Digits of `fraction / LIMB_RADIX^width` in `base`, trailing zeros dropped.
fn fraction_digits(fraction: &[Limb], width: usize, base: u32, config: &Configuration) -> String {
    let mut digits = String::new();
    let mut rest = Limbs::from_slice(fraction);
    let limit = config.precision() as usize;
    while !is_zero(&rest) && digits.len() < limit {
        let product = mul_small(&rest, base);
        // The product is below base * LIMB_RADIX^width, so any limb above
        // the width is the next digit.
        if product.len() > width {
            digits.push(ALPHABET[product[0] as usize] as char);
            rest = Limbs::from_slice(&product[1..]);
        } else {
            digits.push('0');
            rest = product;
        }
    }
    let kept = digits.trim_end_matches('0').len();
    digits.truncate(kept);
    digits
}
