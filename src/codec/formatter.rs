// ============================================================================
// Formatter
// Fixed, exponential and precision-limited text forms
// ============================================================================

use crate::domain::config::{Configuration, MAX_DECIMAL_PLACES};
use crate::domain::Decimal;
use crate::numeric::rounding::round_to_significant;
use crate::numeric::{NumericError, NumericResult, RoundingMode};

/// Render with exactly `decimal_places` digits after the point, rounding
/// with `config.rounding()`. Never uses exponential notation.
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
///
/// let config = Configuration::with_defaults();
/// let value: Decimal = "1.005".parse().unwrap();
/// assert_eq!(value.to_fixed(2, &config).unwrap(), "1.01");
/// assert_eq!(value.to_fixed(5, &config).unwrap(), "1.00500");
/// ```
///
/// # Errors
/// Returns `InvalidConfiguration` if `decimal_places` exceeds
/// `MAX_DECIMAL_PLACES`.
pub fn to_fixed(
    value: &Decimal,
    decimal_places: usize,
    config: &Configuration,
) -> NumericResult<String> {
    let places = checked_places(decimal_places)?;
    let rounded = value.round(places, config.rounding());
    let mut text = fixed(&rounded.digits(), rounded.exponent());
    pad_fraction(&mut text, decimal_places);
    Ok(signed(&rounded, text))
}

/// Render as one digit, a point and exactly `decimal_places` more digits,
/// followed by the exponent: `1.235e+3`.
///
/// # Errors
/// Returns `InvalidConfiguration` if `decimal_places` exceeds
/// `MAX_DECIMAL_PLACES`.
pub fn to_exponential(
    value: &Decimal,
    decimal_places: usize,
    config: &Configuration,
) -> NumericResult<String> {
    checked_places(decimal_places)?;
    let significant = decimal_places + 1;
    let rounded = round_significant(value, significant, config.rounding());
    let digits = padded_digits(&rounded, significant);
    Ok(signed(&rounded, exponential(&digits, rounded.exponent())))
}

/// Render with exactly `significant` significant digits.
///
/// Exponential notation is used when the rounded value has more integer
/// digits than `significant` or its exponent is outside `config`'s fixed
/// range.
///
/// # Errors
/// Returns `InvalidConfiguration` if `significant` is zero or exceeds
/// `MAX_DECIMAL_PLACES`.
pub fn to_precision(
    value: &Decimal,
    significant: u32,
    config: &Configuration,
) -> NumericResult<String> {
    if significant == 0 {
        return Err(NumericError::InvalidConfiguration);
    }
    checked_places(significant as usize)?;
    let rounded = round_significant(value, significant as usize, config.rounding());
    let exponent = rounded.exponent();
    let digits = padded_digits(&rounded, significant as usize);

    let text = if significant as i64 <= exponent || config.uses_exponential(exponent) {
        exponential(&digits, exponent)
    } else {
        fixed(&digits, exponent)
    };
    Ok(signed(&rounded, text))
}

/// All significant digits, in fixed or exponential notation according to
/// `config`'s exponential bounds. This is what `Display` prints.
pub fn to_plain_or_exponential(value: &Decimal, config: &Configuration) -> String {
    let exponent = value.exponent();
    let digits = value.digits();
    let text = if config.uses_exponential(exponent) {
        exponential(&digits, exponent)
    } else {
        fixed(&digits, exponent)
    };
    signed(value, text)
}

/// All significant digits in fixed notation, whatever the exponent.
pub fn to_plain(value: &Decimal) -> String {
    signed(value, fixed(&value.digits(), value.exponent()))
}

// ============================================================================
// Rendering Helpers
// ============================================================================

fn checked_places(places: usize) -> NumericResult<i64> {
    if places > MAX_DECIMAL_PLACES {
        return Err(NumericError::InvalidConfiguration);
    }
    i64::try_from(places).map_err(|_| NumericError::InvalidConfiguration)
}

fn round_significant(value: &Decimal, significant: usize, mode: RoundingMode) -> Decimal {
    let significant = u32::try_from(significant).unwrap_or(u32::MAX);
    let (coefficient, exponent) = round_to_significant(
        value.coefficient(),
        value.limb_exponent(),
        significant,
        mode,
        value.is_negative(),
        false,
    );
    Decimal::from_parts(value.is_negative(), coefficient, exponent)
}

/// Significant digits right-padded with zeros to `width`.
fn padded_digits(value: &Decimal, width: usize) -> String {
    let mut digits = value.digits();
    if digits.len() < width {
        digits.extend(std::iter::repeat_n('0', width - digits.len()));
    }
    digits
}

/// `digits` with the point placed after the digit of weight `10^exponent`.
fn fixed(digits: &str, exponent: i64) -> String {
    let len = digits.len() as i64;
    if exponent < 0 {
        let zeros = (-exponent - 1) as usize;
        let mut text = String::with_capacity(digits.len() + zeros + 2);
        text.push_str("0.");
        text.extend(std::iter::repeat_n('0', zeros));
        text.push_str(digits);
        text
    } else if exponent + 1 >= len {
        let mut text = String::with_capacity((exponent + 1) as usize);
        text.push_str(digits);
        text.extend(std::iter::repeat_n('0', (exponent + 1 - len) as usize));
        text
    } else {
        let (integer, fraction) = digits.split_at((exponent + 1) as usize);
        format!("{integer}.{fraction}")
    }
}

/// `d.ddd` followed by `e+x` or `e-x`.
fn exponential(digits: &str, exponent: i64) -> String {
    let (first, rest) = digits.split_at(1);
    let sign = if exponent < 0 { '-' } else { '+' };
    if rest.is_empty() {
        format!("{first}e{sign}{}", exponent.unsigned_abs())
    } else {
        format!("{first}.{rest}e{sign}{}", exponent.unsigned_abs())
    }
}

/// Extend the fraction of fixed `text` to at least `places` digits.
fn pad_fraction(text: &mut String, places: usize) {
    if places == 0 {
        return;
    }
    let existing = match text.find('.') {
        Some(point) => text.len() - point - 1,
        None => {
            text.push('.');
            0
        }
    };
    if existing < places {
        text.extend(std::iter::repeat_n('0', places - existing));
    }
}

/// Prefix a minus sign for nonzero negative values.
fn signed(value: &Decimal, text: String) -> String {
    if value.is_negative() && !value.is_zero() {
        format!("-{text}")
    } else {
        text
    }
}
