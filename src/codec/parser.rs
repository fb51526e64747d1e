// ============================================================================
// Parser
// Text in any radix from 2 to 64 to a Decimal
// ============================================================================

use super::radix::digit_value;
use crate::domain::config::{default_configuration, Configuration, MAX_PRECISION};
use crate::domain::Decimal;
use crate::engine::arithmetic::{self, ensure_in_range};
use crate::numeric::limbs::{
    add_small, digit_count, from_decimal_digits, is_zero, mul_small, Limbs,
};
use crate::numeric::{NumericError, NumericResult};

/// Smallest accepted radix
pub const MIN_RADIX: u32 = 2;

/// Largest accepted radix
pub const MAX_RADIX: u32 = 64;

/// Parse `text` under the process-wide default configuration.
///
/// Without an explicit `radix` the text is decimal unless it carries a
/// `0x`, `0b` or `0o` prefix.
///
/// # Examples
/// ```
/// use decimal_engine::codec::parser::parse;
///
/// assert_eq!(parse("-1.5e3", None).unwrap().to_string(), "-1500");
/// assert_eq!(parse("0x1f", None).unwrap().to_string(), "31");
/// assert_eq!(parse("ff", Some(16)).unwrap().to_string(), "255");
/// ```
///
/// # Errors
/// See [`parse_with`].
pub fn parse(text: &str, radix: Option<u32>) -> NumericResult<Decimal> {
    parse_with(text, radix, &default_configuration())
}

/// Parse `text` under `config`.
///
/// Decimal input is exact. A fraction in another radix is exact when the
/// radix has no prime factors besides 2 and 5; otherwise it is rounded to
/// `config.precision()` significant digits.
///
/// # Errors
/// - `InvalidNumber` for empty input, a second radix point, a character
///   outside the radix, a malformed exponent, or a radix outside `2..=64`
/// - `RangeOverflow`/`RangeUnderflow` if the value's exponent is outside
///   `config`'s range
pub fn parse_with(
    text: &str,
    radix: Option<u32>,
    config: &Configuration,
) -> NumericResult<Decimal> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, body) = match radix {
        Some(radix) if (MIN_RADIX..=MAX_RADIX).contains(&radix) => (radix, body),
        Some(_) => return Err(NumericError::InvalidNumber),
        None => split_prefix(body),
    };

    if radix == 10 {
        let (mantissa, exponent) = split_exponent(body)?;
        let (integer, fraction) = split_point(mantissa)?;
        parse_decimal(negative, integer, fraction, exponent, config)
    } else {
        let (integer, fraction) = split_point(body)?;
        parse_radix(negative, integer, fraction, radix, config)
    }
}

/// Detect a radix prefix. Unprefixed text is decimal.
fn split_prefix(body: &str) -> (u32, &str) {
    let bytes = body.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1].to_ascii_lowercase() {
            b'x' => return (16, &body[2..]),
            b'b' => return (2, &body[2..]),
            b'o' => return (8, &body[2..]),
            _ => {}
        }
    }
    (10, body)
}

/// Split off an `e`/`E` exponent suffix.
fn split_exponent(body: &str) -> NumericResult<(&str, i64)> {
    let Some(at) = body.find(['e', 'E']) else {
        return Ok((body, 0));
    };
    let suffix = &body[at + 1..];
    let digits = suffix.strip_prefix(['+', '-']).unwrap_or(suffix);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidNumber);
    }
    let exponent = suffix.parse::<i64>().map_err(|_| NumericError::InvalidNumber)?;
    Ok((&body[..at], exponent))
}

/// Split the mantissa at its radix point. At least one digit is required.
fn split_point(mantissa: &str) -> NumericResult<(&str, &str)> {
    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => {
            if fraction.contains('.') {
                return Err(NumericError::InvalidNumber);
            }
            (integer, fraction)
        }
        None => (mantissa, ""),
    };
    if integer.is_empty() && fraction.is_empty() {
        return Err(NumericError::InvalidNumber);
    }
    Ok((integer, fraction))
}

// ============================================================================
// Decimal Input
// ============================================================================

fn parse_decimal(
    negative: bool,
    integer: &str,
    fraction: &str,
    exponent: i64,
    config: &Configuration,
) -> NumericResult<Decimal> {
    let digits: Vec<u8> = integer.bytes().chain(fraction.bytes()).collect();
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(NumericError::InvalidNumber);
    }

    let coefficient = from_decimal_digits(&digits);
    if is_zero(&coefficient) {
        return Ok(Decimal::zero());
    }

    // Checked before building so absurd exponents never reach the limbs.
    let scale = exponent as i128 - fraction.len() as i128;
    let scientific = scale + digit_count(&coefficient) as i128 - 1;
    if scientific > config.max_exponent() as i128 {
        return Err(NumericError::RangeOverflow);
    }
    if scientific < config.min_exponent() as i128 {
        return Err(NumericError::RangeUnderflow);
    }

    Ok(Decimal::from_scaled(negative, &coefficient, scale as i64))
}

// ============================================================================
// Other Radices
// ============================================================================

fn parse_radix(
    negative: bool,
    integer: &str,
    fraction: &str,
    radix: u32,
    config: &Configuration,
) -> NumericResult<Decimal> {
    let whole = horner(integer, radix)?;
    let numerator = horner(fraction, radix)?;

    let value = Decimal::from_parts(negative, whole, 0);
    ensure_in_range(&value, config)?;
    if is_zero(&numerator) {
        return Ok(value);
    }

    let places = fraction.len();
    let mut denominator = Limbs::from_slice(&[1]);
    for _ in 0..places {
        denominator = mul_small(&denominator, radix);
    }

    let precision = match terminating_places(radix) {
        Some(per_digit) => {
            let exact = (places as u64 * per_digit as u64).min(MAX_PRECISION as u64) as u32;
            exact.max(config.precision())
        }
        None => config.precision(),
    };
    let fraction_config = config.with_precision(precision)?;

    let fraction = arithmetic::div(
        &Decimal::from_parts(negative, numerator, 0),
        &Decimal::from_parts(false, denominator, 0),
        &fraction_config,
    )?;
    arithmetic::add(&value, &fraction, config)
}

/// Evaluate a digit string as a polynomial in `radix`.
fn horner(digits: &str, radix: u32) -> NumericResult<Limbs> {
    let mut acc = Limbs::new();
    for c in digits.chars() {
        let digit = digit_value(c, radix).ok_or(NumericError::InvalidNumber)?;
        acc = add_small(&mul_small(&acc, radix), digit);
    }
    Ok(acc)
}

/// Decimal places of `1 / radix` when it terminates.
///
/// `radix = 2^a * 5^b` gives `max(a, b)`; any other prime factor makes the
/// expansion infinite.
pub fn terminating_places(radix: u32) -> Option<u32> {
    let mut rest = radix;
    let mut twos = 0;
    let mut fives = 0;
    while rest > 1 && rest % 2 == 0 {
        rest /= 2;
        twos += 1;
    }
    while rest > 1 && rest % 5 == 0 {
        rest /= 5;
        fives += 1;
    }
    (rest == 1).then_some(twos.max(fives))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigOverrides;

    fn config() -> Configuration {
        Configuration::with_defaults()
    }

    fn parsed(text: &str) -> Decimal {
        parse_with(text, None, &config()).unwrap()
    }

    fn render(value: &Decimal) -> String {
        value.to_string_with(&config())
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(render(&parsed("123.456")), "123.456");
        assert_eq!(render(&parsed("  -0.001  ")), "-0.001");
        assert_eq!(render(&parsed("+7")), "7");
        assert_eq!(render(&parsed("5.")), "5");
        assert_eq!(render(&parsed(".5")), "0.5");
        assert_eq!(render(&parsed("000123.4500")), "123.45");
        assert_eq!(render(&parsed("1.5e3")), "1500");
        assert_eq!(render(&parsed("1.5E-3")), "0.0015");
        assert_eq!(render(&parsed("2e+2")), "200");
    }

    #[test]
    fn test_zero_forms() {
        for text in ["0", "-0", "0.000", "-0e10", ".0"] {
            let value = parsed(text);
            assert!(value.is_zero(), "{text}");
            assert!(!value.is_negative(), "{text}");
        }
    }

    #[test]
    fn test_full_input_precision() {
        let text = "3.1415926535897932384626433832795028841971693993751";
        let value = parsed(text);
        assert_eq!(value.digit_count(), 50);
        assert_eq!(value.to_fixed(49, &config()).unwrap(), text);
        // Trailing zeros are not significant
        assert_eq!(parsed("2.50000000000000").digit_count(), 2);
    }

    #[test]
    fn test_invalid_input() {
        for text in [
            "", "   ", "-", "+", ".", "1..2", "1.2.3", "abc", "1e", "1e+", "1e5.5", "e5", "--1",
            "1 2", "0x", "1_000",
        ] {
            assert_eq!(
                parse_with(text, None, &config()),
                Err(NumericError::InvalidNumber),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace() {
        for text in [" 1", "1 ", "\t1", "1\n", " -1", "- 1", "0x ff"] {
            assert_eq!(parse(text, None), Err(NumericError::InvalidNumber), "{text:?}");
        }
        assert_eq!(parse(" ff", Some(16)), Err(NumericError::InvalidNumber));
        assert_eq!(parse("ff ", Some(16)), Err(NumericError::InvalidNumber));
    }

    #[test]
    fn test_invalid_radix() {
        assert_eq!(parse("1", Some(1)), Err(NumericError::InvalidNumber));
        assert_eq!(parse("1", Some(65)), Err(NumericError::InvalidNumber));
        assert_eq!(parse("2", Some(2)), Err(NumericError::InvalidNumber));
        assert_eq!(parse("g", Some(16)), Err(NumericError::InvalidNumber));
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(render(&parsed("0xff")), "255");
        assert_eq!(render(&parsed("0XFF")), "255");
        assert_eq!(render(&parsed("-0b101")), "-5");
        assert_eq!(render(&parsed("0o17")), "15");
        assert_eq!(render(&parsed("0x0.8")), "0.5");
        // An explicit radix disables prefix detection
        assert_eq!(parse("0x10", Some(16)), Err(NumericError::InvalidNumber));
    }

    #[test]
    fn test_explicit_radix() {
        let value = parse_with("ff", Some(16), &config()).unwrap();
        assert_eq!(render(&value), "255");
        let value = parse_with("FF", Some(16), &config()).unwrap();
        assert_eq!(render(&value), "255");
        let value = parse_with("zz", Some(36), &config()).unwrap();
        assert_eq!(render(&value), "1295");
        // Above 36 letters are case-sensitive: 'A' is 36
        let value = parse_with("A", Some(64), &config()).unwrap();
        assert_eq!(render(&value), "36");
        let value = parse_with("_", Some(64), &config()).unwrap();
        assert_eq!(render(&value), "63");
        // 'e' is a digit, not an exponent, outside radix 10
        let value = parse_with("1e", Some(16), &config()).unwrap();
        assert_eq!(render(&value), "30");
    }

    #[test]
    fn test_radix_fractions() {
        // Terminating expansions are exact regardless of precision
        let narrow = config().with_precision(3).unwrap();
        let value = parse_with("0.0001", Some(2), &narrow).unwrap();
        assert_eq!(value.to_string_with(&narrow), "0.0625");
        let value = parse_with("1.1111111111", Some(2), &narrow).unwrap();
        assert_eq!(value.to_string_with(&narrow), "1.9990234375");

        // One third in base 3 is exact, but not in decimal
        let value = parse_with("0.1", Some(3), &config()).unwrap();
        assert_eq!(render(&value), "0.33333333333333333333");
        let value = parse_with("-0.1", Some(3), &narrow).unwrap();
        assert_eq!(value.to_string_with(&narrow), "-0.333");
    }

    #[test]
    fn test_terminating_places() {
        assert_eq!(terminating_places(2), Some(1));
        assert_eq!(terminating_places(8), Some(3));
        assert_eq!(terminating_places(10), Some(1));
        assert_eq!(terminating_places(20), Some(2));
        assert_eq!(terminating_places(3), None);
        assert_eq!(terminating_places(36), None);
    }

    #[test]
    fn test_range_checks() {
        let narrow = config()
            .with(ConfigOverrides::new().with_exponent_range(-5, 5))
            .unwrap();
        assert_eq!(
            parse_with("1e6", None, &narrow),
            Err(NumericError::RangeOverflow)
        );
        assert_eq!(
            parse_with("123456", None, &narrow),
            Err(NumericError::RangeOverflow)
        );
        assert_eq!(
            parse_with("0.000001", None, &narrow),
            Err(NumericError::RangeUnderflow)
        );
        assert!(parse_with("12345.6", None, &narrow).is_ok());
        assert_eq!(
            parse_with("1e9223372036854775807", None, &config()),
            Err(NumericError::RangeOverflow)
        );
        assert_eq!(
            parse_with("1e99999999999999999999", None, &config()),
            Err(NumericError::InvalidNumber)
        );
    }
}
