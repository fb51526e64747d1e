// ============================================================================
// Rounding Engine
// Single-decision rounding of limb coefficients to a decimal position
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::limbs::{
    add_magnitude, digit_count, is_zero, scientific_exponent, significant, strip_trailing_zeros,
    Limb, Limbs, LIMB_DIGITS, POW10,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to resolve digits discarded by rounding.
///
/// "Up" and "down" are magnitude directions (away from / toward zero);
/// "ceil" and "floor" are directions on the number line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero (truncate)
    Down,
    /// Toward positive infinity
    Ceil,
    /// Toward negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    #[default]
    HalfUp,
    /// Nearest neighbour, ties toward zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour
    HalfEven,
    /// Nearest neighbour, ties toward positive infinity
    HalfCeil,
    /// Nearest neighbour, ties toward negative infinity
    HalfFloor,
}

impl RoundingMode {
    /// All modes, in their conventional numeric order.
    pub const ALL: [RoundingMode; 9] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceil,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfCeil,
        RoundingMode::HalfFloor,
    ];

    /// Decide whether the kept magnitude must be incremented by one unit.
    ///
    /// - `negative`: sign of the value being rounded
    /// - `kept_odd`: parity of the least significant kept digit
    /// - `first`: first discarded digit
    /// - `rest`: whether anything beyond `first` is nonzero
    pub fn should_increment(self, negative: bool, kept_odd: bool, first: u8, rest: bool) -> bool {
        let inexact = first != 0 || rest;
        let above_half = first > 5 || (first == 5 && rest);
        let tie = first == 5 && !rest;

        match self {
            RoundingMode::Up => inexact,
            RoundingMode::Down => false,
            RoundingMode::Ceil => inexact && !negative,
            RoundingMode::Floor => inexact && negative,
            RoundingMode::HalfUp => first >= 5,
            RoundingMode::HalfDown => above_half,
            RoundingMode::HalfEven => above_half || (tie && kept_odd),
            RoundingMode::HalfCeil => above_half || (tie && !negative),
            RoundingMode::HalfFloor => above_half || (tie && negative),
        }
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = NumericError;

    /// Numeric codes 0-8 in the order of [`RoundingMode::ALL`].
    fn try_from(code: u8) -> NumericResult<Self> {
        RoundingMode::ALL
            .get(code as usize)
            .copied()
            .ok_or(NumericError::InvalidConfiguration)
    }
}

// ============================================================================
// Coefficient Rounding
// ============================================================================

/// Round `coefficient * LIMB_RADIX^exponent` so that its least significant
/// kept digit has weight `10^position`.
///
/// `sticky` marks nonzero digits below the coefficient (a division
/// remainder, an inexact root); it only takes effect when at least one
/// digit of the coefficient is discarded.
///
/// Returns the new coefficient and exponent with trailing zero limbs
/// stripped. A carry out of the most significant digit (`999 -> 1000`)
/// simply lengthens the coefficient.
pub fn round_to_position(
    coefficient: &[Limb],
    exponent: i64,
    position: i64,
    mode: RoundingMode,
    negative: bool,
    sticky: bool,
) -> (Limbs, i64) {
    let coefficient = significant(coefficient);
    if coefficient.is_empty() {
        return (Limbs::new(), 0);
    }

    let drop = position - exponent * LIMB_DIGITS as i64;
    if drop <= 0 {
        return finish(Limbs::from_slice(coefficient), exponent);
    }

    let digits = digit_count(coefficient) as i64;
    if drop >= digits {
        // Every digit is discarded; the kept digit is an implicit zero.
        let (first, rest) = if drop == digits {
            let top_digits = digit_count(&coefficient[..1]);
            let first = (coefficient[0] / POW10[top_digits - 1]) % 10;
            let rest = coefficient[0] % POW10[top_digits - 1] != 0
                || !is_zero(&coefficient[1..])
                || sticky;
            (first as u8, rest)
        } else {
            (0, true)
        };
        if mode.should_increment(negative, false, first, rest) {
            return unit_at(position);
        }
        return (Limbs::new(), 0);
    }

    let drop = drop as usize;
    let whole = drop / LIMB_DIGITS;
    let partial = drop % LIMB_DIGITS;
    let keep_len = coefficient.len() - whole;

    let mut kept = Limbs::from_slice(&coefficient[..keep_len]);
    let last = kept[keep_len - 1];
    let (first, rest, kept_digit, unit) = if partial == 0 {
        let boundary = coefficient[keep_len];
        let first = boundary / POW10[LIMB_DIGITS - 1];
        let rest = boundary % POW10[LIMB_DIGITS - 1] != 0
            || !is_zero(&coefficient[keep_len + 1..])
            || sticky;
        (first, rest, last % 10, 1)
    } else {
        let first = (last / POW10[partial - 1]) % 10;
        let rest = last % POW10[partial - 1] != 0 || !is_zero(&coefficient[keep_len..]) || sticky;
        kept[keep_len - 1] = last - last % POW10[partial];
        (first, rest, (last / POW10[partial]) % 10, POW10[partial])
    };

    if mode.should_increment(negative, kept_digit % 2 == 1, first as u8, rest) {
        kept = add_magnitude(&kept, &[unit]);
    }
    finish(kept, exponent + whole as i64)
}

/// Round to `significant` digits counted from the most significant digit.
pub fn round_to_significant(
    coefficient: &[Limb],
    exponent: i64,
    significant: u32,
    mode: RoundingMode,
    negative: bool,
    sticky: bool,
) -> (Limbs, i64) {
    if is_zero(coefficient) {
        return (Limbs::new(), 0);
    }
    let position = scientific_exponent(coefficient, exponent) - significant as i64 + 1;
    round_to_position(coefficient, exponent, position, mode, negative, sticky)
}

/// `10^position` as a coefficient/exponent pair.
fn unit_at(position: i64) -> (Limbs, i64) {
    let digits = LIMB_DIGITS as i64;
    let mut coefficient = Limbs::new();
    coefficient.push(POW10[position.rem_euclid(digits) as usize]);
    (coefficient, position.div_euclid(digits))
}

fn finish(mut coefficient: Limbs, exponent: i64) -> (Limbs, i64) {
    let stripped = strip_trailing_zeros(&mut coefficient);
    if coefficient.is_empty() {
        return (coefficient, 0);
    }
    (coefficient, exponent + stripped as i64)
}

// ============================================================================
// Tests
// ============================================================================
