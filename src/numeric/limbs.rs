// ============================================================================
// Limb Store
// Unsigned base-10^7 digit sequences with carry/borrow primitives
// ============================================================================
//
// Every function in this module works on magnitudes only. Sequences are stored
// most-significant limb first and are treated as plain integers: alignment
// (the exponent) and sign are the caller's business.

use smallvec::SmallVec;
use std::cmp::Ordering;

/// One group of `LIMB_DIGITS` decimal digits.
pub type Limb = u32;

/// Inline-first limb sequence, most significant limb first.
pub type Limbs = SmallVec<[Limb; 4]>;

/// Decimal digits held by one limb.
pub const LIMB_DIGITS: usize = 7;

/// Radix of one limb (10^LIMB_DIGITS).
pub const LIMB_RADIX: Limb = 10_000_000;

const RADIX: u64 = LIMB_RADIX as u64;

/// Powers of ten that fit in a single limb, plus the radix itself.
pub(crate) const POW10: [Limb; LIMB_DIGITS + 1] =
    [1, 10, 100, 1_000, 10_000, 100_000, 1_000_000, 10_000_000];

// ============================================================================
// Normalization
// ============================================================================

/// True when every limb is zero (including the empty sequence).
#[inline]
pub fn is_zero(a: &[Limb]) -> bool {
    a.iter().all(|&limb| limb == 0)
}

/// View of `a` without its leading zero limbs.
#[inline]
pub(crate) fn significant(a: &[Limb]) -> &[Limb] {
    let start = a.iter().position(|&limb| limb != 0).unwrap_or(a.len());
    &a[start..]
}

/// Drop leading zero limbs in place. Zero becomes the empty sequence.
pub fn strip_leading_zeros(a: &mut Limbs) {
    let count = a.iter().take_while(|&&limb| limb == 0).count();
    if count > 0 {
        a.drain(..count);
    }
}

/// Drop trailing zero limbs in place and return how many were removed.
///
/// Callers fold the returned count into the exponent.
pub fn strip_trailing_zeros(a: &mut Limbs) -> usize {
    let count = a.iter().rev().take_while(|&&limb| limb == 0).count();
    a.truncate(a.len() - count);
    count
}

/// Multiply by `LIMB_RADIX^count` by appending zero limbs.
pub fn shift_limbs(a: &[Limb], count: usize) -> Limbs {
    let a = significant(a);
    let mut out = Limbs::with_capacity(a.len() + count);
    out.extend_from_slice(a);
    if !a.is_empty() {
        out.resize(a.len() + count, 0);
    }
    out
}

// ============================================================================
// Comparison
// ============================================================================

/// Compare two magnitudes.
pub fn compare_magnitude(a: &[Limb], b: &[Limb]) -> Ordering {
    let a = significant(a);
    let b = significant(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// ============================================================================
// Addition and Subtraction
// ============================================================================

/// `a + b`.
pub fn add_magnitude(a: &[Limb], b: &[Limb]) -> Limbs {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let offset = long.len() - short.len();

    let mut out = Limbs::with_capacity(long.len() + 1);
    out.extend_from_slice(long);

    let mut carry = 0;
    for i in (0..out.len()).rev() {
        let addend = if i >= offset { short[i - offset] } else { 0 };
        if addend == 0 && carry == 0 && i < offset {
            break;
        }
        let sum = out[i] + addend + carry;
        if sum >= LIMB_RADIX {
            out[i] = sum - LIMB_RADIX;
            carry = 1;
        } else {
            out[i] = sum;
            carry = 0;
        }
    }
    if carry > 0 {
        out.insert(0, carry);
    }

    strip_leading_zeros(&mut out);
    out
}

/// `a + value` for a single-limb `value`.
pub fn add_small(a: &[Limb], value: Limb) -> Limbs {
    if value == 0 {
        return Limbs::from_slice(significant(a));
    }
    add_magnitude(a, &[value])
}

/// `a - b`. Requires `a >= b`.
pub fn sub_magnitude(a: &[Limb], b: &[Limb]) -> Limbs {
    debug_assert!(compare_magnitude(a, b) != Ordering::Less);

    let a = significant(a);
    let b = significant(b);
    let offset = a.len() - b.len();

    let mut out = Limbs::from_slice(a);
    let mut borrow = 0;
    for i in (0..out.len()).rev() {
        let subtrahend = (if i >= offset { b[i - offset] } else { 0 }) + borrow;
        if subtrahend == 0 && i < offset {
            break;
        }
        if out[i] >= subtrahend {
            out[i] -= subtrahend;
            borrow = 0;
        } else {
            out[i] = out[i] + LIMB_RADIX - subtrahend;
            borrow = 1;
        }
    }

    strip_leading_zeros(&mut out);
    out
}

// ============================================================================
// Multiplication
// ============================================================================

/// `a * b` (schoolbook).
pub fn mul_magnitude(a: &[Limb], b: &[Limb]) -> Limbs {
    let a = significant(a);
    let b = significant(b);
    if a.is_empty() || b.is_empty() {
        return Limbs::new();
    }

    // Least significant first while accumulating.
    let mut acc = vec![0u64; a.len() + b.len()];
    for (i, &x) in a.iter().rev().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &y) in b.iter().rev().enumerate() {
            let cur = acc[i + j] + x as u64 * y as u64 + carry;
            acc[i + j] = cur % RADIX;
            carry = cur / RADIX;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let cur = acc[k] + carry;
            acc[k] = cur % RADIX;
            carry = cur / RADIX;
            k += 1;
        }
    }

    let mut out: Limbs = acc.iter().rev().map(|&limb| limb as Limb).collect();
    strip_leading_zeros(&mut out);
    out
}

/// `a * factor` for a factor below `LIMB_RADIX`.
pub fn mul_small(a: &[Limb], factor: Limb) -> Limbs {
    let a = significant(a);
    if factor == 0 || a.is_empty() {
        return Limbs::new();
    }

    let mut out = Limbs::with_capacity(a.len() + 1);
    out.extend_from_slice(a);

    let mut carry = 0u64;
    for limb in out.iter_mut().rev() {
        let cur = *limb as u64 * factor as u64 + carry;
        *limb = (cur % RADIX) as Limb;
        carry = cur / RADIX;
    }
    while carry > 0 {
        out.insert(0, (carry % RADIX) as Limb);
        carry /= RADIX;
    }
    out
}

// ============================================================================
// Division
// ============================================================================

/// `(a / divisor, a % divisor)` for a nonzero single-limb divisor.
pub fn divmod_small(a: &[Limb], divisor: Limb) -> (Limbs, Limb) {
    debug_assert!(divisor > 0);

    let mut quotient = Limbs::with_capacity(a.len());
    let mut rem = 0u64;
    for &limb in significant(a) {
        let cur = rem * RADIX + limb as u64;
        quotient.push((cur / divisor as u64) as Limb);
        rem = cur % divisor as u64;
    }

    strip_leading_zeros(&mut quotient);
    (quotient, rem as Limb)
}

/// `(a / b, a % b)` by limb-level long division. `b` must be nonzero.
pub fn divmod_magnitude(a: &[Limb], b: &[Limb]) -> (Limbs, Limbs) {
    let a = significant(a);
    let b = significant(b);
    debug_assert!(!b.is_empty(), "division by a zero magnitude");

    if b.len() == 1 {
        let (quotient, rem) = divmod_small(a, b[0]);
        return (quotient, from_u128(rem as u128));
    }
    if compare_magnitude(a, b) == Ordering::Less {
        return (Limbs::new(), Limbs::from_slice(a));
    }

    let mut quotient = Limbs::with_capacity(a.len());
    let mut rem = Limbs::new();
    for &limb in a {
        // rem = rem * RADIX + limb, kept free of leading zeros
        if !rem.is_empty() || limb != 0 {
            rem.push(limb);
        }
        let (digit, next) = quotient_limb(&rem, b);
        quotient.push(digit);
        rem = next;
    }

    strip_leading_zeros(&mut quotient);
    (quotient, rem)
}

/// Largest `q < LIMB_RADIX` with `b * q <= rem`, and `rem - b * q`.
///
/// `rem < b * LIMB_RADIX` must hold. The estimate comes from the leading
/// limbs of both operands and is corrected in either direction.
fn quotient_limb(rem: &[Limb], b: &[Limb]) -> (Limb, Limbs) {
    if compare_magnitude(rem, b) == Ordering::Less {
        return (0, Limbs::from_slice(rem));
    }

    let head = b.len().min(2);
    let rem_head = rem[..rem.len() - b.len() + head]
        .iter()
        .fold(0u128, |acc, &limb| acc * RADIX as u128 + limb as u128);
    let b_head = b[..head]
        .iter()
        .fold(0u128, |acc, &limb| acc * RADIX as u128 + limb as u128);

    let mut q = (rem_head / b_head).min(RADIX as u128 - 1) as Limb;
    let mut product = mul_small(b, q);
    while compare_magnitude(&product, rem) == Ordering::Greater {
        q -= 1;
        product = sub_magnitude(&product, b);
    }
    let mut diff = sub_magnitude(rem, &product);
    while compare_magnitude(&diff, b) != Ordering::Less {
        q += 1;
        diff = sub_magnitude(&diff, b);
    }
    (q, diff)
}

// ============================================================================
// Conversions
// ============================================================================

/// Limbs of an unsigned integer.
pub fn from_u128(mut value: u128) -> Limbs {
    let mut out = Limbs::new();
    while value > 0 {
        out.insert(0, (value % RADIX as u128) as Limb);
        value /= RADIX as u128;
    }
    out
}

/// Limbs of a string of ASCII decimal digits (already validated).
pub fn from_decimal_digits(digits: &[u8]) -> Limbs {
    let mut out = Limbs::with_capacity(digits.len() / LIMB_DIGITS + 1);
    let head = digits.len() % LIMB_DIGITS;
    let fold = |chunk: &[u8]| {
        chunk
            .iter()
            .fold(0, |acc: Limb, &d| acc * 10 + (d - b'0') as Limb)
    };
    if head > 0 {
        out.push(fold(&digits[..head]));
    }
    for chunk in digits[head..].chunks(LIMB_DIGITS) {
        out.push(fold(chunk));
    }
    strip_leading_zeros(&mut out);
    out
}

/// `10^power` as limbs.
pub fn power_of_ten(power: usize) -> Limbs {
    shift_limbs(&[POW10[power % LIMB_DIGITS]], power / LIMB_DIGITS)
}

/// Number of decimal digits in a single limb value (0 for 0).
#[inline]
pub fn limb_digit_count(limb: Limb) -> usize {
    POW10.iter().take_while(|&&p| p <= limb).count()
}

/// Number of decimal digits of the magnitude (0 for zero).
pub fn digit_count(a: &[Limb]) -> usize {
    let a = significant(a);
    match a.first() {
        Some(&top) => limb_digit_count(top) + (a.len() - 1) * LIMB_DIGITS,
        None => 0,
    }
}

/// Decimal digits of the magnitude, without leading zeros ("0" for zero).
pub fn to_decimal_string(a: &[Limb]) -> String {
    let a = significant(a);
    let Some((top, rest)) = a.split_first() else {
        return "0".to_string();
    };
    let mut out = String::with_capacity(a.len() * LIMB_DIGITS);
    out.push_str(&top.to_string());
    for limb in rest {
        out.push_str(&format!("{:0width$}", limb, width = LIMB_DIGITS));
    }
    out
}

/// Power of ten of the most significant digit of `a * LIMB_RADIX^exponent`.
pub fn scientific_exponent(a: &[Limb], exponent: i64) -> i64 {
    exponent * LIMB_DIGITS as i64 + digit_count(a) as i64 - 1
}

// ============================================================================
// Tests
// ============================================================================
