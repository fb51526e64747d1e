// ============================================================================
// Comparator
// Total ordering of decimal values
// ============================================================================

use crate::domain::Decimal;
use std::cmp::Ordering;

/// Three-way numeric comparison.
///
/// Zero compares equal to zero regardless of how it was produced. Two
/// values of the same sign are ordered by the position of their most
/// significant limb first, then limb by limb.
pub fn compare(a: &Decimal, b: &Decimal) -> Ordering {
    match (a.is_zero(), b.is_zero()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return negative_first(b).reverse(),
        (false, true) => return negative_first(a),
        (false, false) => {}
    }
    if a.is_negative() != b.is_negative() {
        return negative_first(a);
    }

    let (x, y) = (a.coefficient(), b.coefficient());
    let magnitude = (a.limb_exponent() + x.len() as i64)
        .cmp(&(b.limb_exponent() + y.len() as i64))
        // Both coefficients start with a nonzero limb, so the slices
        // compare like left-aligned digit strings.
        .then_with(|| x.cmp(y));

    if a.is_negative() {
        magnitude.reverse()
    } else {
        magnitude
    }
}

/// Ordering of a nonzero value against zero.
#[inline]
fn negative_first(value: &Decimal) -> Ordering {
    if value.is_negative() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

#[inline]
pub fn eq(a: &Decimal, b: &Decimal) -> bool {
    compare(a, b) == Ordering::Equal
}

#[inline]
pub fn lt(a: &Decimal, b: &Decimal) -> bool {
    compare(a, b) == Ordering::Less
}

#[inline]
pub fn lte(a: &Decimal, b: &Decimal) -> bool {
    compare(a, b) != Ordering::Greater
}

#[inline]
pub fn gt(a: &Decimal, b: &Decimal) -> bool {
    compare(a, b) == Ordering::Greater
}

#[inline]
pub fn gte(a: &Decimal, b: &Decimal) -> bool {
    compare(a, b) != Ordering::Less
}
