// ============================================================================
// Numeric Module
// Digit-level building blocks for arbitrary-precision decimals
// ============================================================================
//
// This module provides:
// - limbs: unsigned base-10^7 digit sequences with carry/borrow primitives
// - rounding: RoundingMode and the single-decision rounding engine
// - NumericError: error taxonomy shared by the whole crate
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Magnitudes only; sign and scale live in the value type

mod errors;
pub mod limbs;
pub mod rounding;

pub use errors::{NumericError, NumericResult};
pub use limbs::{Limb, Limbs, LIMB_DIGITS, LIMB_RADIX};
pub use rounding::RoundingMode;
