// ============================================================================
// Codec Module
// Conversion between Decimal values and text
// ============================================================================

pub mod formatter;
pub mod parser;
pub mod radix;

pub use formatter::{to_exponential, to_fixed, to_plain, to_plain_or_exponential, to_precision};
pub use parser::{parse, parse_with, MAX_RADIX, MIN_RADIX};
pub use radix::{to_radix, ALPHABET};
