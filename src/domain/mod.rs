// ============================================================================
// Domain Models Module
// The decimal value type and the configuration it is computed under
// ============================================================================

pub mod config;
pub mod decimal;

pub use config::{
    default_configuration, set_default_configuration, ConfigOverrides, Configuration,
    GUARD_DIGITS, MAX_DECIMAL_PLACES, MAX_EXPONENT, MAX_PRECISION,
};
pub use decimal::{Decimal, ROUND_LIMIT};
