// ============================================================================
// Decimal Configuration
// Immutable precision, rounding and range settings for decimal arithmetic
// ============================================================================

use crate::numeric::{NumericError, NumericResult, RoundingMode};
use parking_lot::{const_rwlock, RwLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Largest accepted precision (significant digits).
pub const MAX_PRECISION: u32 = 1_000_000;

/// Largest magnitude accepted for `min_exponent` and `max_exponent`, and
/// for the exponent of a value built from raw parts.
pub const MAX_EXPONENT: i64 = 1_000_000_000;

/// Most digits `to_fixed`, `to_exponential` and `to_precision` will
/// render after the point or in total.
pub const MAX_DECIMAL_PLACES: usize = 1_000_000;

/// Extra digits computed beyond the configured precision by division,
/// square root and power before the single final rounding.
pub const GUARD_DIGITS: u32 = 2;

// ============================================================================
// Configuration
// ============================================================================

/// Settings consulted by every arithmetic and formatting operation.
///
/// A `Configuration` is a plain value: it is never mutated after creation.
/// Derive variants with [`Configuration::with`] or the `with_*` helpers,
/// which validate and return a new value.
///
/// Exponents here are scientific exponents: the power of ten of a value's
/// most significant digit (`1234.5` has exponent 3).
///
/// `NaN` and infinities are not representable. Division by zero always
/// fails with [`NumericError::DivisionByZero`] and the square root of a
/// negative value with [`NumericError::InvalidDomain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Configuration {
    /// Significant digits kept by `mul`, `div`, `sqrt` and `pow`
    precision: u32,

    /// Rounding applied whenever digits are discarded
    rounding: RoundingMode,

    /// Exponents at or below this render in exponential notation
    exponential_lower_bound: i64,

    /// Exponents at or above this render in exponential notation
    exponential_upper_bound: i64,

    /// Smallest exponent a nonzero result may have
    min_exponent: i64,

    /// Largest exponent a result may have
    max_exponent: i64,

    /// Largest exponent accepted by `pow`
    max_power: u64,

    /// Reject lossy conversions to and from `f64`
    strict: bool,
}

impl Configuration {
    /// Defaults: 20 significant digits, `HalfUp`, exponential notation
    /// outside `(-7, 21)`, exponents within `±1_000_000`.
    pub const DEFAULT: Configuration = Configuration {
        precision: 20,
        rounding: RoundingMode::HalfUp,
        exponential_lower_bound: -7,
        exponential_upper_bound: 21,
        min_exponent: -1_000_000,
        max_exponent: 1_000_000,
        max_power: 1_000_000,
        strict: false,
    };

    /// The default configuration.
    pub const fn with_defaults() -> Self {
        Self::DEFAULT
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    #[inline]
    pub const fn exponential_lower_bound(&self) -> i64 {
        self.exponential_lower_bound
    }

    #[inline]
    pub const fn exponential_upper_bound(&self) -> i64 {
        self.exponential_upper_bound
    }

    #[inline]
    pub const fn min_exponent(&self) -> i64 {
        self.min_exponent
    }

    #[inline]
    pub const fn max_exponent(&self) -> i64 {
        self.max_exponent
    }

    #[inline]
    pub const fn max_power(&self) -> u64 {
        self.max_power
    }

    #[inline]
    pub const fn strict(&self) -> bool {
        self.strict
    }

    /// Whether a value with this scientific exponent renders exponentially.
    #[inline]
    pub const fn uses_exponential(&self, exponent: i64) -> bool {
        exponent <= self.exponential_lower_bound || exponent >= self.exponential_upper_bound
    }

    // ========================================================================
    // Derivation
    // ========================================================================

    /// Create a new configuration from this one with `overrides` applied.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the result fails [`validate`](Self::validate).
    pub fn with(&self, overrides: ConfigOverrides) -> NumericResult<Self> {
        let config = Self {
            precision: overrides.precision.unwrap_or(self.precision),
            rounding: overrides.rounding.unwrap_or(self.rounding),
            exponential_lower_bound: overrides
                .exponential_lower_bound
                .unwrap_or(self.exponential_lower_bound),
            exponential_upper_bound: overrides
                .exponential_upper_bound
                .unwrap_or(self.exponential_upper_bound),
            min_exponent: overrides.min_exponent.unwrap_or(self.min_exponent),
            max_exponent: overrides.max_exponent.unwrap_or(self.max_exponent),
            max_power: overrides.max_power.unwrap_or(self.max_power),
            strict: overrides.strict.unwrap_or(self.strict),
        };
        config.validate()?;
        Ok(config)
    }

    /// Shorthand for overriding the precision only.
    pub fn with_precision(&self, precision: u32) -> NumericResult<Self> {
        self.with(ConfigOverrides::new().with_precision(precision))
    }

    /// Shorthand for overriding the rounding mode only (always valid).
    pub fn with_rounding(&self, rounding: RoundingMode) -> Self {
        Self { rounding, ..*self }
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(NumericError::InvalidConfiguration);
        }
        if self.exponential_lower_bound > 0 || self.exponential_upper_bound < 0 {
            return Err(NumericError::InvalidConfiguration);
        }
        if self.min_exponent >= 0 || self.max_exponent <= 0 {
            return Err(NumericError::InvalidConfiguration);
        }
        if self.min_exponent < -MAX_EXPONENT || self.max_exponent > MAX_EXPONENT {
            return Err(NumericError::InvalidConfiguration);
        }
        Ok(())
    }
}

// Deserialized settings go through `validate` like any other override.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            precision: u32,
            rounding: RoundingMode,
            exponential_lower_bound: i64,
            exponential_upper_bound: i64,
            min_exponent: i64,
            max_exponent: i64,
            max_power: u64,
            strict: bool,
        }

        let fields = Fields::deserialize(deserializer)?;
        let config = Configuration {
            precision: fields.precision,
            rounding: fields.rounding,
            exponential_lower_bound: fields.exponential_lower_bound,
            exponential_upper_bound: fields.exponential_upper_bound,
            min_exponent: fields.min_exponent,
            max_exponent: fields.max_exponent,
            max_power: fields.max_power,
            strict: fields.strict,
        };
        config.validate().map_err(serde::de::Error::custom)?;
        Ok(config)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl Configuration {
    /// IEEE 754-2008 decimal32 interchange format
    /// - 7 significant digits
    /// - Exponents -95..=96
    /// - Ties to even
    pub const fn decimal32() -> Self {
        Self::interchange(7, -95, 96)
    }

    /// IEEE 754-2008 decimal64 interchange format
    /// - 16 significant digits
    /// - Exponents -383..=384
    /// - Ties to even
    pub const fn decimal64() -> Self {
        Self::interchange(16, -383, 384)
    }

    /// IEEE 754-2008 decimal128 interchange format
    /// - 34 significant digits
    /// - Exponents -6143..=6144
    /// - Ties to even
    pub const fn decimal128() -> Self {
        Self::interchange(34, -6143, 6144)
    }

    const fn interchange(precision: u32, min_exponent: i64, max_exponent: i64) -> Self {
        Self {
            precision,
            rounding: RoundingMode::HalfEven,
            min_exponent,
            max_exponent,
            ..Self::DEFAULT
        }
    }
}

// ============================================================================
// Overrides
// ============================================================================

/// Partial set of configuration values applied by [`Configuration::with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub precision: Option<u32>,
    pub rounding: Option<RoundingMode>,
    pub exponential_lower_bound: Option<i64>,
    pub exponential_upper_bound: Option<i64>,
    pub min_exponent: Option<i64>,
    pub max_exponent: Option<i64>,
    pub max_power: Option<u64>,
    pub strict: Option<bool>,
}

impl ConfigOverrides {
    /// No overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set significant digits
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = Some(rounding);
        self
    }

    /// Builder method: Set the exponential-notation bounds
    pub fn with_exponential_bounds(mut self, lower: i64, upper: i64) -> Self {
        self.exponential_lower_bound = Some(lower);
        self.exponential_upper_bound = Some(upper);
        self
    }

    /// Builder method: Set the valid exponent range
    pub fn with_exponent_range(mut self, min: i64, max: i64) -> Self {
        self.min_exponent = Some(min);
        self.max_exponent = Some(max);
        self
    }

    /// Builder method: Set the largest `pow` exponent
    pub fn with_max_power(mut self, max_power: u64) -> Self {
        self.max_power = Some(max_power);
        self
    }

    /// Builder method: Enable or disable strict `f64` conversions
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }
}

// ============================================================================
// Process-wide Default
// ============================================================================

static PROCESS_DEFAULT: RwLock<Configuration> = const_rwlock(Configuration::DEFAULT);

/// Snapshot of the process-wide default configuration.
///
/// Used by `parse`, `Display` and the operator traits. Explicit
/// configurations passed to operations never consult it.
pub fn default_configuration() -> Configuration {
    *PROCESS_DEFAULT.read()
}

/// Replace the process-wide default configuration.
///
/// Intended to be called once at start-up, before concurrent use.
///
/// # Errors
/// Returns `InvalidConfiguration` if `config` fails validation.
pub fn set_default_configuration(config: Configuration) -> NumericResult<()> {
    config.validate()?;
    *PROCESS_DEFAULT.write() = config;
    tracing::debug!(
        precision = config.precision,
        rounding = ?config.rounding,
        "process default decimal configuration replaced"
    );
    Ok(())
}
