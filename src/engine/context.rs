// ============================================================================
// Numeric Context
// A configuration captured once and applied to every operation
// ============================================================================

use super::{arithmetic, roots};
use crate::codec::{formatter, parser, radix};
use crate::domain::config::{ConfigOverrides, Configuration};
use crate::domain::Decimal;
use crate::numeric::{NumericResult, RoundingMode};

/// Arithmetic and formatting bound to one immutable [`Configuration`].
///
/// Contexts are `Copy` and carry no shared state, so any number of them
/// (with different precisions, say) can be used side by side from any
/// thread.
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
///
/// let ctx = ContextBuilder::new().precision(5).build().unwrap();
/// let third = ctx.div(&ctx.parse("1").unwrap(), &ctx.parse("3").unwrap()).unwrap();
/// assert_eq!(third.to_string(), "0.33333");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    config: Configuration,
}

impl Context {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Context over the current process-wide default configuration.
    pub fn from_process_default() -> Self {
        Self::new(crate::domain::default_configuration())
    }

    #[inline]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    /// Parse decimal text (or `0x`/`0b`/`0o` prefixed text).
    pub fn parse(&self, text: &str) -> NumericResult<Decimal> {
        traced("parse", || parser::parse_with(text, None, &self.config))
    }

    /// Parse text written in `radix` (2 to 64).
    pub fn parse_radix(&self, text: &str, radix: u32) -> NumericResult<Decimal> {
        traced("parse_radix", || {
            parser::parse_with(text, Some(radix), &self.config)
        })
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn add(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        traced("add", || arithmetic::add(a, b, &self.config))
    }

    pub fn sub(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        traced("sub", || arithmetic::sub(a, b, &self.config))
    }

    pub fn mul(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        traced("mul", || arithmetic::mul(a, b, &self.config))
    }

    pub fn div(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        traced("div", || arithmetic::div(a, b, &self.config))
    }

    pub fn rem(&self, a: &Decimal, b: &Decimal) -> NumericResult<Decimal> {
        traced("rem", || arithmetic::rem(a, b, &self.config))
    }

    pub fn sqrt(&self, a: &Decimal) -> NumericResult<Decimal> {
        traced("sqrt", || roots::sqrt(a, &self.config))
    }

    pub fn pow(&self, a: &Decimal, exponent: u64) -> NumericResult<Decimal> {
        traced("pow", || roots::pow(a, exponent, &self.config))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    pub fn to_fixed(&self, value: &Decimal, decimal_places: usize) -> NumericResult<String> {
        traced("to_fixed", || {
            formatter::to_fixed(value, decimal_places, &self.config)
        })
    }

    pub fn to_exponential(
        &self,
        value: &Decimal,
        decimal_places: usize,
    ) -> NumericResult<String> {
        traced("to_exponential", || {
            formatter::to_exponential(value, decimal_places, &self.config)
        })
    }

    pub fn to_precision(&self, value: &Decimal, significant: u32) -> NumericResult<String> {
        traced("to_precision", || {
            formatter::to_precision(value, significant, &self.config)
        })
    }

    pub fn to_radix(&self, value: &Decimal, base: u32) -> NumericResult<String> {
        traced("to_radix", || radix::to_radix(value, base, &self.config))
    }

    /// Render using this context's exponential-notation bounds.
    pub fn to_string(&self, value: &Decimal) -> String {
        formatter::to_plain_or_exponential(value, &self.config)
    }
}

impl From<Configuration> for Context {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}

/// Run `op`, logging its outcome.
fn traced<T: std::fmt::Debug>(
    operation: &'static str,
    op: impl FnOnce() -> NumericResult<T>,
) -> NumericResult<T> {
    let outcome = op();
    match &outcome {
        Ok(value) => tracing::trace!(operation, ?value, "decimal operation completed"),
        Err(error) => tracing::debug!(operation, %error, "decimal operation failed"),
    }
    outcome
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Fluent construction of a [`Context`].
///
/// Settings accumulate as overrides on top of a base configuration (the
/// crate defaults unless [`ContextBuilder::from_config`] is used) and are
/// validated once by [`build`](ContextBuilder::build).
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
///
/// let ctx = ContextBuilder::new()
///     .precision(40)
///     .rounding(RoundingMode::HalfEven)
///     .exponent_range(-100, 100)
///     .build()
///     .unwrap();
/// assert_eq!(ctx.config().precision(), 40);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextBuilder {
    base: Configuration,
    overrides: ConfigOverrides,
}

impl ContextBuilder {
    /// Start from the crate defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(base: Configuration) -> Self {
        Self {
            base,
            overrides: ConfigOverrides::new(),
        }
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// IEEE 754-2008 decimal64 settings
    pub fn decimal64() -> Self {
        Self::from_config(Configuration::decimal64())
    }

    /// IEEE 754-2008 decimal128 settings
    pub fn decimal128() -> Self {
        Self::from_config(Configuration::decimal128())
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Significant digits kept by `mul`, `div`, `sqrt` and `pow`
    pub fn precision(mut self, precision: u32) -> Self {
        self.overrides = self.overrides.with_precision(precision);
        self
    }

    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.overrides = self.overrides.with_rounding(rounding);
        self
    }

    /// Exponents at or beyond these bounds render exponentially
    pub fn exponential_bounds(mut self, lower: i64, upper: i64) -> Self {
        self.overrides = self.overrides.with_exponential_bounds(lower, upper);
        self
    }

    pub fn exponent_range(mut self, min: i64, max: i64) -> Self {
        self.overrides = self.overrides.with_exponent_range(min, max);
        self
    }

    pub fn max_power(mut self, max_power: u64) -> Self {
        self.overrides = self.overrides.with_max_power(max_power);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.overrides = self.overrides.with_strict(strict);
        self
    }

    /// Validate the accumulated settings and create the context
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if any setting is out of range.
    pub fn build(self) -> NumericResult<Context> {
        let config = self.base.with(self.overrides)?;
        tracing::debug!(
            precision = config.precision(),
            rounding = ?config.rounding(),
            "decimal context created"
        );
        Ok(Context::new(config))
    }
}
