// ============================================================================
// Engine Module
// Arithmetic core, comparator and the per-context entry point
// ============================================================================

pub mod arithmetic;
pub mod compare;
pub mod context;
pub mod roots;

pub use arithmetic::{add, div, mul, rem, sub};
pub use compare::{compare, eq, gt, gte, lt, lte};
pub use context::{Context, ContextBuilder};
pub use roots::{pow, sqrt};
