//! Error taxonomy for the benchmark engine.
//!
//! Only two things can go wrong: the decimal accumulator can exceed its
//! representable range, and a sweep configuration can describe a loop that
//! never terminates. Integer and float kinds never raise; their silent
//! wrap/stagnation behavior is the point of the benchmark.

use thiserror::Error;

/// Errors surfaced by the sweep engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// The decimal accumulator exceeded its representable range.
    #[error("decimal accumulator overflowed its representable range")]
    PrecisionOverflow,

    /// Sweep configuration whose iteration count would never reach the bound.
    #[error("invalid sweep config: {0}")]
    InvalidConfig(String),
}
