#![warn(missing_docs)]
//! numbench Core - Benchmark Engine
//!
//! This crate provides the measured part of numbench:
//! - High-precision timing (hardware cycle counters with Instant fallback)
//! - π-digit spigot used as an anti-frequency-scaling warm-up
//! - Per-kind timed accumulation loops over five numeric representations
//! - The exponential iteration sweep and its running totals

mod accum;
mod error;
mod measure;
mod spigot;
mod sweep;

pub use accum::{BenchState, KindValue, NumericKind, INT_STEP, STEP_DECIMAL, STEP_F32, STEP_F64};
pub use error::SweepError;
/// Whether this platform provides hardware cycle counters (x86_64 RDTSCP or
/// AArch64 CNTVCT_EL0). When `false`, cycle counts are reported as 0 and only
/// wall-clock time is available.
pub use measure::HAS_CYCLE_COUNTER;
pub use measure::{Instant, Timer, TimingSample};
pub use spigot::{digits_of_pi, warm_up, WarmupResult};
pub use sweep::{
    run_sweep, run_sweep_with_state, KindEntry, RunningTotals, StepReport, SweepConfig,
    SweepOutcome,
};
