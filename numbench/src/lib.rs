#![warn(missing_docs)]
//! # numbench
//!
//! A pedagogical micro-benchmark measuring the relative speed and numeric
//! accuracy of five arithmetic representations (u32, u64, f32, f64, and a
//! 28-significant-digit decimal) under the same repeated accumulation
//! update.
//!
//! The lessons it exists to demonstrate:
//! - integer kinds wrap silently modulo their bit width
//! - f32 stagnates early: past 2^23 the 0.3 increment rounds to nothing
//! - f64 holds on far longer but drifts all the same
//! - the decimal kind stays exact, at a multiple of the cost
//!
//! A π-digit spigot runs once at startup purely to spin the CPU out of its
//! low-power state before any timing happens.
//!
//! ## Quick start
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     numbench::run()
//! }
//! ```
//!
//! Library use:
//!
//! ```
//! use numbench::{run_sweep, SweepConfig};
//!
//! let config = SweepConfig {
//!     start_iterations: 10,
//!     max_iterations: 1_000,
//!     step_multiplier: 10,
//! };
//! let outcome = run_sweep(&config)?;
//! assert_eq!(outcome.steps.len(), 2);
//! # Ok::<(), numbench::SweepError>(())
//! ```

// Re-export core types
pub use numbench_core::{
    digits_of_pi, run_sweep, run_sweep_with_state, warm_up, BenchState, KindEntry, KindValue,
    NumericKind, RunningTotals, StepReport, SweepConfig, SweepError, SweepOutcome, TimingSample,
    WarmupResult, HAS_CYCLE_COUNTER,
};

// Re-export reporting
pub use numbench_report::{
    build_report_meta, format_duration, format_human_output, generate_json_report, OutputFormat,
    ReportMeta, SweepReport, SystemInfo, TotalsReport, WarmupReport,
};

/// Run the numbench CLI harness.
///
/// Call this from your binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     numbench::run()
/// }
/// ```
pub use numbench_cli::run;
