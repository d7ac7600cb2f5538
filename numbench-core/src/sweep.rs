//! Sweep Orchestration
//!
//! Drives the five accumulation loops through an exponentially increasing
//! sequence of iteration counts, collecting one report per step and keeping
//! a running split of "time in math" versus total wall time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::accum::{BenchState, KindValue, NumericKind, STEP_DECIMAL};
use crate::error::SweepError;
use crate::measure::{Timer, TimingSample};

/// Bounds of the iteration sweep.
///
/// Starting from `start_iterations`, each step multiplies the count by
/// `step_multiplier` while it stays strictly below `max_iterations`. The
/// defaults (10 to 10^10, ×10) yield nine steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Iteration count of the first step.
    pub start_iterations: u64,
    /// Exclusive upper bound on the iteration count.
    pub max_iterations: u64,
    /// Multiplier applied between steps. Must be at least 2.
    pub step_multiplier: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_iterations: 10,
            max_iterations: 10_000_000_000,
            step_multiplier: 10,
        }
    }
}

impl SweepConfig {
    /// Reject configurations whose sweep would never terminate.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.start_iterations == 0 {
            return Err(SweepError::InvalidConfig(
                "start_iterations must be positive".to_string(),
            ));
        }
        if self.step_multiplier < 2 {
            return Err(SweepError::InvalidConfig(format!(
                "step_multiplier must be at least 2, got {}",
                self.step_multiplier
            )));
        }
        Ok(())
    }
}

/// One kind's outcome within a single sweep step.
#[derive(Debug, Clone, Serialize)]
pub struct KindEntry {
    /// Which representation this row describes.
    pub kind: NumericKind,
    /// Accumulated value after this step.
    pub value: KindValue,
    /// Baseline minus the accumulated value, as an exact decimal. `None`
    /// for the integer kinds and for values a decimal cannot represent.
    pub delta: Option<Decimal>,
    /// Elapsed time of the update loop, nanoseconds.
    pub elapsed_ns: u64,
    /// Elapsed cycles of the update loop (0 without a cycle counter).
    pub cycles: u64,
    /// Relative speed: decimal elapsed time over this kind's elapsed time.
    /// The decimal row reads 1.0; larger is faster.
    pub speed_ratio: f64,
}

/// Report for one iteration count.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// Iteration count of this step.
    pub iterations: u64,
    /// Reference value `iterations * 0.3` as an exact decimal. Because the
    /// accumulators persist across steps while the baseline is recomputed
    /// fresh, the delta column is only a true error measure on the first
    /// step (inherited quirk, kept on purpose).
    pub baseline: Decimal,
    /// One row per numeric kind, in [`NumericKind::ALL`] order.
    pub entries: Vec<KindEntry>,
}

/// Cumulative time split for a whole sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningTotals {
    /// Sum of every measured update loop across all kinds and steps.
    pub time_in_math: Duration,
    /// Wall time of the entire sweep loop.
    pub time_overall: Duration,
}

impl RunningTotals {
    /// Orchestration and reporting cost: overall minus in-math.
    pub fn overhead(&self) -> Duration {
        self.time_overall.saturating_sub(self.time_in_math)
    }

    /// Overhead as a fraction of overall wall time, 0.0 for an empty sweep.
    pub fn overhead_ratio(&self) -> f64 {
        let overall = self.time_overall.as_secs_f64();
        if overall == 0.0 {
            0.0
        } else {
            self.overhead().as_secs_f64() / overall
        }
    }
}

/// Outcome of a full sweep: ordered per-step reports plus the time split.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    /// One report per sweep step, in execution order.
    pub steps: Vec<StepReport>,
    /// Cumulative time split.
    pub totals: RunningTotals,
}

/// Run a full sweep against a fresh [`BenchState`].
pub fn run_sweep(config: &SweepConfig) -> Result<SweepOutcome, SweepError> {
    let mut state = BenchState::new();
    run_sweep_with_state(config, &mut state)
}

/// Run a full sweep against caller-owned accumulators.
///
/// The state is not reset: values carry across steps within this sweep, and
/// across sweeps if the caller reuses the state. A
/// [`SweepError::PrecisionOverflow`] aborts the sweep at the step where the
/// decimal accumulator overflowed, matching the reference behavior of
/// treating it as fatal.
pub fn run_sweep_with_state(
    config: &SweepConfig,
    state: &mut BenchState,
) -> Result<SweepOutcome, SweepError> {
    config.validate()?;

    let mut totals = RunningTotals::default();
    let mut steps = Vec::new();

    let wall = Timer::start();
    let mut iterations = config.start_iterations;
    while iterations < config.max_iterations {
        steps.push(run_step(state, iterations, &mut totals)?);
        iterations = iterations.saturating_mul(config.step_multiplier);
    }
    totals.time_overall = wall.stop().elapsed;

    debug!(
        steps = steps.len(),
        in_math_ns = totals.time_in_math.as_nanos() as u64,
        overall_ns = totals.time_overall.as_nanos() as u64,
        "sweep finished"
    );

    Ok(SweepOutcome { steps, totals })
}

/// Run all five kinds at one iteration count and assemble the step report.
fn run_step(
    state: &mut BenchState,
    iterations: u64,
    totals: &mut RunningTotals,
) -> Result<StepReport, SweepError> {
    debug!(iterations, "sweep step");

    let mut samples: Vec<(NumericKind, TimingSample)> = Vec::with_capacity(NumericKind::ALL.len());
    for kind in NumericKind::ALL {
        let sample = state.run(kind, iterations)?;
        totals.time_in_math += sample.elapsed;
        samples.push((kind, sample));
    }

    let baseline = Decimal::from(iterations) * STEP_DECIMAL;
    let decimal_ns = samples
        .iter()
        .find(|(kind, _)| *kind == NumericKind::Decimal)
        .map(|(_, sample)| sample.as_nanos())
        .unwrap_or(0);

    let entries = samples
        .into_iter()
        .map(|(kind, sample)| {
            let delta = if kind.is_fractional() {
                state.value_as_decimal(kind).map(|value| baseline - value)
            } else {
                None
            };
            let elapsed_ns = sample.as_nanos();
            KindEntry {
                kind,
                value: state.value(kind),
                delta,
                elapsed_ns,
                cycles: sample.cycles,
                speed_ratio: decimal_ns as f64 / elapsed_ns.max(1) as f64,
            }
        })
        .collect();

    Ok(StepReport {
        iterations,
        baseline,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn small_config(max_iterations: u64) -> SweepConfig {
        SweepConfig {
            start_iterations: 10,
            max_iterations,
            step_multiplier: 10,
        }
    }

    #[test]
    fn three_steps_below_ten_thousand() {
        let outcome = run_sweep(&small_config(10_000)).unwrap();
        let counts: Vec<u64> = outcome.steps.iter().map(|s| s.iterations).collect();
        assert_eq!(counts, vec![10, 100, 1000]);
    }

    #[test]
    fn overall_time_covers_time_in_math() {
        let outcome = run_sweep(&small_config(10_000)).unwrap();
        assert!(outcome.totals.time_overall >= outcome.totals.time_in_math);
        assert!(outcome.totals.overhead_ratio() >= 0.0);
        assert!(outcome.totals.overhead_ratio() <= 1.0);
    }

    #[test]
    fn baseline_is_exact_per_step() {
        let outcome = run_sweep(&small_config(1_000)).unwrap();
        assert_eq!(outcome.steps[0].baseline, dec!(3.0));
        assert_eq!(outcome.steps[1].baseline, dec!(30.0));
    }

    #[test]
    fn accumulators_persist_across_steps() {
        // After steps at 10 and 100 the decimal accumulator has seen 110
        // updates, so the second step's delta is 30 - 33 = -3.
        let outcome = run_sweep(&small_config(1_000)).unwrap();
        let last = &outcome.steps[1];
        let decimal_row = last
            .entries
            .iter()
            .find(|e| e.kind == NumericKind::Decimal)
            .unwrap();
        assert_eq!(decimal_row.value, KindValue::Decimal(dec!(33.0)));
        assert_eq!(decimal_row.delta, Some(dec!(-3.0)));
    }

    #[test]
    fn first_step_delta_is_zero_for_decimal() {
        let outcome = run_sweep(&small_config(100)).unwrap();
        let row = outcome.steps[0]
            .entries
            .iter()
            .find(|e| e.kind == NumericKind::Decimal)
            .unwrap();
        assert_eq!(row.delta, Some(Decimal::ZERO));
    }

    #[test]
    fn integer_rows_have_no_delta() {
        let outcome = run_sweep(&small_config(100)).unwrap();
        for entry in &outcome.steps[0].entries {
            match entry.kind {
                NumericKind::U32 | NumericKind::U64 => assert!(entry.delta.is_none()),
                _ => assert!(entry.delta.is_some()),
            }
        }
    }

    #[test]
    fn decimal_row_speed_ratio_is_unity() {
        let outcome = run_sweep(&small_config(100)).unwrap();
        let row = outcome.steps[0]
            .entries
            .iter()
            .find(|e| e.kind == NumericKind::Decimal)
            .unwrap();
        assert!((row.speed_ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_start_is_rejected() {
        let config = SweepConfig {
            start_iterations: 0,
            ..SweepConfig::default()
        };
        assert!(matches!(
            run_sweep(&config),
            Err(SweepError::InvalidConfig(_))
        ));
    }

    #[test]
    fn unit_multiplier_is_rejected() {
        let config = SweepConfig {
            step_multiplier: 1,
            ..SweepConfig::default()
        };
        assert!(matches!(
            run_sweep(&config),
            Err(SweepError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_sweep_when_start_reaches_max() {
        let config = SweepConfig {
            start_iterations: 10,
            max_iterations: 10,
            step_multiplier: 10,
        };
        let outcome = run_sweep(&config).unwrap();
        assert!(outcome.steps.is_empty());
    }
}
