//! Report Data Structures

use chrono::{DateTime, Utc};
use numbench_core::{RunningTotals, StepReport, SweepConfig, WarmupResult};
use serde::Serialize;

/// Complete sweep report: metadata, warm-up, per-step tables, time split.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// Run metadata.
    pub meta: ReportMeta,
    /// Warm-up record, absent when the warm-up was skipped.
    pub warmup: Option<WarmupReport>,
    /// One report per sweep step, in execution order.
    pub steps: Vec<StepReport>,
    /// Cumulative time split.
    pub totals: TotalsReport,
}

/// Report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    /// numbench version.
    pub version: String,
    /// UTC time of report generation.
    pub timestamp: DateTime<Utc>,
    /// Current git commit, if available.
    pub git_commit: Option<String>,
    /// Current git branch, if available.
    pub git_branch: Option<String>,
    /// Host information.
    pub system: SystemInfo,
    /// Sweep bounds this report was produced with.
    pub config: SweepConfig,
}

/// Host information, degrading gracefully off Linux.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    /// Operating system name.
    pub os: String,
    /// CPU architecture.
    pub arch: String,
    /// CPU model name ("Unknown" when unavailable).
    pub cpu: String,
    /// Number of available cores.
    pub cpu_cores: u32,
}

/// The warm-up step's outcome.
#[derive(Debug, Clone, Serialize)]
pub struct WarmupReport {
    /// How many π digits were generated.
    pub digit_count: usize,
    /// Time spent inside the spigot, nanoseconds.
    pub elapsed_ns: u64,
}

impl From<&WarmupResult> for WarmupReport {
    fn from(result: &WarmupResult) -> Self {
        Self {
            digit_count: result.digits.len(),
            elapsed_ns: result.sample.as_nanos(),
        }
    }
}

/// Final time split of the whole sweep.
#[derive(Debug, Clone, Serialize)]
pub struct TotalsReport {
    /// Sum of all measured update loops, nanoseconds.
    pub time_in_math_ns: u64,
    /// Wall time of the entire sweep, nanoseconds.
    pub time_overall_ns: u64,
    /// Overall minus in-math, nanoseconds.
    pub overhead_ns: u64,
    /// Overhead as a fraction of overall wall time.
    pub overhead_ratio: f64,
}

impl From<&RunningTotals> for TotalsReport {
    fn from(totals: &RunningTotals) -> Self {
        Self {
            time_in_math_ns: u64::try_from(totals.time_in_math.as_nanos()).unwrap_or(u64::MAX),
            time_overall_ns: u64::try_from(totals.time_overall.as_nanos()).unwrap_or(u64::MAX),
            overhead_ns: u64::try_from(totals.overhead().as_nanos()).unwrap_or(u64::MAX),
            overhead_ratio: totals.overhead_ratio(),
        }
    }
}
