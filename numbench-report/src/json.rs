//! JSON Output

use crate::report::SweepReport;

/// Generate a prettified JSON report.
///
/// Serializes the sweep report into machine-readable JSON format.
pub fn generate_json_report(report: &SweepReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_report_meta, TotalsReport};
    use numbench_core::{run_sweep, SweepConfig};

    #[test]
    fn json_report_carries_steps_and_totals() {
        let config = SweepConfig {
            start_iterations: 10,
            max_iterations: 100,
            step_multiplier: 10,
        };
        let outcome = run_sweep(&config).unwrap();
        let report = SweepReport {
            meta: build_report_meta(&config),
            warmup: None,
            steps: outcome.steps,
            totals: TotalsReport::from(&outcome.totals),
        };

        let json = generate_json_report(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["steps"][0]["iterations"], 10);
        assert_eq!(parsed["steps"][0]["entries"].as_array().unwrap().len(), 5);
        assert!(parsed["totals"]["time_overall_ns"].as_u64().is_some());
        assert_eq!(parsed["meta"]["config"]["step_multiplier"], 10);
    }
}
