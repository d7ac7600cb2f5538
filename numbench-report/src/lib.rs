#![warn(missing_docs)]
//! numbench Report - Reporting
//!
//! Report data structures plus the two output renderers:
//! - Human-readable terminal tables
//! - JSON (machine-readable)

mod human;
mod json;
mod meta;
mod report;

pub use human::{format_duration, format_human_output};
pub use json::generate_json_report;
pub use meta::build_report_meta;
pub use report::{ReportMeta, SweepReport, SystemInfo, TotalsReport, WarmupReport};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
