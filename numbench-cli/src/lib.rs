#![warn(missing_docs)]
//! numbench CLI Library
//!
//! Wires the benchmark engine to the terminal: argument parsing, config
//! discovery and layering, tracing setup, warm-up, sweep, and output
//! rendering. Use [`run`] from the binary's main function.

mod config;
pub use config::*;

use clap::Parser;
use numbench_core::{run_sweep, warm_up, SweepConfig};
use numbench_report::{
    build_report_meta, format_duration, format_human_output, generate_json_report, OutputFormat,
    SweepReport, TotalsReport, WarmupReport,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// numbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "numbench")]
#[command(
    author,
    version,
    about = "Relative speed and accuracy of numeric representations"
)]
pub struct Cli {
    /// Iteration count of the first sweep step
    #[arg(long)]
    pub start_iterations: Option<u64>,

    /// Exclusive upper bound on the iteration count
    #[arg(long)]
    pub max_iterations: Option<u64>,

    /// Multiplier applied to the iteration count between steps
    #[arg(long)]
    pub step_multiplier: Option<u64>,

    /// Number of pi digits for the warm-up spigot
    #[arg(long)]
    pub warmup_digits: Option<usize>,

    /// Skip the warm-up entirely
    #[arg(long)]
    pub no_warmup: bool,

    /// Output format: human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the numbench CLI. This is the main entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the numbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    let filter = if cli.verbose {
        "numbench=debug"
    } else {
        "numbench=info"
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    // Discover numbench.toml configuration (CLI flags override)
    let config = NumbenchConfig::discover().unwrap_or_default();
    let sweep_config = resolve_sweep_config(&cli, &config);

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    // Warm-up runs before any timed work so the CPU leaves its low-power
    // state; the digits themselves are discarded.
    let warmup = if cli.no_warmup || !config.warmup.enabled {
        None
    } else {
        let digits = cli.warmup_digits.unwrap_or(config.warmup.digits);
        let result = warm_up(digits);
        info!(
            digits,
            elapsed = %format_duration(result.sample.as_nanos() as f64),
            "warm-up finished"
        );
        Some(WarmupReport::from(&result))
    };

    let outcome = run_sweep(&sweep_config)?;

    let report = SweepReport {
        meta: build_report_meta(&sweep_config),
        warmup,
        steps: outcome.steps,
        totals: TotalsReport::from(&outcome.totals),
    };

    let rendered = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };

    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(rendered.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

/// Build the sweep config by layering: defaults → numbench.toml → CLI flags.
fn resolve_sweep_config(cli: &Cli, config: &NumbenchConfig) -> SweepConfig {
    SweepConfig {
        start_iterations: cli.start_iterations.unwrap_or(config.sweep.start_iterations),
        max_iterations: cli.max_iterations.unwrap_or(config.sweep.max_iterations),
        step_multiplier: cli.step_multiplier.unwrap_or(config.sweep.step_multiplier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_from(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("numbench").chain(args.iter().copied()))
    }

    #[test]
    fn cli_flags_override_config_file() {
        let config = NumbenchConfig::default();
        let cli = cli_from(&["--max-iterations", "1000", "--step-multiplier", "2"]);
        let sweep = resolve_sweep_config(&cli, &config);
        assert_eq!(sweep.max_iterations, 1000);
        assert_eq!(sweep.step_multiplier, 2);
        assert_eq!(sweep.start_iterations, 10);
    }

    #[test]
    fn config_file_values_apply_without_flags() {
        let config: NumbenchConfig =
            toml::from_str("[sweep]\nstart_iterations = 5\nmax_iterations = 500\n").unwrap();
        let cli = cli_from(&[]);
        let sweep = resolve_sweep_config(&cli, &config);
        assert_eq!(sweep.start_iterations, 5);
        assert_eq!(sweep.max_iterations, 500);
        assert_eq!(sweep.step_multiplier, 10);
    }

    #[test]
    fn end_to_end_writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let cli = cli_from(&[
            "--max-iterations",
            "100",
            "--warmup-digits",
            "50",
            "--format",
            "json",
            "--output",
            path.to_str().unwrap(),
        ]);

        run_with_cli(cli).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["warmup"]["digit_count"], 50);
        assert_eq!(parsed["steps"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let cli = cli_from(&["--format", "yaml", "--max-iterations", "100"]);
        assert!(run_with_cli(cli).is_err());
    }
}
