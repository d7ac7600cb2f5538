//! Report Metadata Collection
//!
//! Git commit/branch via the git CLI, CPU model from `/proc/cpuinfo` on
//! Linux, and a UTC timestamp. Everything degrades gracefully: missing git
//! or a non-Linux host just leaves the corresponding fields empty.

use chrono::Utc;
use numbench_core::SweepConfig;

use crate::report::{ReportMeta, SystemInfo};

/// Build report metadata including system info and git details.
pub fn build_report_meta(config: &SweepConfig) -> ReportMeta {
    let git_commit = git_output(&["rev-parse", "HEAD"]);
    let git_branch = git_output(&["rev-parse", "--abbrev-ref", "HEAD"]);

    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: num_cpus(),
    };

    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        git_commit,
        git_branch,
        system,
        config: config.clone(),
    }
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = std::process::Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// CPU model name from /proc/cpuinfo (Linux only).
fn cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_echoes_the_sweep_config() {
        let config = SweepConfig {
            start_iterations: 10,
            max_iterations: 1000,
            step_multiplier: 10,
        };
        let meta = build_report_meta(&config);
        assert_eq!(meta.config.max_iterations, 1000);
        assert!(!meta.version.is_empty());
        assert!(meta.system.cpu_cores >= 1);
    }
}
