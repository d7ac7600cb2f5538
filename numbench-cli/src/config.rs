//! Configuration loading from numbench.toml
//!
//! Configuration can be specified in a `numbench.toml` file in the project
//! root. The file is discovered by walking up from the current directory;
//! CLI flags override anything found there.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// numbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NumbenchConfig {
    /// Sweep bounds.
    #[serde(default)]
    pub sweep: SweepSection,
    /// Warm-up settings.
    #[serde(default)]
    pub warmup: WarmupSection,
    /// Output settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// Sweep bounds as configured on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSection {
    /// Iteration count of the first step.
    #[serde(default = "default_start_iterations")]
    pub start_iterations: u64,
    /// Exclusive upper bound on the iteration count.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u64,
    /// Multiplier applied between steps.
    #[serde(default = "default_step_multiplier")]
    pub step_multiplier: u64,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            start_iterations: default_start_iterations(),
            max_iterations: default_max_iterations(),
            step_multiplier: default_step_multiplier(),
        }
    }
}

fn default_start_iterations() -> u64 {
    10
}
fn default_max_iterations() -> u64 {
    10_000_000_000
}
fn default_step_multiplier() -> u64 {
    10
}

/// Warm-up settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarmupSection {
    /// Whether to run the π spigot before the sweep.
    #[serde(default = "default_warmup_enabled")]
    pub enabled: bool,
    /// How many digits to generate.
    #[serde(default = "default_warmup_digits")]
    pub digits: usize,
}

impl Default for WarmupSection {
    fn default() -> Self {
        Self {
            enabled: default_warmup_enabled(),
            digits: default_warmup_digits(),
        }
    }
}

fn default_warmup_enabled() -> bool {
    true
}
fn default_warmup_digits() -> usize {
    10_000
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Default output format: "human" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl NumbenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the
    /// current directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("numbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string.
    pub fn default_toml() -> String {
        r#"# numbench Configuration

[sweep]
# Iteration count of the first step
start_iterations = 10
# Exclusive upper bound on the iteration count
max_iterations = 10000000000
# Multiplier applied between steps
step_multiplier = 10

[warmup]
# Run the pi spigot before the sweep to defeat CPU frequency scaling
enabled = true
# How many digits to generate
digits = 10000

[output]
# Default output format: human or json
format = "human"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = NumbenchConfig::default();
        assert_eq!(config.sweep.start_iterations, 10);
        assert_eq!(config.sweep.max_iterations, 10_000_000_000);
        assert_eq!(config.sweep.step_multiplier, 10);
        assert!(config.warmup.enabled);
        assert_eq!(config.warmup.digits, 10_000);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
            [sweep]
            max_iterations = 1000

            [warmup]
            enabled = false
        "#;

        let config: NumbenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sweep.max_iterations, 1000);
        assert_eq!(config.sweep.start_iterations, 10);
        assert!(!config.warmup.enabled);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn default_toml_parses() {
        let config: NumbenchConfig = toml::from_str(&NumbenchConfig::default_toml()).unwrap();
        assert_eq!(config.sweep.max_iterations, 10_000_000_000);
        assert!(config.warmup.enabled);
    }

    #[test]
    fn load_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbench.toml");
        std::fs::write(&path, "[warmup]\ndigits = 50\n").unwrap();

        let config = NumbenchConfig::load(&path).unwrap();
        assert_eq!(config.warmup.digits, 50);
    }
}
