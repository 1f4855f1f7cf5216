//! Configuration file handling.
//!
//! The case list is data in a `schwarzsim.toml` file, not logic baked into
//! the binary. `--init-config` writes the default file with five reference
//! cases; `[physics]` overrides the constants and `[output]` the tree
//! location and figure dimensions.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::CaseDescriptor;
use crate::physics::PhysicalConstants;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "schwarzsim.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Physical constants used by every formula.
    #[serde(default)]
    pub physics: PhysicalConstants,

    /// Ordered case list executed by the batch driver.
    #[serde(default)]
    pub cases: Vec<CaseDescriptor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            physics: PhysicalConstants::default(),
            cases: reference_cases(),
        }
    }
}

/// Output tree and figure settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for case outputs and aggregate charts.
    #[serde(default = "default_output_root")]
    pub root: String,

    /// Width of the per-case figure in pixels.
    #[serde(default = "default_figure_width")]
    pub figure_width: u32,

    /// Height of the per-case figure in pixels.
    #[serde(default = "default_figure_height")]
    pub figure_height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
            figure_width: default_figure_width(),
            figure_height: default_figure_height(),
        }
    }
}

impl OutputConfig {
    /// Figure dimensions as the (width, height) pair the renderer takes.
    pub fn figure_size(&self) -> (u32, u32) {
        (self.figure_width, self.figure_height)
    }
}

fn default_output_root() -> String {
    "results".to_string()
}

fn default_figure_width() -> u32 {
    1400
}

fn default_figure_height() -> u32 {
    500
}

/// The five reference cases written by `--init-config`.
fn reference_cases() -> Vec<CaseDescriptor> {
    vec![
        CaseDescriptor {
            label: "Case 1 \u{2013} Neutron Star".to_string(),
            mass_solar: 1.4,
            max_distance_rs: 5.0,
            plot_scale: 1.0,
        },
        CaseDescriptor {
            label: "Case 2 \u{2013} Stellar Black Hole".to_string(),
            mass_solar: 5.0,
            max_distance_rs: 10.0,
            plot_scale: 1.0,
        },
        CaseDescriptor {
            label: "Case 3 \u{2013} Supermassive Black Hole".to_string(),
            mass_solar: 1_000_000.0,
            max_distance_rs: 100.0,
            plot_scale: 1.5,
        },
        CaseDescriptor {
            label: "Case 4 \u{2013} Near the Horizon".to_string(),
            mass_solar: 10.0,
            max_distance_rs: 1.011,
            plot_scale: 0.8,
        },
        CaseDescriptor {
            label: "Case 5 \u{2013} Subcritical Mass (Planet)".to_string(),
            mass_solar: 0.001,
            max_distance_rs: 5.0,
            plot_scale: 1.0,
        },
    ]
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
    /// can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings; only
    /// explicitly provided values override.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output_root) = args.output_root {
            self.output.root = output_root.to_string_lossy().into_owned();
        }
    }

    /// Generate the default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.root, "results");
        assert_eq!(config.cases.len(), 5);
        assert_eq!(config.physics.speed_of_light, 3.0e8);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[output]
root = "custom_results"
figure_width = 800

[physics]
speed_of_light = 2.99792458e8

[[cases]]
label = "Only Case"
mass_solar = 3.0
max_distance_rs = 7.0
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.output.root, "custom_results");
        assert_eq!(config.output.figure_width, 800);
        assert_eq!(config.output.figure_height, 500);
        assert_eq!(config.physics.speed_of_light, 2.99792458e8);
        assert_eq!(config.physics.gravitational_constant, 6.674_30e-11);
        assert_eq!(config.cases.len(), 1);
        assert_eq!(config.cases[0].label, "Only Case");
        assert_eq!(config.cases[0].plot_scale, 1.0);
    }

    #[test]
    fn test_missing_cases_section_is_empty() {
        let config: Config = toml::from_str("[output]\nroot = \"r\"\n").unwrap();
        assert!(config.cases.is_empty());
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("[physics]"));
        assert!(toml_str.contains("[[cases]]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.cases.len(), 5);
    }
}
