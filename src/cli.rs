//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap, including
//! validation and default values.

use clap::Parser;
use std::path::PathBuf;

use crate::models::CaseDescriptor;

/// schwarzsim - batch Schwarzschild black hole simulator
///
/// Runs a configured list of cases (mass, distance range, plot scale),
/// writing one figure and one CSV table per case, then summarizes the
/// output tree into comparison statistics and a chart.
///
/// Examples:
///   schwarzsim --init-config
///   schwarzsim
///   schwarzsim --config my_cases.toml --output-root out
///   schwarzsim --mass 5 --max-distance 10 --label "Stellar Black Hole"
///   schwarzsim --summarize --output-root out --report summary.md
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, looks for schwarzsim.toml in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory for case results and charts
    ///
    /// Overrides the [output] root from the config file.
    #[arg(short, long, value_name = "DIR", env = "SCHWARZSIM_OUTPUT")]
    pub output_root: Option<PathBuf>,

    /// Summarize an existing output tree instead of running the batch
    #[arg(long)]
    pub summarize: bool,

    /// List the configured cases without writing any output
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default schwarzsim.toml configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Render a Schwarzschild radius vs mass overview chart
    #[arg(long)]
    pub overview_chart: bool,

    /// Render the simplified light-deflection curve
    ///
    /// Uses the ad-hoc --mass when given, otherwise the first configured case.
    #[arg(long)]
    pub deflection_chart: bool,

    /// Write the aggregate summary to FILE (requires --summarize)
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Summary report format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: ReportFormat,

    /// Ad-hoc case: mass in solar masses (skips the config case list)
    #[arg(long, value_name = "MSUN")]
    pub mass: Option<f64>,

    /// Ad-hoc case: maximum analyzed distance in Schwarzschild radii
    #[arg(long, value_name = "RS")]
    pub max_distance: Option<f64>,

    /// Ad-hoc case: spatial scale of the curvature panel
    #[arg(long, default_value = "1.0", value_name = "SCALE")]
    pub scale: f64,

    /// Ad-hoc case: label (also names the output directory)
    #[arg(long, default_value = "Ad hoc case", value_name = "LABEL")]
    pub label: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the aggregate summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.mass.is_some() != self.max_distance.is_some() {
            return Err(
                "Ad-hoc cases need both --mass and --max-distance".to_string(),
            );
        }

        if self.scale <= 0.0 {
            return Err("Scale must be positive".to_string());
        }

        if self.report.is_some() && !self.summarize {
            return Err("--report requires --summarize".to_string());
        }

        if self.summarize && self.mass.is_some() {
            return Err("--summarize does not run cases; drop the ad-hoc flags".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// The single case described by the ad-hoc flags, if both were given.
    pub fn adhoc_case(&self) -> Option<CaseDescriptor> {
        match (self.mass, self.max_distance) {
            (Some(mass_solar), Some(max_distance_rs)) => Some(CaseDescriptor {
                label: self.label.clone(),
                mass_solar,
                max_distance_rs,
                plot_scale: self.scale,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            config: None,
            output_root: None,
            summarize: false,
            dry_run: false,
            init_config: false,
            overview_chart: false,
            deflection_chart: false,
            report: None,
            format: ReportFormat::Markdown,
            mass: None,
            max_distance: None,
            scale: 1.0,
            label: "Ad hoc case".to_string(),
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_validation_conflicting_verbosity() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_partial_adhoc_case() {
        let mut args = make_args();
        args.mass = Some(5.0);
        assert!(args.validate().is_err());

        args.max_distance = Some(10.0);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_report_requires_summarize() {
        let mut args = make_args();
        args.report = Some(PathBuf::from("summary.md"));
        assert!(args.validate().is_err());

        args.summarize = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_adhoc_case_carries_flags() {
        let mut args = make_args();
        assert!(args.adhoc_case().is_none());

        args.mass = Some(5.0);
        args.max_distance = Some(10.0);
        args.scale = 0.8;
        args.label = "Probe".to_string();

        let case = args.adhoc_case().unwrap();
        assert_eq!(case.label, "Probe");
        assert_eq!(case.mass_solar, 5.0);
        assert_eq!(case.max_distance_rs, 10.0);
        assert_eq!(case.plot_scale, 0.8);
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
