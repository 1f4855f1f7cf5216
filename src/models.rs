//! Data models for the simulation pipeline.
//!
//! This module contains the data structures passed between the batch
//! driver, the case runner, the aggregator, and the report generator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One parameterized scenario: mass, distance range, plot scale, label.
///
/// Descriptors come from the `[[cases]]` array of the config file (or from
/// the ad-hoc CLI flags) and are consumed once by the case runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDescriptor {
    /// Human-readable case label; also the source of the output directory name.
    pub label: String,
    /// Mass in solar masses.
    pub mass_solar: f64,
    /// Maximum analyzed distance in Schwarzschild radii. Must exceed the
    /// 1.01 Rs sampling floor.
    pub max_distance_rs: f64,
    /// Spatial scale of the curvature panel.
    #[serde(default = "default_plot_scale")]
    pub plot_scale: f64,
}

fn default_plot_scale() -> f64 {
    1.0
}

/// Derived arrays for a single executed case.
///
/// `distances_rs` is strictly increasing with a first element above 1, so
/// every dilation factor is a real number in `[0, 1)`. The value lives only
/// for the duration of one case; the CSV on disk is the surviving form.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Schwarzschild radius for the case mass, in meters.
    pub schwarzschild_radius_m: f64,
    /// Sampled distances in multiples of the Schwarzschild radius.
    pub distances_rs: Vec<f64>,
    /// The same distances in meters.
    pub distances_m: Vec<f64>,
    /// Time dilation factor per sampled distance.
    pub dilation_factors: Vec<f64>,
}

impl SimulationResult {
    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.distances_m.len()
    }

    /// True when the result carries no samples.
    #[allow(dead_code)] // Pairs with len for completeness
    pub fn is_empty(&self) -> bool {
        self.distances_m.is_empty()
    }
}

/// One row of the persisted case table. The column names are the stable
/// on-disk schema shared with the aggregation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DilationRow {
    #[serde(rename = "Distancia_RS")]
    pub distancia_rs: f64,
    #[serde(rename = "Distancia_metros")]
    pub distancia_metros: f64,
    #[serde(rename = "Fator_Dilatacao")]
    pub fator_dilatacao: f64,
}

/// Summary statistics of one discovered result file, rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSummary {
    /// Display name derived from the file name.
    pub case_name: String,
    /// Smallest dilation factor in the file.
    pub min: f64,
    /// Largest dilation factor in the file.
    pub max: f64,
    /// Arithmetic mean of the dilation factors.
    pub mean: f64,
    /// Sample standard deviation (N-1 denominator).
    pub std_dev: f64,
}

/// Result-or-error outcome of one batch case. Failures are collected, not
/// propagated, so one broken case cannot abort the remaining batch.
#[derive(Debug)]
pub struct CaseOutcome {
    /// Label of the case this outcome belongs to.
    pub label: String,
    /// The case result, or the error that stopped it.
    pub outcome: Result<SimulationResult, Error>,
}

impl CaseOutcome {
    /// True when the case completed and its files were written.
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Status of a whole batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-case outcomes in execution order.
    pub outcomes: Vec<CaseOutcome>,
    /// Wall-clock duration of the batch in seconds.
    pub duration_seconds: f64,
}

impl BatchReport {
    /// Number of cases that completed.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    /// Number of cases that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// True when every case in the batch completed.
    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// The aggregate summary handed to the report generator.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    /// When the summary was generated.
    pub generated_at: DateTime<Utc>,
    /// Output tree the summaries were read from.
    pub output_root: String,
    /// Number of summarized cases.
    pub case_count: usize,
    /// Per-case statistics, sorted by case name.
    pub summaries: Vec<CaseSummary>,
}

impl AggregateReport {
    /// Build a report over the given summaries.
    pub fn new(output_root: impl Into<String>, summaries: Vec<CaseSummary>) -> Self {
        Self {
            generated_at: Utc::now(),
            output_root: output_root.into(),
            case_count: summaries.len(),
            summaries,
        }
    }
}
