//! Aggregation over a finished output tree.
//!
//! A separate, later pass from the batch itself: it only sees what the
//! runner persisted. Every discovered table must parse cleanly before the
//! comparison chart is rendered, so a partially-written tree can never
//! produce a misleading (incomplete) comparison.

pub mod stats;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::models::CaseSummary;
use crate::plot::chart;
use crate::runner::naming;
use crate::table;

/// File name of the aggregate comparison chart, directly under the root.
pub const COMPARISON_CHART_FILE: &str = "comparison_chart.png";

/// Reads every persisted case table under an output root and produces
/// per-case summaries plus the comparison chart.
pub struct ResultAggregator {
    output_root: PathBuf,
}

impl ResultAggregator {
    /// Create an aggregator over the given output tree.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Recursively enumerate every case table under the root.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.output_root) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.output_root.clone());
                let source = e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
                });
                Error::Io { path, source }
            })?;
            if entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == table::TABLE_EXTENSION)
            {
                paths.push(entry.into_path());
            }
        }
        // Directory enumeration order is not contractual; sort for
        // deterministic reports.
        paths.sort();
        debug!("discovered {} table(s) under {}", paths.len(), self.output_root.display());
        Ok(paths)
    }

    /// Summarize every discovered table, sorted by case name. Fails with
    /// the offending path on the first malformed file.
    pub fn summarize(&self) -> Result<Vec<CaseSummary>> {
        let mut summaries = Vec::new();
        for path in self.discover()? {
            let values = table::read_dilation_column(&path)?;
            let s = stats::summarize(&values)
                .ok_or_else(|| Error::malformed(&path, "no data rows"))?;

            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            summaries.push(CaseSummary {
                case_name: naming::display_name(&stem),
                min: stats::round4(s.min),
                max: stats::round4(s.max),
                mean: stats::round4(s.mean),
                std_dev: stats::round4(s.std_dev),
            });
        }
        summaries.sort_by(|a, b| a.case_name.cmp(&b.case_name));
        Ok(summaries)
    }

    /// Summarize the tree and render the comparison chart next to it.
    pub fn run(&self) -> Result<Vec<CaseSummary>> {
        let summaries = self.summarize()?;
        if summaries.is_empty() {
            warn!(
                "no case tables found under {}, skipping comparison chart",
                self.output_root.display()
            );
            return Ok(summaries);
        }

        let chart_path = self.output_root.join(COMPARISON_CHART_FILE);
        chart::render_comparison_chart(&chart_path, &summaries)?;
        println!("Comparison chart saved to: {}", chart_path.display());
        Ok(summaries)
    }
}

/// Print the summary table in the console layout of the final report.
pub fn print_summary_table(summaries: &[CaseSummary]) {
    if summaries.is_empty() {
        println!("No case results to summarize.");
        return;
    }

    println!(
        "{:<40} {:>8} {:>8} {:>8} {:>8}",
        "Case", "Min", "Max", "Mean", "StdDev"
    );
    for s in summaries {
        println!(
            "{:<40} {:>8.4} {:>8.4} {:>8.4} {:>8.4}",
            s.case_name, s.min, s.max, s.mean, s.std_dev
        );
    }
}
