//! Batch execution over the configured case list.
//!
//! Cases run strictly in order, one at a time. Each case is wrapped in an
//! outcome instead of aborting the loop, so a malformed case leaves the
//! rest of the batch intact and the final report shows every status.

use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use crate::models::{BatchReport, CaseDescriptor, CaseOutcome};
use crate::physics::PhysicalConstants;
use crate::runner::CaseRunner;

/// Drives the case runner over an ordered case list.
pub struct BatchDriver {
    cases: Vec<CaseDescriptor>,
    consts: PhysicalConstants,
    figure_size: (u32, u32),
}

impl BatchDriver {
    /// Create a driver over the given cases.
    pub fn new(
        cases: Vec<CaseDescriptor>,
        consts: PhysicalConstants,
        figure_size: (u32, u32),
    ) -> Self {
        Self {
            cases,
            consts,
            figure_size,
        }
    }

    /// Run every case into `output_root`, collecting one outcome per case.
    pub fn run(&self, output_root: &Path, show_progress: bool) -> BatchReport {
        let started = Instant::now();
        let bar = if show_progress {
            let bar = ProgressBar::new(self.cases.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        let runner = CaseRunner::new(self.consts, self.figure_size);
        let mut outcomes = Vec::with_capacity(self.cases.len());

        for case in &self.cases {
            bar.set_message(case.label.clone());
            info!("running case '{}'", case.label);

            let outcome = runner.run(case, output_root);
            if let Err(e) = &outcome {
                error!("case '{}' failed: {e}", case.label);
            }
            outcomes.push(CaseOutcome {
                label: case.label.clone(),
                outcome,
            });
            bar.inc(1);
        }
        bar.finish_and_clear();

        BatchReport {
            outcomes,
            duration_seconds: started.elapsed().as_secs_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn case(label: &str, mass_solar: f64, max_distance_rs: f64) -> CaseDescriptor {
        CaseDescriptor {
            label: label.to_string(),
            mass_solar,
            max_distance_rs,
            plot_scale: 1.0,
        }
    }

    #[test]
    fn test_failed_case_does_not_stop_the_batch() {
        let dir = TempDir::new().unwrap();
        let driver = BatchDriver::new(
            vec![
                case("First", 1.4, 5.0),
                case("Broken", 10.0, 1.0),
                case("Last", 5.0, 10.0),
            ],
            PhysicalConstants::default(),
            (400, 200),
        );

        let report = driver.run(dir.path(), false);

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(matches!(
            report.outcomes[1].outcome,
            Err(Error::InvalidCase { .. })
        ));
        assert!(dir.path().join("first/first.csv").is_file());
        assert!(dir.path().join("last/last.csv").is_file());
        assert!(!dir.path().join("broken").exists());
    }

    #[test]
    fn test_outcomes_keep_execution_order() {
        let dir = TempDir::new().unwrap();
        let driver = BatchDriver::new(
            vec![case("B Case", 2.0, 3.0), case("A Case", 3.0, 4.0)],
            PhysicalConstants::default(),
            (400, 200),
        );

        let report = driver.run(dir.path(), false);
        let labels: Vec<&str> = report.outcomes.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["B Case", "A Case"]);
        assert!(report.all_succeeded());
    }
}
