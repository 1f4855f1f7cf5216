//! Single-case execution: derive arrays, render the figure, persist the table.

pub mod grid;
pub mod naming;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{CaseDescriptor, SimulationResult};
use crate::physics::{self, PhysicalConstants};
use crate::plot::figure;
use crate::table;

/// Number of sampled distances per case.
pub const DILATION_SAMPLES: usize = 500;

/// Cells per side of the curvature visualization grid.
pub const CURVATURE_CELLS: usize = 100;

/// Half-extent of the curvature grid before the case scale is applied.
pub const CURVATURE_EXTENT: f64 = 10.0;

/// Sampling floor in Schwarzschild radii. Distances start at 1.01 Rs so
/// the dilation factor stays real over the whole range.
pub const MIN_DISTANCE_RS: f64 = 1.01;

/// Extension of the rendered case figure.
pub const IMAGE_EXTENSION: &str = "png";

/// Runs one case end to end and writes its outputs under `output_root`.
pub struct CaseRunner {
    consts: PhysicalConstants,
    figure_size: (u32, u32),
}

impl CaseRunner {
    /// Create a runner with the given constants and figure dimensions.
    pub fn new(consts: PhysicalConstants, figure_size: (u32, u32)) -> Self {
        Self {
            consts,
            figure_size,
        }
    }

    /// Validate the case, compute the derived arrays, render the figure,
    /// and persist the table. Nothing is written for an invalid case.
    pub fn run(&self, case: &CaseDescriptor, output_root: &Path) -> Result<SimulationResult> {
        self.validate(case)?;

        let mass_kg = case.mass_solar * self.consts.solar_mass_kg;
        let rs = physics::schwarzschild_radius(mass_kg, &self.consts);

        println!("Mass: {:.1} solar masses", case.mass_solar);
        println!("Schwarzschild radius: {rs:.2e} m");
        println!("Analyzed distance: {:.2} Rs", case.max_distance_rs);

        let distances_m = grid::linspace(
            MIN_DISTANCE_RS * rs,
            case.max_distance_rs * rs,
            DILATION_SAMPLES,
        );
        let mut dilation_factors = Vec::with_capacity(distances_m.len());
        for &r in &distances_m {
            // Inputs exceed rs by construction; a domain error here is a
            // case-construction bug and must propagate.
            dilation_factors.push(physics::time_dilation_factor(r, rs)?);
        }
        let distances_rs: Vec<f64> = distances_m.iter().map(|&r| r / rs).collect();

        let axis = grid::linspace(
            -CURVATURE_EXTENT * case.plot_scale,
            CURVATURE_EXTENT * case.plot_scale,
            CURVATURE_CELLS,
        );

        let result = SimulationResult {
            schwarzschild_radius_m: rs,
            distances_rs,
            distances_m,
            dilation_factors,
        };

        let (image_path, table_path) = self.prepare_output_paths(case, output_root)?;
        figure::render_case_figure(&image_path, &case.label, &axis, &result, self.figure_size)?;
        table::write_case_table(&table_path, &result)?;

        println!("Figure saved to: {}", image_path.display());
        println!("Table saved to: {}", table_path.display());

        Ok(result)
    }

    fn validate(&self, case: &CaseDescriptor) -> Result<()> {
        if case.mass_solar <= 0.0 {
            return Err(Error::invalid_case(
                case.label.clone(),
                format!("mass must be positive, got {} solar masses", case.mass_solar),
            ));
        }
        if case.max_distance_rs <= MIN_DISTANCE_RS {
            return Err(Error::invalid_case(
                case.label.clone(),
                format!(
                    "max distance {} Rs does not exceed the {MIN_DISTANCE_RS} Rs sampling floor",
                    case.max_distance_rs
                ),
            ));
        }
        if naming::case_slug(&case.label).is_empty() {
            return Err(Error::invalid_case(
                case.label.clone(),
                "label produces an empty directory name",
            ));
        }
        Ok(())
    }

    /// Derive the case directory from the label and create it (idempotent).
    fn prepare_output_paths(
        &self,
        case: &CaseDescriptor,
        output_root: &Path,
    ) -> Result<(PathBuf, PathBuf)> {
        let slug = naming::case_slug(&case.label);
        let case_dir = output_root.join(&slug);
        fs::create_dir_all(&case_dir).map_err(|source| Error::Io {
            path: case_dir.clone(),
            source,
        })?;
        debug!("case '{}' writes to {}", case.label, case_dir.display());

        let image_path = case_dir.join(format!("{slug}.{}", IMAGE_EXTENSION));
        let table_path = case_dir.join(format!("{slug}.{}", table::TABLE_EXTENSION));
        Ok((image_path, table_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn runner() -> CaseRunner {
        CaseRunner::new(PhysicalConstants::default(), (400, 200))
    }

    fn stellar_case() -> CaseDescriptor {
        CaseDescriptor {
            label: "Stellar Black Hole".to_string(),
            mass_solar: 5.0,
            max_distance_rs: 10.0,
            plot_scale: 1.0,
        }
    }

    #[test]
    fn test_run_writes_figure_and_table() {
        let dir = TempDir::new().unwrap();
        let result = runner().run(&stellar_case(), dir.path()).unwrap();

        assert_eq!(result.len(), DILATION_SAMPLES);
        let case_dir = dir.path().join("stellar_black_hole");
        assert!(case_dir.join("stellar_black_hole.png").is_file());
        assert!(case_dir.join("stellar_black_hole.csv").is_file());
    }

    #[test]
    fn test_result_invariants() {
        let dir = TempDir::new().unwrap();
        let result = runner().run(&stellar_case(), dir.path()).unwrap();

        assert!(result.distances_rs[0] > 1.0);
        for pair in result.distances_rs.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        for &factor in &result.dilation_factors {
            assert!((0.0..1.0).contains(&factor));
        }
        let last = result.distances_rs.last().unwrap();
        assert!((last - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_distance_range_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let case = CaseDescriptor {
            label: "Too Close".to_string(),
            mass_solar: 10.0,
            max_distance_rs: 1.0,
            plot_scale: 1.0,
        };

        match runner().run(&case, dir.path()) {
            Err(Error::InvalidCase { label, .. }) => assert_eq!(label, "Too Close"),
            other => panic!("expected invalid case, got {other:?}"),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let dir = TempDir::new().unwrap();
        let case = CaseDescriptor {
            label: "Weightless".to_string(),
            mass_solar: 0.0,
            max_distance_rs: 5.0,
            plot_scale: 1.0,
        };

        assert!(matches!(
            runner().run(&case, dir.path()),
            Err(Error::InvalidCase { .. })
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_rerun_overwrites_with_identical_table() {
        let dir = TempDir::new().unwrap();
        let case = stellar_case();
        let table = dir
            .path()
            .join("stellar_black_hole")
            .join("stellar_black_hole.csv");

        runner().run(&case, dir.path()).unwrap();
        let first = std::fs::read(&table).unwrap();
        runner().run(&case, dir.path()).unwrap();
        let second = std::fs::read(&table).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_accented_label_gets_ascii_directory() {
        let dir = TempDir::new().unwrap();
        let case = CaseDescriptor {
            label: "Pr\u{f3}ximo do Horizonte".to_string(),
            mass_solar: 10.0,
            max_distance_rs: 1.5,
            plot_scale: 0.8,
        };

        runner().run(&case, dir.path()).unwrap();
        assert!(dir.path().join("proximo_do_horizonte").is_dir());
    }
}
