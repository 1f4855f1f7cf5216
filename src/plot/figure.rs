//! Per-case two-panel figure: curvature surface and dilation curve.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::models::SimulationResult;
use crate::runner::grid::curvature_height;

/// Render the two-panel case figure (3D curvature surface on the left, 2D
/// time dilation curve on the right), overwriting any previous image.
///
/// `axis` holds the scaled spatial coordinates of the curvature grid; the
/// same values are used for both horizontal directions.
pub fn render_case_figure(
    path: &Path,
    label: &str,
    axis: &[f64],
    result: &SimulationResult,
    size: (u32, u32),
) -> Result<()> {
    draw_case_figure(path, label, axis, result, size).map_err(|e| Error::Render {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn draw_case_figure(
    path: &Path,
    label: &str,
    axis: &[f64],
    result: &SimulationResult,
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let rs = result.schwarzschild_radius_m;
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    let lo = axis.first().copied().unwrap_or(-10.0);
    let hi = axis.last().copied().unwrap_or(10.0);

    let mut surface = ChartBuilder::on(&panels[0])
        .caption(format!("Spacetime curvature: {label}"), ("sans-serif", 20))
        .margin(10)
        .build_cartesian_3d(lo..hi, -1.05f64..0.0f64, lo..hi)?;
    surface.with_projection(|mut pb| {
        pb.yaw = 0.8;
        pb.pitch = 0.35;
        pb.scale = 0.8;
        pb.into_matrix()
    });
    surface.configure_axes().draw()?;
    surface.draw_series(
        SurfaceSeries::xoz(axis.iter().copied(), axis.iter().copied(), |x, y| {
            curvature_height(x, y, rs)
        })
        .style(BLUE.mix(0.4).filled()),
    )?;

    let x_first = result.distances_rs.first().copied().unwrap_or(1.01);
    let x_last = result.distances_rs.last().copied().unwrap_or(x_first + 1.0);

    let mut dilation = ChartBuilder::on(&panels[1])
        .caption(format!("Time dilation: {label}"), ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_first..x_last, 0f64..1f64)?;
    dilation
        .configure_mesh()
        .x_desc("Distance (multiples of Rs)")
        .y_desc("Time factor")
        .draw()?;
    dilation.draw_series(LineSeries::new(
        result
            .distances_rs
            .iter()
            .copied()
            .zip(result.dilation_factors.iter().copied()),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}
