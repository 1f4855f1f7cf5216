//! Aggregate and overview charts.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::models::CaseSummary;
use crate::physics::{self, PhysicalConstants};
use crate::runner::grid::linspace;

/// Render the cross-case comparison chart: one bar per case (height =
/// mean dilation factor) with a standard-deviation error bar, x labels
/// rotated for legibility.
pub fn render_comparison_chart(path: &Path, summaries: &[CaseSummary]) -> Result<()> {
    draw_comparison_chart(path, summaries).map_err(|e| Error::Render {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn draw_comparison_chart(
    path: &Path,
    summaries: &[CaseSummary],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = summaries
        .iter()
        .map(|s| s.mean + s.std_dev)
        .fold(0.0f64, f64::max)
        .max(1e-4)
        * 1.15;

    let mut chart = ChartBuilder::on(&root)
        .caption("Case comparison: mean time dilation", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(160)
        .y_label_area_size(60)
        .build_cartesian_2d((0i32..summaries.len() as i32).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(summaries.len().max(1))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => summaries
                .get(*i as usize)
                .map(|s| s.case_name.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .y_desc("Mean dilation factor")
        .draw()?;

    chart.draw_series(summaries.iter().enumerate().map(|(i, s)| {
        let i = i as i32;
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), s.mean),
            ],
            BLUE.mix(0.6).filled(),
        )
    }))?;

    chart.draw_series(summaries.iter().enumerate().map(|(i, s)| {
        ErrorBar::new_vertical(
            SegmentValue::CenterOf(i as i32),
            (s.mean - s.std_dev).max(0.0),
            s.mean,
            (s.mean + s.std_dev).min(y_max),
            BLACK.filled(),
            8,
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Render the Schwarzschild radius (km) against mass (solar masses) over
/// 1 to 10^7 solar masses.
pub fn render_radius_mass_chart(path: &Path, consts: &PhysicalConstants) -> Result<()> {
    draw_radius_mass_chart(path, consts).map_err(|e| Error::Render {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn draw_radius_mass_chart(
    path: &Path,
    consts: &PhysicalConstants,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let masses_solar = linspace(1.0, 1e7, 1000);
    let radii_km: Vec<f64> = masses_solar
        .iter()
        .map(|&m| physics::schwarzschild_radius(m * consts.solar_mass_kg, consts) / 1000.0)
        .collect();
    let y_max = radii_km.last().copied().unwrap_or(1.0) * 1.05;

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Schwarzschild radius vs mass", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(1.0f64..1e7f64, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Mass (solar masses)")
        .y_desc("Schwarzschild radius (km)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        masses_solar.into_iter().zip(radii_km),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}

/// Render the simplified light-deflection curve: the tangent of the
/// deflection angle over impact parameters from 2 Rs to 10 Rs.
pub fn render_deflection_chart(path: &Path, rs_m: f64) -> Result<()> {
    draw_deflection_chart(path, rs_m).map_err(|e| Error::Render {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn draw_deflection_chart(
    path: &Path,
    rs_m: f64,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let impact_parameters = linspace(2.0 * rs_m, 10.0 * rs_m, 500);
    let points: Vec<(f64, f64)> = impact_parameters
        .iter()
        .map(|&b| (b / rs_m, physics::light_deflection_angle(rs_m, b).tan()))
        .collect();
    let y_max = points.first().map(|&(_, y)| y * 1.1).unwrap_or(1.0);

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Light deflection (simplified)", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(2.0f64..10.0f64, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Impact parameter (multiples of Rs)")
        .y_desc("tan(deflection angle)")
        .draw()?;

    chart.draw_series(LineSeries::new(points, &BLUE))?;

    root.present()?;
    Ok(())
}
