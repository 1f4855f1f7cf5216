//! Plot rendering.
//!
//! All drawing goes through `plotters` with a bitmap backend. Each render
//! function owns its drawing area for the duration of one call, so the
//! graphical resources of a case are released before the next case runs.

pub mod chart;
pub mod figure;
