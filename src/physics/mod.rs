//! Closed-form relativistic quantities.
//!
//! Every function here is a direct evaluation of a textbook formula. The
//! only guarded operation is the time dilation factor, whose square root
//! goes complex at or inside the Schwarzschild radius; that case surfaces
//! as [`Error::InvalidDomain`] rather than a silent NaN.

pub mod constants;

pub use constants::PhysicalConstants;

use crate::error::{Error, Result};

/// Schwarzschild radius `2 G M / c^2` in meters for a mass in kilograms.
///
/// No input validation: a non-positive mass yields a mathematically
/// meaningless but well-defined result.
pub fn schwarzschild_radius(mass_kg: f64, consts: &PhysicalConstants) -> f64 {
    let c = consts.speed_of_light;
    2.0 * consts.gravitational_constant * mass_kg / (c * c)
}

/// Time dilation factor `sqrt(1 - rs/r)` under the Schwarzschild metric.
///
/// Requires `r_m > rs_m` strictly; anything else is a domain error.
pub fn time_dilation_factor(r_m: f64, rs_m: f64) -> Result<f64> {
    if r_m <= rs_m {
        return Err(Error::InvalidDomain { r_m, rs_m });
    }
    Ok((1.0 - rs_m / r_m).sqrt())
}

/// Non-relativistic light-deflection approximation `rs / b` in radians for
/// an impact parameter `b` in meters. Illustrative only; plotting applies
/// the tangent of this angle.
pub fn light_deflection_angle(rs_m: f64, impact_parameter_m: f64) -> f64 {
    rs_m / impact_parameter_m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consts() -> PhysicalConstants {
        PhysicalConstants::default()
    }

    #[test]
    fn test_schwarzschild_radius_formula_identity() {
        let c = consts();
        for mass_kg in [1.0, 1.989e30, 5.0 * 1.989e30, 1e36] {
            let expected = 2.0 * c.gravitational_constant * mass_kg
                / (c.speed_of_light * c.speed_of_light);
            assert_eq!(schwarzschild_radius(mass_kg, &c), expected);
        }
    }

    #[test]
    fn test_schwarzschild_radius_five_solar_masses() {
        // 2 * 6.6743e-11 * 5 * 1.989e30 / (3e8)^2
        let c = consts();
        let rs = schwarzschild_radius(5.0 * c.solar_mass_kg, &c);
        assert!((rs - 14750.2).abs() < 1.0, "rs = {rs}");
    }

    #[test]
    fn test_dilation_factor_in_open_unit_interval() {
        let rs = 1000.0;
        for r in [rs * 1.0001, rs * 1.01, rs * 2.0, rs * 100.0] {
            let factor = time_dilation_factor(r, rs).unwrap();
            assert!(factor > 0.0 && factor < 1.0, "factor = {factor} at r = {r}");
        }
    }

    #[test]
    fn test_dilation_factor_monotonically_increasing() {
        let rs = 2950.0;
        let mut previous = 0.0;
        for multiple in [1.01, 1.1, 2.0, 10.0, 1000.0] {
            let factor = time_dilation_factor(multiple * rs, rs).unwrap();
            assert!(factor > previous);
            previous = factor;
        }
    }

    #[test]
    fn test_dilation_factor_vanishes_at_horizon() {
        let rs = 2950.0;
        let near = time_dilation_factor(rs * (1.0 + 1e-12), rs).unwrap();
        assert!(near < 1e-5);
    }

    #[test]
    fn test_dilation_factor_rejects_horizon_and_interior() {
        let rs = 2950.0;
        for r in [rs, rs * 0.5, 0.0] {
            match time_dilation_factor(r, rs) {
                Err(Error::InvalidDomain { r_m, rs_m }) => {
                    assert_eq!(r_m, r);
                    assert_eq!(rs_m, rs);
                }
                other => panic!("expected domain error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_light_deflection_shrinks_with_impact_parameter() {
        let rs = 1000.0;
        let near = light_deflection_angle(rs, 2.0 * rs);
        let far = light_deflection_angle(rs, 10.0 * rs);
        assert!(near > far);
        assert!(far > 0.0);
    }
}
