//! Physical constants (SI).
//!
//! The defaults match the values the persisted reference data was produced
//! with, including the coarse `c = 3e8 m/s`. Every consumer receives a
//! [`PhysicalConstants`] value instead of reading globals, so a config file
//! can override any of them without process-wide mutable state.

use serde::{Deserialize, Serialize};

/// Gravitational constant (m^3 kg^-1 s^-2).
pub const G_SI: f64 = 6.674_30e-11;

/// Speed of light in vacuum (m/s). Deliberately the rounded value the
/// reference data set is defined against, not the CODATA one.
pub const C_SI: f64 = 3.0e8;

/// Solar mass (kg), used to convert stellar masses to SI.
pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// Immutable set of constants injected into the formula functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Gravitational constant (m^3 kg^-1 s^-2).
    #[serde(default = "default_g")]
    pub gravitational_constant: f64,

    /// Speed of light (m/s).
    #[serde(default = "default_c")]
    pub speed_of_light: f64,

    /// Solar mass (kg).
    #[serde(default = "default_solar_mass")]
    pub solar_mass_kg: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravitational_constant: default_g(),
            speed_of_light: default_c(),
            solar_mass_kg: default_solar_mass(),
        }
    }
}

fn default_g() -> f64 {
    G_SI
}

fn default_c() -> f64 {
    C_SI
}

fn default_solar_mass() -> f64 {
    SOLAR_MASS_KG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_named_constants() {
        let consts = PhysicalConstants::default();
        assert_eq!(consts.gravitational_constant, G_SI);
        assert_eq!(consts.speed_of_light, C_SI);
        assert_eq!(consts.solar_mass_kg, SOLAR_MASS_KG);
    }
}
