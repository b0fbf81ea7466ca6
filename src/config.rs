//! Parameters for the simulated drivetrain and the demo scheduler
//!
//! Pattern constants are part of the test contract and live next to the
//! patterns; only the simulation is tunable.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Shortest scheduler period accepted, in seconds
pub const MIN_PERIOD_S: f64 = 0.001;
/// Longest scheduler period accepted, in seconds
pub const MAX_PERIOD_S: f64 = 1.0;

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Scheduler period in seconds (20 Hz by default)
    pub period_s: f64,
    /// Module azimuth slew rate
    pub turn_rate_deg_per_s: f64,
    /// Speed used while closing a drive-distance target
    pub drive_speed_mps: f64,
    pub angle_tolerance_deg: f64,
    pub distance_tolerance_m: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            period_s: 0.05,
            turn_rate_deg_per_s: 360.0,
            drive_speed_mps: 1.0,
            angle_tolerance_deg: 1.0,
            distance_tolerance_m: 0.01,
        }
    }
}

impl SimulationConfig {
    /// Load parameters from a YAML file; missing keys keep their defaults
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SimulationConfig = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Configure with parameters
    ///
    /// Either every parameter is applied or none is.
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        let mut updated = self.clone();

        for (name, &value) in params {
            let slot = match name.as_str() {
                "period_s" => &mut updated.period_s,
                "turn_rate_deg_per_s" => &mut updated.turn_rate_deg_per_s,
                "drive_speed_mps" => &mut updated.drive_speed_mps,
                "angle_tolerance_deg" => &mut updated.angle_tolerance_deg,
                "distance_tolerance_m" => &mut updated.distance_tolerance_m,
                _ => return Err(Error::UnknownParameter(name.clone())),
            };
            *slot = value;
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("period_s", self.period_s),
            ("turn_rate_deg_per_s", self.turn_rate_deg_per_s),
            ("drive_speed_mps", self.drive_speed_mps),
            ("angle_tolerance_deg", self.angle_tolerance_deg),
            ("distance_tolerance_m", self.distance_tolerance_m),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if !(MIN_PERIOD_S..=MAX_PERIOD_S).contains(&self.period_s) {
            return Err(Error::InvalidParameter {
                name: "period_s".to_string(),
                value: self.period_s,
            });
        }
        Ok(())
    }
}
