//! Orbit: spin about a point one metre ahead of the robot

use crate::common::{IntoAngle, Translation};
use crate::drivetrain::{DriveCommand, DrivetrainControlPort};
use crate::lifecycle::{PatternBase, PatternCommand};

pub const ORBIT_RATE_DEG_PER_S: f64 = 10.0;
pub const ORBIT_CENTER_X: f64 = 1.0;
pub const ORBIT_CENTER_Y: f64 = 0.0;

/// Constant-rate rotation about a fixed offset; stateless
#[derive(Debug, Clone)]
pub struct OrbitCommand {
    base: PatternBase,
}

impl OrbitCommand {
    pub fn new() -> Self {
        OrbitCommand {
            base: PatternBase::new("Orbit"),
        }
    }

    /// The command issued on every tick
    pub fn drive_command() -> DriveCommand {
        DriveCommand::new(0.0, 0.0, ORBIT_RATE_DEG_PER_S.deg())
            .about(Translation::new(ORBIT_CENTER_X, ORBIT_CENTER_Y))
    }
}

impl Default for OrbitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCommand for OrbitCommand {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn start(&mut self, _drivetrain: &mut dyn DrivetrainControlPort) {
        self.base.activate();
    }

    fn tick(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        drivetrain.drive(Self::drive_command());
    }

    fn stop(&mut self, _drivetrain: &mut dyn DrivetrainControlPort, interrupted: bool) {
        self.base.deactivate(interrupted);
    }
}
