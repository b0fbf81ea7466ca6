//! "Square": drive the four sides of a square, forever

use crate::common::IntoAngle;
use crate::drivetrain::DrivetrainControlPort;
use crate::lifecycle::{PatternBase, PatternCommand};

use super::legs::drive_leg;

pub const SIDES: u32 = 4;
pub const TURN_PER_SIDE_DEG: f64 = 90.0;

/// Four-sided closed-loop path sequencer
#[derive(Debug, Clone)]
pub struct PerimeterCommand {
    base: PatternBase,
    side: u32,
}

impl PerimeterCommand {
    pub fn new() -> Self {
        PerimeterCommand {
            base: PatternBase::new("Square"),
            side: 0,
        }
    }

    /// Side currently being driven, in [0, 4), while active
    pub fn side(&self) -> Option<u32> {
        self.base.while_active(self.side)
    }
}

impl Default for PerimeterCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCommand for PerimeterCommand {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn start(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        self.side = 0;
        drivetrain.set_brake_mode(true);
        drivetrain.reset_drive();
        self.base.activate();
    }

    fn tick(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        let angle = (TURN_PER_SIDE_DEG * f64::from(self.side)).deg();
        if !drive_leg(drivetrain, angle) {
            return;
        }

        self.side += 1;
        if self.side >= SIDES {
            self.side = 0;
        }
    }

    fn stop(&mut self, drivetrain: &mut dyn DrivetrainControlPort, interrupted: bool) {
        drivetrain.set_brake_mode(false);
        drivetrain.reset_drive();
        self.base.deactivate(interrupted);
    }
}
