//! Spirograph: legs at ever-increasing headings
//!
//! 75° does not divide a full turn, so wrapping subtracts 360° and the
//! remainder carries into the next lap. The path does not repeat after one
//! revolution.

use crate::common::IntoAngle;
use crate::drivetrain::DrivetrainControlPort;
use crate::lifecycle::{PatternBase, PatternCommand};

use super::legs::drive_leg;

pub const TURN_PER_LEG_DEG: u32 = 75;
pub const FULL_TURN_DEG: u32 = 360;

/// Open-ended closed-loop path sequencer
#[derive(Debug, Clone)]
pub struct SpirographCommand {
    base: PatternBase,
    angle: u32,
}

impl SpirographCommand {
    pub fn new() -> Self {
        SpirographCommand {
            base: PatternBase::new("Spirograph"),
            angle: 0,
        }
    }

    /// Heading of the current leg in whole degrees, in [0, 360), while active
    pub fn angle(&self) -> Option<u32> {
        self.base.while_active(self.angle)
    }
}

impl Default for SpirographCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCommand for SpirographCommand {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn start(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        self.angle = 0;
        drivetrain.set_brake_mode(true);
        drivetrain.reset_drive();
        self.base.activate();
    }

    fn tick(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        if !drive_leg(drivetrain, f64::from(self.angle).deg()) {
            return;
        }

        self.angle += TURN_PER_LEG_DEG;
        if self.angle >= FULL_TURN_DEG {
            self.angle -= FULL_TURN_DEG;
        }
    }

    fn stop(&mut self, drivetrain: &mut dyn DrivetrainControlPort, interrupted: bool) {
        drivetrain.set_brake_mode(false);
        drivetrain.reset_drive();
        self.base.deactivate(interrupted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivetrain::recording::{Call, RecordingDrivetrain};

    #[test]
    fn accumulator_wraps_by_subtraction() {
        let mut drivetrain = RecordingDrivetrain::new();
        let mut command = SpirographCommand::new();
        command.start(&mut drivetrain);

        let mut angles = vec![command.angle().unwrap()];
        for _ in 0..10 {
            command.tick(&mut drivetrain);
            angles.push(command.angle().unwrap());
        }
        assert_eq!(angles, vec![0, 75, 150, 225, 300, 15, 90, 165, 240, 315, 30]);
    }

    #[test]
    fn each_leg_targets_current_angle() {
        let mut drivetrain = RecordingDrivetrain::new();
        let mut command = SpirographCommand::new();
        command.start(&mut drivetrain);
        drivetrain.take_calls();

        for _ in 0..6 {
            command.tick(&mut drivetrain);
        }

        let targets: Vec<_> = drivetrain
            .take_calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::TurningPosition(angle) => Some(angle),
                _ => None,
            })
            .collect();
        let expected: Vec<_> = [0.0, 75.0, 150.0, 225.0, 300.0, 15.0]
            .iter()
            .map(|&deg| deg.deg())
            .collect();
        assert_eq!(targets, expected);
    }

    #[test]
    fn waiting_on_turn_reissues_same_target() {
        let mut drivetrain = RecordingDrivetrain::stalled();
        let mut command = SpirographCommand::new();
        command.start(&mut drivetrain);
        drivetrain.take_calls();

        for _ in 0..5 {
            command.tick(&mut drivetrain);
            assert_eq!(command.angle(), Some(0));
            assert_eq!(drivetrain.take_calls(), vec![Call::TurningPosition(0.0.deg())]);
        }
    }

    #[test]
    fn waiting_on_drive_holds_angle() {
        let mut drivetrain = RecordingDrivetrain::new();
        drivetrain.distance.extend([false; 4]);

        let mut command = SpirographCommand::new();
        command.start(&mut drivetrain);
        drivetrain.take_calls();

        for _ in 0..4 {
            command.tick(&mut drivetrain);
            assert_eq!(command.angle(), Some(0));
            assert_eq!(
                drivetrain.take_calls(),
                vec![Call::TurningPosition(0.0.deg()), Call::DriveDistance(0.5)]
            );
        }

        command.tick(&mut drivetrain);
        assert_eq!(command.angle(), Some(75));
    }

    #[test]
    fn lifecycle_brakes() {
        for interrupted in [false, true] {
            let mut drivetrain = RecordingDrivetrain::new();
            let mut command = SpirographCommand::new();

            command.start(&mut drivetrain);
            assert_eq!(
                drivetrain.take_calls(),
                vec![Call::BrakeMode(true), Call::ResetDrive]
            );

            command.stop(&mut drivetrain, interrupted);
            assert_eq!(
                drivetrain.take_calls(),
                vec![Call::BrakeMode(false), Call::ResetDrive]
            );
            assert_eq!(command.angle(), None);
        }
    }
}
