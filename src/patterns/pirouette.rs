//! Pirouette: translate around the unit circle while spinning

use tracing::trace;

use crate::common::{pose, Angle, IntoAngle, Translation};
use crate::control::TangentialCircleController;
use crate::drivetrain::{DriveCommand, DrivetrainControlPort};
use crate::lifecycle::{PatternBase, PatternCommand};

pub const PIROUETTE_RATE_DEG_PER_S: f64 = 10.0;

/// Continuous tangential-path controller fed by the pose estimate
#[derive(Debug, Clone)]
pub struct PirouetteCommand {
    base: PatternBase,
    controller: TangentialCircleController,
}

impl PirouetteCommand {
    pub fn new() -> Self {
        PirouetteCommand {
            base: PatternBase::new("Pirouette"),
            controller: TangentialCircleController::new(),
        }
    }
}

impl Default for PirouetteCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCommand for PirouetteCommand {
    fn name(&self) -> &str {
        &self.base.name
    }

    /// Put the robot on the unit circle at (1, 0) facing +X. The robot does
    /// not move; the coordinate frame does.
    fn start(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        drivetrain.reset_odometry(pose(1.0, 0.0, Angle::ZERO));
        self.base.activate();
    }

    fn tick(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        let current = drivetrain.pose();
        let position: Translation = current.translation.vector;

        let command = self.controller.compute(position);
        trace!(
            x = position.x,
            y = position.y,
            major_angle = %command.major_angle,
            radial_error = command.radial_error,
            "Pirouette command"
        );

        drivetrain.drive(
            DriveCommand::new(
                command.x_speed,
                command.y_speed,
                PIROUETTE_RATE_DEG_PER_S.deg(),
            )
            .field_relative(true),
        );
    }

    fn stop(&mut self, _drivetrain: &mut dyn DrivetrainControlPort, interrupted: bool) {
        self.base.deactivate(interrupted);
    }
}
