//! Drivetrain control port
//!
//! Patterns talk to the drivetrain only through [`DrivetrainControlPort`].
//! Several of its primitives are *gated*: they return `true` once the
//! subsystem reports the commanded target reached, and the caller keeps
//! re-issuing the same command every period until that happens.
pub mod odometry;
pub mod sim;

#[cfg(test)]
pub(crate) mod recording;

use crate::common::{Angle, Pose2D, Translation};

/// Velocity command for the drivetrain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveCommand {
    /// Velocity along X in m/s
    pub x_speed: f64,
    /// Velocity along Y in m/s
    pub y_speed: f64,
    /// Angular rate, per second
    pub rotation: Angle,
    /// Interpret the translation in field coordinates rather than robot coordinates
    pub field_relative: bool,
    /// Point the robot rotates about, in robot coordinates
    pub center_of_rotation: Translation,
}

impl DriveCommand {
    /// Robot-relative command rotating about the robot centre
    pub fn new(x_speed: f64, y_speed: f64, rotation: Angle) -> Self {
        DriveCommand {
            x_speed,
            y_speed,
            rotation,
            field_relative: false,
            center_of_rotation: Translation::zeros(),
        }
    }

    pub fn field_relative(mut self, field_relative: bool) -> Self {
        self.field_relative = field_relative;
        self
    }

    pub fn about(mut self, center_of_rotation: Translation) -> Self {
        self.center_of_rotation = center_of_rotation;
        self
    }
}

/// Fixed wheel arrangements the drivetrain can be asked to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    /// Wheels follow the commanded steering angle
    Steering,
    /// Wheels form an X so the robot resists being pushed
    LockedX,
    /// Wheels are tangent to a circle about the robot centre
    TurnInPlace,
}

/// Narrow interface onto the drivetrain subsystem
///
/// Implementations close their own low-level control loops. Every call must
/// return promptly; waiting is expressed by gated primitives returning `false`.
pub trait DrivetrainControlPort {
    /// Zero the swerve module azimuth encoders
    fn zero_modules(&mut self);

    fn set_brake_mode(&mut self, enabled: bool);

    /// Clear drive-distance sequencing so the next distance target starts from zero
    fn reset_drive(&mut self);

    /// Gated: steer all modules to `angle`
    fn set_turning_position(&mut self, angle: Angle) -> bool;

    /// Gated: drive `distance` metres along the current steering angle
    fn set_drive_distance(&mut self, distance: f64) -> bool;

    /// Gated: lock the wheels in an X
    fn set_lock_wheels_x(&mut self) -> bool;

    /// Gated: orient the wheels for turning in place
    fn set_turn_in_place(&mut self) -> bool;

    fn drive(&mut self, command: DriveCommand);

    /// Current pose estimate
    fn pose(&self) -> Pose2D;

    fn reset_odometry(&mut self, pose: Pose2D);
}
