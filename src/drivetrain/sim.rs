//! Kinematic drivetrain simulation
//!
//! Every port call stands for one scheduler period. Module azimuth slews at a
//! bounded rate, drive-distance targets close at a bounded speed, and velocity
//! commands are integrated with forward Euler into an [`Odometry`] estimate.

use std::collections::HashMap;

use nalgebra::Rotation2;
use tracing::debug;

use super::odometry::Odometry;
use super::{DriveCommand, DrivetrainControlPort, Stance};
use crate::common::{heading, Angle, IntoAngle, Pose2D, Translation};
use crate::config::SimulationConfig;
use crate::error::Result;

const LOCK_X_AZIMUTH_DEG: f64 = 45.0;
const TURN_IN_PLACE_AZIMUTH_DEG: f64 = 135.0;

/// Simulated swerve drivetrain
#[derive(Debug, Clone)]
pub struct SimulatedDrivetrain {
    config: SimulationConfig,
    odometry: Odometry,
    brake_mode: bool,
    azimuth: Angle,
    stance: Stance,
    leg_distance: f64,
    last_drive: Option<DriveCommand>,
    zero_count: u32,
}

impl SimulatedDrivetrain {
    /// Create a simulation with default parameters
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        SimulatedDrivetrain {
            config,
            odometry: Odometry::new(),
            brake_mode: false,
            azimuth: Angle::ZERO,
            stance: Stance::Steering,
            leg_distance: 0.0,
            last_drive: None,
            zero_count: 0,
        }
    }

    /// Configure the simulation with parameters
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<()> {
        self.config.configure(params)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn brake_mode(&self) -> bool {
        self.brake_mode
    }

    /// Current module azimuth in (-180°, 180°]
    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    /// Distance covered toward the current drive-distance target
    pub fn leg_distance(&self) -> f64 {
        self.leg_distance
    }

    pub fn last_drive(&self) -> Option<DriveCommand> {
        self.last_drive
    }

    pub fn zero_count(&self) -> u32 {
        self.zero_count
    }

    /// Slew the azimuth one period toward `target`, reporting whether it is in tolerance
    fn slew_azimuth(&mut self, target: Angle) -> bool {
        let max_step = (self.config.turn_rate_deg_per_s * self.config.period_s).deg();
        let error = (target - self.azimuth).wrapped_half();

        self.azimuth = if error.abs() <= max_step {
            target.wrapped_half()
        } else if error > Angle::ZERO {
            (self.azimuth + max_step).wrapped_half()
        } else {
            (self.azimuth - max_step).wrapped_half()
        };

        (target - self.azimuth).wrapped_half().abs() <= self.config.angle_tolerance_deg.deg()
    }

    fn field_direction(&self) -> Angle {
        heading(&self.odometry.pose()) + self.azimuth
    }
}

impl Default for SimulatedDrivetrain {
    fn default() -> Self {
        Self::new()
    }
}

impl DrivetrainControlPort for SimulatedDrivetrain {
    fn zero_modules(&mut self) {
        self.azimuth = Angle::ZERO;
        self.zero_count += 1;
    }

    fn set_brake_mode(&mut self, enabled: bool) {
        self.brake_mode = enabled;
    }

    fn reset_drive(&mut self) {
        self.leg_distance = 0.0;
    }

    fn set_turning_position(&mut self, angle: Angle) -> bool {
        self.stance = Stance::Steering;
        self.slew_azimuth(angle)
    }

    fn set_drive_distance(&mut self, distance: f64) -> bool {
        let max_step = self.config.drive_speed_mps * self.config.period_s;
        let step = (distance - self.leg_distance).clamp(-max_step, max_step);

        let direction = self.field_direction();
        let delta = Translation::new(direction.cos(), direction.sin()) * step;
        self.odometry.update(delta, Angle::ZERO);
        self.leg_distance += step;

        let reached = (distance - self.leg_distance).abs() <= self.config.distance_tolerance_m;
        if reached {
            debug!("Drive distance {:.3} m reached", distance);
        }
        reached
    }

    fn set_lock_wheels_x(&mut self) -> bool {
        self.stance = Stance::LockedX;
        self.slew_azimuth(LOCK_X_AZIMUTH_DEG.deg())
    }

    fn set_turn_in_place(&mut self) -> bool {
        self.stance = Stance::TurnInPlace;
        self.slew_azimuth(TURN_IN_PLACE_AZIMUTH_DEG.deg())
    }

    fn drive(&mut self, command: DriveCommand) {
        let dt = self.config.period_s;
        let omega = command.rotation.as_radians();
        let robot_to_field = Rotation2::new(heading(&self.odometry.pose()).as_radians());

        // Rotating about c moves the robot centre with velocity omega x (-c)
        let c = command.center_of_rotation;
        let pivot_velocity = robot_to_field * Translation::new(omega * c.y, -omega * c.x);

        let commanded = Translation::new(command.x_speed, command.y_speed);
        let translation_velocity = if command.field_relative {
            commanded
        } else {
            robot_to_field * commanded
        };

        self.odometry
            .update((translation_velocity + pivot_velocity) * dt, command.rotation * dt);
        self.last_drive = Some(command);
    }

    fn pose(&self) -> Pose2D {
        self.odometry.pose()
    }

    fn reset_odometry(&mut self, pose: Pose2D) {
        self.odometry.reset(pose);
    }
}
