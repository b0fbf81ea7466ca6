//! Controllers for the drivetrain patterns

use crate::common::{Angle, IntoAngle, Translation};

/// Radius of the circle the pirouette tracks, in metres
pub const CIRCLE_RADIUS: f64 = 1.0;
/// Largest radial error that is corrected for, in metres
pub const RADIAL_ERROR_LIMIT: f64 = 0.5;
/// Heading correction per metre of radial error, in degrees
pub const RADIAL_GAIN_DEG: f64 = 20.0;
/// Cruise speed along the circle, in m/s
pub const CRUISE_SPEED: f64 = 1.0;

/// Output of one [`TangentialCircleController`] update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentialCommand {
    /// Polar angle of the position, turned a quarter turn and corrected for radial error
    pub major_angle: Angle,
    /// Clamped radial error that produced the correction
    pub radial_error: f64,
    pub x_speed: f64,
    pub y_speed: f64,
}

/// Proportional controller that steers the robot counter-clockwise around a
/// circle centred on the origin.
///
/// The radial error is clamped before the gain is applied; there is no
/// integral or derivative term and no terminal condition.
#[derive(Debug, Clone, Copy)]
pub struct TangentialCircleController {
    radius: f64,
    error_limit: f64,
    gain: Angle,
    speed: f64,
}

impl TangentialCircleController {
    /// Create a new controller
    pub fn new() -> Self {
        TangentialCircleController {
            radius: CIRCLE_RADIUS,
            error_limit: RADIAL_ERROR_LIMIT,
            gain: RADIAL_GAIN_DEG.deg(),
            speed: CRUISE_SPEED,
        }
    }

    /// Signed distance outside the circle, clamped to the error limit
    pub fn radial_error(&self, position: Translation) -> f64 {
        (position.norm() - self.radius).clamp(-self.error_limit, self.error_limit)
    }

    /// Compute the drive command for the current position
    ///
    /// Heading is not an input: the command is field relative.
    pub fn compute(&self, position: Translation) -> TangentialCommand {
        let mut major_angle = Angle::atan2(position.y, position.x);

        // Counter-clockwise tangent
        major_angle += 90.0.deg();

        // Outside the circle steers further around, inside steers back in
        let radial_error = self.radial_error(position);
        major_angle += self.gain * radial_error;

        TangentialCommand {
            major_angle,
            radial_error,
            x_speed: major_angle.sin() * self.speed,
            y_speed: major_angle.cos() * self.speed,
        }
    }
}

impl Default for TangentialCircleController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn on_circle_commands_pure_tangent() {
        let command = TangentialCircleController::new().compute(Translation::new(1.0, 0.0));

        assert_relative_eq!(command.radial_error, 0.0);
        assert_relative_eq!(command.major_angle.as_degrees(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(command.x_speed, 1.0, epsilon = 1e-12);
        assert_relative_eq!(command.y_speed, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn outside_error_is_clamped_before_gain() {
        let command = TangentialCircleController::new().compute(Translation::new(2.0, 0.0));

        assert_relative_eq!(command.radial_error, 0.5);
        assert_relative_eq!(command.major_angle.as_degrees(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(command.x_speed, 100.0_f64.to_radians().sin(), epsilon = 1e-12);
        assert_relative_eq!(command.y_speed, 100.0_f64.to_radians().cos(), epsilon = 1e-12);
    }

    #[test]
    fn inside_error_at_clamp_bound() {
        let command = TangentialCircleController::new().compute(Translation::new(0.5, 0.0));

        assert_relative_eq!(command.radial_error, -0.5);
        assert_relative_eq!(command.major_angle.as_degrees(), 80.0, epsilon = 1e-9);
    }

    #[test]
    fn small_error_is_proportional() {
        let controller = TangentialCircleController::new();
        let command = controller.compute(Translation::new(0.0, 1.1));

        assert_relative_eq!(command.radial_error, 0.1, epsilon = 1e-12);
        assert_relative_eq!(command.major_angle.as_degrees(), 182.0, epsilon = 1e-9);
    }

    #[test]
    fn far_inside_is_clamped() {
        let controller = TangentialCircleController::new();
        assert_relative_eq!(controller.radial_error(Translation::new(0.0, 0.0)), -0.5);
        assert_relative_eq!(controller.radial_error(Translation::new(-3.0, 4.0)), 0.5);
    }
}
