//! Dead-reckoning odometry

use std::f64::consts::PI;

use nalgebra::UnitComplex;

use crate::common::{Angle, Pose2D, Translation};

/// Pose estimate integrated from field-frame deltas
#[derive(Debug, Clone)]
pub struct Odometry {
    pose: Pose2D,
}

impl Odometry {
    /// Create a new estimator at the origin
    pub fn new() -> Self {
        Odometry {
            pose: Pose2D::identity(),
        }
    }

    /// Move the estimate by a field-frame translation and heading change
    pub fn update(&mut self, delta: Translation, turn: Angle) {
        let mut heading = self.pose.rotation.angle() + turn.as_radians();

        // Normalize angle to (-pi, pi]
        if heading > PI {
            heading -= 2.0 * PI;
        } else if heading <= -PI {
            heading += 2.0 * PI;
        }

        self.pose.translation.vector += delta;
        self.pose.rotation = UnitComplex::new(heading);
    }

    /// Replace the estimate; the robot does not move, the frame does
    pub fn reset(&mut self, pose: Pose2D) {
        self.pose = pose;
    }

    /// Get the current pose estimate
    pub fn pose(&self) -> Pose2D {
        self.pose
    }
}

impl Default for Odometry {
    fn default() -> Self {
        Self::new()
    }
}
