//! Common utilities and types for the drivetrain patterns

pub mod angle;

pub use self::angle::{Angle, IntoAngle};

/// Common types used across the codebase
pub mod types {
    /// A 2D translation in field coordinates (metres)
    pub type Translation = nalgebra::Vector2<f64>;

    /// A 2D pose: translation in metres plus heading
    pub type Pose2D = nalgebra::Isometry2<f64>;
}

pub use self::types::{Pose2D, Translation};

/// Build a pose from a position in metres and a heading
pub fn pose(x: f64, y: f64, heading: Angle) -> Pose2D {
    Pose2D::new(Translation::new(x, y), heading.as_radians())
}

/// Heading of a pose
pub fn heading(pose: &Pose2D) -> Angle {
    Angle::from_radians(pose.rotation.angle())
}
