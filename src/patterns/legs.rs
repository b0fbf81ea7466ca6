//! Turn-then-drive leg sequencing shared by the path patterns

use tracing::debug;

use crate::common::Angle;
use crate::drivetrain::DrivetrainControlPort;

/// Distance driven on every leg, in metres
pub const LEG_DISTANCE: f64 = 0.5;

/// Run one period of a leg: steer to `angle`, then drive [`LEG_DISTANCE`].
///
/// Returns `true` on the period the leg completes, after drive sequencing has
/// been reset for the next leg. Each gate that is not yet satisfied ends the
/// period; the same targets are re-issued on the next call.
pub fn drive_leg(drivetrain: &mut dyn DrivetrainControlPort, angle: Angle) -> bool {
    if !drivetrain.set_turning_position(angle) {
        return false;
    }

    if !drivetrain.set_drive_distance(LEG_DISTANCE) {
        return false;
    }

    debug!(%angle, "Leg complete");
    drivetrain.reset_drive();
    true
}
