//! Scripted drivetrain that records every port call

use std::collections::VecDeque;

use super::{DriveCommand, DrivetrainControlPort};
use crate::common::{Angle, Pose2D};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ZeroModules,
    BrakeMode(bool),
    ResetDrive,
    TurningPosition(Angle),
    DriveDistance(f64),
    LockWheelsX,
    TurnInPlace,
    Drive(DriveCommand),
    ResetOdometry(Pose2D),
}

/// Gated primitives answer from their queue, or `default_gate` once it is empty.
#[derive(Debug)]
pub(crate) struct RecordingDrivetrain {
    pub calls: Vec<Call>,
    pub turning: VecDeque<bool>,
    pub distance: VecDeque<bool>,
    pub default_gate: bool,
    pub pose: Pose2D,
}

impl RecordingDrivetrain {
    pub fn new() -> Self {
        RecordingDrivetrain {
            calls: Vec::new(),
            turning: VecDeque::new(),
            distance: VecDeque::new(),
            default_gate: true,
            pose: Pose2D::identity(),
        }
    }

    /// Every gated primitive reports "not yet at target"
    pub fn stalled() -> Self {
        RecordingDrivetrain {
            default_gate: false,
            ..Self::new()
        }
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// Last brake mode commanded, if any
    pub fn brake_mode(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::BrakeMode(enabled) => Some(*enabled),
            _ => None,
        })
    }

    fn gate(queue: &mut VecDeque<bool>, default: bool) -> bool {
        queue.pop_front().unwrap_or(default)
    }
}

impl DrivetrainControlPort for RecordingDrivetrain {
    fn zero_modules(&mut self) {
        self.calls.push(Call::ZeroModules);
    }

    fn set_brake_mode(&mut self, enabled: bool) {
        self.calls.push(Call::BrakeMode(enabled));
    }

    fn reset_drive(&mut self) {
        self.calls.push(Call::ResetDrive);
    }

    fn set_turning_position(&mut self, angle: Angle) -> bool {
        self.calls.push(Call::TurningPosition(angle));
        Self::gate(&mut self.turning, self.default_gate)
    }

    fn set_drive_distance(&mut self, distance: f64) -> bool {
        self.calls.push(Call::DriveDistance(distance));
        Self::gate(&mut self.distance, self.default_gate)
    }

    fn set_lock_wheels_x(&mut self) -> bool {
        self.calls.push(Call::LockWheelsX);
        self.default_gate
    }

    fn set_turn_in_place(&mut self) -> bool {
        self.calls.push(Call::TurnInPlace);
        self.default_gate
    }

    fn drive(&mut self, command: DriveCommand) {
        self.calls.push(Call::Drive(command));
    }

    fn pose(&self) -> Pose2D {
        self.pose
    }

    fn reset_odometry(&mut self, pose: Pose2D) {
        self.calls.push(Call::ResetOdometry(pose));
        self.pose = pose;
    }
}
