//! "Xs and Os": alternate between locking the wheels in an X and orienting
//! them for turning in place.

use tracing::debug;

use crate::drivetrain::DrivetrainControlPort;
use crate::lifecycle::{PatternBase, PatternCommand};

/// Ticks spent in each stance; ~5 s at 20 Hz
pub const PHASE_TICKS: u32 = 100;
/// Ticks in one full X-then-O cycle
pub const CYCLE_TICKS: u32 = 2 * PHASE_TICKS;

/// Duty-cycled two-stance oscillator
#[derive(Debug, Clone)]
pub struct AlternatingStanceCommand {
    base: PatternBase,
    iteration: u32,
}

impl AlternatingStanceCommand {
    pub fn new() -> Self {
        AlternatingStanceCommand {
            base: PatternBase::new("Xs and Os"),
            iteration: 0,
        }
    }

    /// Position in the current cycle, in [0, 200), while active
    pub fn iteration(&self) -> Option<u32> {
        self.base.while_active(self.iteration)
    }
}

impl Default for AlternatingStanceCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCommand for AlternatingStanceCommand {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn start(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        self.iteration = 0;
        drivetrain.set_brake_mode(true);
        self.base.activate();
    }

    fn tick(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        // Stance results are not gated on: the phase is purely time based
        if self.iteration < PHASE_TICKS {
            let _ = drivetrain.set_lock_wheels_x();
        } else {
            let _ = drivetrain.set_turn_in_place();
        }

        self.iteration += 1;
        if self.iteration == PHASE_TICKS {
            debug!("Switching to turn-in-place stance");
        }
        if self.iteration >= CYCLE_TICKS {
            debug!("Switching to locked-X stance");
            self.iteration = 0;
        }
    }

    fn stop(&mut self, drivetrain: &mut dyn DrivetrainControlPort, interrupted: bool) {
        drivetrain.set_brake_mode(false);
        self.base.deactivate(interrupted);
    }
}
