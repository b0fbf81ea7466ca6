//! Module zeroing

use crate::drivetrain::DrivetrainControlPort;
use crate::lifecycle::{PatternBase, PatternCommand};

/// Issues a zero-modules command every period until stopped
#[derive(Debug, Clone)]
pub struct ZeroModulesCommand {
    base: PatternBase,
}

impl ZeroModulesCommand {
    pub fn new() -> Self {
        ZeroModulesCommand {
            base: PatternBase::new("Zero"),
        }
    }
}

impl Default for ZeroModulesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCommand for ZeroModulesCommand {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn start(&mut self, _drivetrain: &mut dyn DrivetrainControlPort) {
        self.base.activate();
    }

    fn tick(&mut self, drivetrain: &mut dyn DrivetrainControlPort) {
        drivetrain.zero_modules();
    }

    fn stop(&mut self, _drivetrain: &mut dyn DrivetrainControlPort, interrupted: bool) {
        self.base.deactivate(interrupted);
    }
}
