pub mod common;
pub mod config;
pub mod control;
pub mod drivetrain;
pub mod error;
pub mod lifecycle;
pub mod patterns;

use tracing::{info, warn};

use crate::drivetrain::DrivetrainControlPort;
use crate::error::{Error, Result};
use crate::lifecycle::PatternCommand;

/// Owns the drivetrain and the test-mode patterns, and runs at most one
/// pattern at a time
pub struct TestModeScheduler<D: DrivetrainControlPort> {
    drivetrain: D,
    patterns: Vec<Box<dyn PatternCommand>>,
    active: Option<usize>,
}

impl<D: DrivetrainControlPort> TestModeScheduler<D> {
    /// Create a new scheduler with no patterns registered
    pub fn new(drivetrain: D) -> Self {
        TestModeScheduler {
            drivetrain,
            patterns: Vec::new(),
            active: None,
        }
    }

    /// Create a scheduler with every test-mode pattern registered
    pub fn with_test_patterns(drivetrain: D) -> Self {
        let mut scheduler = Self::new(drivetrain);
        for pattern in patterns::test_patterns() {
            scheduler.patterns.push(pattern);
        }
        scheduler
    }

    /// Register a pattern with the scheduler
    pub fn register<T: PatternCommand + 'static>(&mut self, pattern: T) {
        self.patterns.push(Box::new(pattern));
    }

    /// Names of the registered patterns, in registration order
    pub fn pattern_names(&self) -> Vec<&str> {
        self.patterns.iter().map(|pattern| pattern.name()).collect()
    }

    /// Name of the running pattern
    pub fn active_name(&self) -> Option<&str> {
        self.active.map(|index| self.patterns[index].name())
    }

    /// Make `name` the active pattern
    ///
    /// A different running pattern is stopped as interrupted first.
    /// Selecting the running pattern again does nothing.
    pub fn select(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.patterns.iter().position(|p| p.name() == name) else {
            warn!(pattern = name, "Unknown pattern requested");
            return Err(Error::UnknownPattern {
                name: name.to_string(),
                available: self.pattern_names().join(", "),
            });
        };

        if self.active == Some(index) {
            return Ok(());
        }

        if let Some(previous) = self.active.take() {
            self.patterns[previous].stop(&mut self.drivetrain, true);
        }

        info!(pattern = name, "Selected pattern");
        self.patterns[index].start(&mut self.drivetrain);
        self.active = Some(index);
        Ok(())
    }

    /// Run one period of the active pattern
    pub fn run_periodic(&mut self) {
        if let Some(index) = self.active {
            self.patterns[index].tick(&mut self.drivetrain);
        }
    }

    /// Stop the active pattern as finished
    pub fn deselect(&mut self) {
        if let Some(index) = self.active.take() {
            self.patterns[index].stop(&mut self.drivetrain, false);
        }
    }

    pub fn drivetrain(&self) -> &D {
        &self.drivetrain
    }

    pub fn drivetrain_mut(&mut self) -> &mut D {
        &mut self.drivetrain
    }

    /// Stop any active pattern and hand back the drivetrain
    pub fn into_drivetrain(mut self) -> D {
        self.deselect();
        self.drivetrain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivetrain::recording::{Call, RecordingDrivetrain};
    use crate::patterns::{OrbitCommand, PerimeterCommand};

    #[test]
    fn registers_patterns_in_menu_order() {
        let scheduler = TestModeScheduler::with_test_patterns(RecordingDrivetrain::new());
        assert_eq!(
            scheduler.pattern_names(),
            vec!["Zero", "Xs and Os", "Square", "Spirograph", "Orbit", "Pirouette"]
        );
        assert_eq!(scheduler.active_name(), None);
    }

    #[test]
    fn idle_scheduler_issues_nothing() {
        let mut scheduler = TestModeScheduler::with_test_patterns(RecordingDrivetrain::new());
        scheduler.run_periodic();
        scheduler.deselect();
        assert!(scheduler.drivetrain().calls.is_empty());
    }

    #[test]
    fn switching_interrupts_previous_pattern() {
        let mut scheduler = TestModeScheduler::new(RecordingDrivetrain::new());
        scheduler.register(PerimeterCommand::new());
        scheduler.register(OrbitCommand::new());

        scheduler.select("Square").unwrap();
        scheduler.run_periodic();
        scheduler.drivetrain_mut().take_calls();

        scheduler.select("Orbit").unwrap();
        assert_eq!(scheduler.active_name(), Some("Orbit"));
        assert_eq!(
            scheduler.drivetrain_mut().take_calls(),
            vec![Call::BrakeMode(false), Call::ResetDrive]
        );

        scheduler.run_periodic();
        assert_eq!(
            scheduler.drivetrain_mut().take_calls(),
            vec![Call::Drive(OrbitCommand::drive_command())]
        );
    }

    #[test]
    fn reselecting_active_pattern_is_a_no_op() {
        let mut scheduler = TestModeScheduler::new(RecordingDrivetrain::new());
        scheduler.register(PerimeterCommand::new());

        scheduler.select("Square").unwrap();
        scheduler.drivetrain_mut().take_calls();
        scheduler.select("Square").unwrap();
        assert!(scheduler.drivetrain().calls.is_empty());
    }

    #[test]
    fn unknown_pattern_keeps_active_one() {
        let mut scheduler = TestModeScheduler::with_test_patterns(RecordingDrivetrain::new());
        scheduler.select("Orbit").unwrap();

        let err = scheduler.select("Figure Eight").unwrap_err();
        assert!(matches!(err, Error::UnknownPattern { ref name, .. } if name == "Figure Eight"));
        assert!(err.to_string().contains("Pirouette"));
        assert_eq!(scheduler.active_name(), Some("Orbit"));
    }

    #[test]
    fn into_drivetrain_stops_active_pattern() {
        let mut scheduler = TestModeScheduler::with_test_patterns(RecordingDrivetrain::new());
        scheduler.select("Xs and Os").unwrap();
        scheduler.run_periodic();

        let drivetrain = scheduler.into_drivetrain();
        assert_eq!(drivetrain.brake_mode(), Some(false));
    }
}
