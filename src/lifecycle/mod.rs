//! Lifecycle management for test-mode patterns

use tracing::info;

use crate::drivetrain::DrivetrainControlPort;

/// A motion pattern driven by a periodic scheduler
///
/// The scheduler calls [`start`](Self::start) once on activation,
/// [`tick`](Self::tick) once per period while active and
/// [`stop`](Self::stop) once on deactivation. None of them may block, and all
/// of them are safe to call repeatedly. The drivetrain is borrowed for the
/// duration of each call only.
pub trait PatternCommand: Send {
    /// Display name
    fn name(&self) -> &str;

    /// Reset internal counters and establish drivetrain preconditions
    fn start(&mut self, drivetrain: &mut dyn DrivetrainControlPort);

    /// Run exactly one step
    fn tick(&mut self, drivetrain: &mut dyn DrivetrainControlPort);

    /// Release drivetrain preconditions, whether finished or interrupted
    fn stop(&mut self, drivetrain: &mut dyn DrivetrainControlPort, interrupted: bool);
}

/// Base state shared by every pattern
#[derive(Debug, Clone)]
pub struct PatternBase {
    pub name: String,
    state: State,
}

/// State of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Inactive,
    Active,
}

impl PatternBase {
    /// Create a new pattern base
    pub fn new(name: &str) -> Self {
        PatternBase {
            name: name.to_string(),
            state: State::Inactive,
        }
    }

    /// Get the current state
    pub fn get_state(&self) -> State {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == State::Active
    }

    /// Record activation
    pub fn activate(&mut self) {
        info!(pattern = %self.name, "Starting pattern");
        self.state = State::Active;
    }

    /// Record deactivation
    pub fn deactivate(&mut self, interrupted: bool) {
        info!(pattern = %self.name, interrupted, "Stopping pattern");
        self.state = State::Inactive;
    }

    /// `value` while the pattern is active, `None` outside the start..stop window
    pub fn while_active<T>(&self, value: T) -> Option<T> {
        self.is_active().then_some(value)
    }
}
