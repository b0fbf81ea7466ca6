//! Test-mode motion patterns
//!
//! Each pattern is a small state machine implementing
//! [`PatternCommand`](crate::lifecycle::PatternCommand). Patterns never share
//! state; they only talk to the drivetrain port they are handed.
pub mod alternating_stance;
pub mod legs;
pub mod orbit;
pub mod perimeter;
pub mod pirouette;
pub mod spirograph;
pub mod zero;

pub use self::alternating_stance::AlternatingStanceCommand;
pub use self::orbit::OrbitCommand;
pub use self::perimeter::PerimeterCommand;
pub use self::pirouette::PirouetteCommand;
pub use self::spirograph::SpirographCommand;
pub use self::zero::ZeroModulesCommand;

use crate::lifecycle::PatternCommand;

/// Every test-mode pattern, in menu order
pub fn test_patterns() -> Vec<Box<dyn PatternCommand>> {
    vec![
        Box::new(ZeroModulesCommand::new()),
        Box::new(AlternatingStanceCommand::new()),
        Box::new(PerimeterCommand::new()),
        Box::new(SpirographCommand::new()),
        Box::new(OrbitCommand::new()),
        Box::new(PirouetteCommand::new()),
    ]
}
