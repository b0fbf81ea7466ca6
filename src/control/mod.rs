//! Closed-loop control laws used by the patterns
pub mod controllers;

pub use self::controllers::{TangentialCircleController, TangentialCommand};
