//! Core functionality shared by every layer: errors, logging, units

pub mod error;
pub mod logging;
pub mod units;

pub use error::{PhysicsError, PhysicsResult, Precondition};
pub use units::UnitConverter;
