//! Error taxonomy for the physics bridge
//!
//! Only `StructuralViolation` is meant to reach the host. Everything else is
//! swallowed by the tolerant public entry points and logged at debug level,
//! because the host layout pass may probe the bridge before its inputs exist.

use std::fmt;

use thiserror::Error;

/// Which readiness condition was missing when an operation was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// Viewport size has not been reported yet
    SizeUnknown,
    /// No element records were registered
    EmptyRegistry,
    /// Pixels-per-meter / density not configured
    UnitsUnset,
    WorldAlreadyCreated,
    WorldNotCreated,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Precondition::SizeUnknown => "viewport size unknown",
            Precondition::EmptyRegistry => "element registry is empty",
            Precondition::UnitsUnset => "pixels-per-meter not set",
            Precondition::WorldAlreadyCreated => "world already created",
            Precondition::WorldNotCreated => "world not created",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("precondition not met: {0}")]
    PreconditionNotMet(Precondition),

    #[error("unit conversion attempted before pixels-per-meter was set")]
    InvalidUnitConversion,

    /// Registry shape changed after bodies were bound to indices
    #[error("structural change `{operation}` rejected: registry sealed with {len} records")]
    StructuralViolation { operation: &'static str, len: usize },

    #[error("element record already bound to a body")]
    BodyAlreadyBound,

    #[error("index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl PhysicsError {
    /// True for the race-tolerated class of failures
    pub fn is_precondition(&self) -> bool {
        matches!(self, PhysicsError::PreconditionNotMet(_))
    }
}

impl From<Precondition> for PhysicsError {
    fn from(p: Precondition) -> Self {
        PhysicsError::PreconditionNotMet(p)
    }
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;
