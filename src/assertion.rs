//! Converts a fact into a test outcome.
//!
//! A yes succeeds, a vacuous yes cancels (nothing was actually checked) and a
//! no fails. Cancellation and failure carry the fact message and the position
//! of the caller that asked for the conversion.

use crate::fact::Fact;
use std::fmt;
use std::panic::Location;
use thiserror::Error;
use tracing::debug;

/// Marker returned when a fact holds substantively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Succeeded;

/// Where in the caller's source a fact was asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    pub fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// The position of the code calling the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for SourcePosition {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A fact that did not hold substantively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// The fact was only vacuously true.
    #[error("canceled at {position}: {message}")]
    Canceled {
        message: String,
        position: SourcePosition,
    },

    /// The fact was false.
    #[error("failed at {position}: {message}")]
    Failed {
        message: String,
        position: SourcePosition,
    },
}

impl AssertionError {
    pub fn message(&self) -> &str {
        match self {
            AssertionError::Canceled { message, .. } | AssertionError::Failed { message, .. } => {
                message
            }
        }
    }

    pub fn position(&self) -> SourcePosition {
        match self {
            AssertionError::Canceled { position, .. } | AssertionError::Failed { position, .. } => {
                *position
            }
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, AssertionError::Canceled { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AssertionError::Failed { .. })
    }
}

impl Fact {
    /// Convert into an outcome positioned at the caller.
    #[track_caller]
    pub fn to_assertion(&self) -> Result<Succeeded, AssertionError> {
        self.to_assertion_at(SourcePosition::caller())
    }

    /// Convert into an outcome positioned at `position`.
    pub fn to_assertion_at(&self, position: SourcePosition) -> Result<Succeeded, AssertionError> {
        if self.is_vacuous_yes() {
            debug!(%position, "fact is vacuously yes, canceling");
            Err(AssertionError::Canceled {
                message: self.fact_message().to_string(),
                position,
            })
        } else if self.is_yes() {
            debug!(%position, "fact is yes");
            Ok(Succeeded)
        } else {
            debug!(%position, "fact is no, failing");
            Err(AssertionError::Failed {
                message: self.fact_message().to_string(),
                position,
            })
        }
    }
}
