//! Inheritance chance errors.

use crate::error::{ErrorSeverity, PlannerError};
use crate::tree::SparkKind;

/// Contract violations raised by the chance table.
///
/// Absent sparks and ancestors never produce these; they mean a caller handed the
/// engine a spark the game cannot produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InheritanceError {
    /// Spark levels run from 1 to 3.
    #[error("{kind} level {level} is outside 1..=3")]
    UnsupportedLevel { kind: SparkKind, level: u8 },

    /// Spark tag that does not name a known kind.
    #[error("unknown spark kind '{0}'")]
    UnknownKind(String),
}

impl PlannerError for InheritanceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedLevel { .. } => ErrorSeverity::Internal,
            Self::UnknownKind(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLevel { .. } => "INHERITANCE_UNSUPPORTED_LEVEL",
            Self::UnknownKind(_) => "INHERITANCE_UNKNOWN_KIND",
        }
    }
}
