//! Common error infrastructure for pedigree-core.
//!
//! Missing data is never an error in this crate: absent ancestors, absent sparks,
//! out-of-range coordinates and affinity table misses all degrade to zero, empty
//! or `None` results. The error types here cover the remaining cases, which are
//! contract violations by the caller (an impossible spark level, an unknown spark
//! tag) or malformed input at a parsing boundary.
//!
//! Domain-specific errors live next to the code that raises them
//! (`InheritanceError` in [`crate::inheritance`], `CoordParseError` in
//! [`crate::tree`]) and implement [`PlannerError`].

/// Severity level of an error, used for categorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: malformed coordinate string, unknown spark tag from a file
    Validation,

    /// Programming defect upstream of the engine.
    ///
    /// Examples: a spark level outside 1..=3 reaching the chance table
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all pedigree-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who is at fault, not by impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
