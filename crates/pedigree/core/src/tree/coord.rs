use std::fmt;
use std::str::FromStr;

use crate::config::PlannerConfig;
use crate::error::{ErrorSeverity, PlannerError};

/// Slot in the binary ancestry tree.
///
/// Level 1 is the subject; level `L` holds `2^(L-1)` positions counted from 1,
/// left to right. Levels increase going up the pedigree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeCoord {
    pub level: u32,
    pub position: u32,
}

impl TreeCoord {
    /// The subject of the pedigree.
    pub const SUBJECT: Self = Self {
        level: 1,
        position: 1,
    };

    /// Sentinel for "nothing selected".
    pub const UNSET: Self = Self {
        level: 0,
        position: 0,
    };

    pub const fn new(level: u32, position: u32) -> Self {
        Self { level, position }
    }

    /// Returns true when either component is zero (no selection).
    #[inline]
    pub const fn is_unset(self) -> bool {
        self.level == 0 || self.position == 0
    }

    /// Number of slots at this coordinate's level, or 0 if the level is unset
    /// or too deep to index.
    pub const fn level_width(self) -> u32 {
        if self.level == 0 || self.level > 32 {
            return 0;
        }
        1u32 << (self.level - 1)
    }

    /// Returns true when the position lies in `[1, 2^(level-1)]`.
    pub const fn is_valid(self) -> bool {
        !self.is_unset() && self.position <= self.level_width()
    }

    /// Returns true for a valid slot of the four-generation pedigree.
    pub const fn is_in_pedigree(self) -> bool {
        self.is_valid() && self.level <= PlannerConfig::MAX_LEVEL
    }

    /// Left (paternal) parent slot: `(L+1, 2P-1)`.
    #[inline]
    pub const fn left_parent(self) -> Self {
        Self::new(
            self.level.saturating_add(1),
            self.position.saturating_mul(2).saturating_sub(1),
        )
    }

    /// Right (maternal) parent slot: `(L+1, 2P)`.
    #[inline]
    pub const fn right_parent(self) -> Self {
        Self::new(self.level.saturating_add(1), self.position.saturating_mul(2))
    }
}

impl fmt::Display for TreeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.level, self.position)
    }
}

/// Errors from parsing a `"level-position"` coordinate string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoordParseError {
    #[error("coordinate '{0}' is not of the form LEVEL-POSITION")]
    MissingSeparator(String),

    #[error("coordinate component '{0}' is not a non-negative integer")]
    InvalidNumber(String),
}

impl PlannerError for CoordParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSeparator(_) => "COORD_MISSING_SEPARATOR",
            Self::InvalidNumber(_) => "COORD_INVALID_NUMBER",
        }
    }
}

impl FromStr for TreeCoord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (level, position) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| CoordParseError::MissingSeparator(s.to_string()))?;

        let parse = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| CoordParseError::InvalidNumber(part.to_string()))
        };

        Ok(Self::new(parse(level)?, parse(position)?))
    }
}
