//! Strictness policy for destination option validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How option fields that a destination type's schema does not declare are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Reject the destination with an unknown-field error.
    Strict,
    /// Drop the unknown field from the options map and continue.
    #[default]
    Lenient,
}

impl Strictness {
    /// Returns true for [`Strictness::Strict`].
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// Error returned when a strictness string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid strictness '{0}': expected strict, lenient, true or false")]
pub struct ParseStrictnessError(String);

impl FromStr for Strictness {
    type Err = ParseStrictnessError;

    /// Accepts the mode names and booleans (`true` meaning strict).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "true" | "1" => Ok(Self::Strict),
            "lenient" | "false" | "0" => Ok(Self::Lenient),
            _ => Err(ParseStrictnessError(s.to_string())),
        }
    }
}
