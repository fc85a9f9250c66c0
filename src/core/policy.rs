//! What a machine does when asked to follow an edge its current state lacks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the synthetic sink state appended under [`UndefinedPolicy::Doom`].
pub const DOOM_STATE: &str = "Doom";

/// Policy applied when an edge is not defined on the current state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedPolicy {
    /// Ignore the edge and remain in the current state.
    #[default]
    Stay,

    /// Move to the `Doom` sink, which has no way out.
    Doom,
}

impl fmt::Display for UndefinedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stay => write!(f, "stay"),
            Self::Doom => write!(f, "doom"),
        }
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown undefined-transition policy '{0}', expected 'stay' or 'doom'")]
pub struct ParsePolicyError(pub String);

impl FromStr for UndefinedPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stay" => Ok(Self::Stay),
            "doom" => Ok(Self::Doom),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
