use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Subscription level gating premium features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tier {
    #[default]
    Free,
    Premium,
}

impl Tier {
    /// Convert to the wire/database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Premium => "Premium",
        }
    }

    /// Parse a tier reported by an upstream source.
    ///
    /// Empty or unrecognized values yield `None` so callers can fall back
    /// to the next source in their precedence chain.
    pub fn parse_reported(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| Self::from_str(v).ok())
    }
}

impl FromStr for Tier {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Free" => Ok(Self::Free),
            "Premium" => Ok(Self::Premium),
            _ => Err(CoreError::InvalidTier {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
