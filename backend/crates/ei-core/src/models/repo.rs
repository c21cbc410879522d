use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Source collection a status change was ingested from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repo {
    Eip,
    Erc,
    Rip,
}

impl Repo {
    pub const ALL: [Repo; 3] = [Repo::Eip, Repo::Erc, Repo::Rip];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eip => "eip",
            Self::Erc => "erc",
            Self::Rip => "rip",
        }
    }
}

impl FromStr for Repo {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "eip" => Ok(Self::Eip),
            "erc" => Ok(Self::Erc),
            "rip" => Ok(Self::Rip),
            _ => Err(CoreError::InvalidRepo {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Repo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
