use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Chart bucket for a proposal category.
///
/// Like [`crate::StatusBucket`], upstream strings map leniently and unknown
/// categories fall into `Core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum CategoryBucket {
    #[default]
    Core,
    #[serde(rename = "ERC")]
    Erc,
    Networking,
    Interface,
    Meta,
    Informational,
}

impl CategoryBucket {
    pub const ALL: [CategoryBucket; 6] = [
        CategoryBucket::Core,
        CategoryBucket::Erc,
        CategoryBucket::Networking,
        CategoryBucket::Interface,
        CategoryBucket::Meta,
        CategoryBucket::Informational,
    ];

    /// Map a raw upstream category onto its bucket. Never fails.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "Standards Track"
            | "Standard Track"
            | "Standards Track (Core, Networking, Interface, ERC)"
            | "Standard"
            | "Process"
            | "Core"
            | "core" => Self::Core,
            "ERC" => Self::Erc,
            "Networking" => Self::Networking,
            "Interface" => Self::Interface,
            "Meta" => Self::Meta,
            "Informational" => Self::Informational,
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Erc => "ERC",
            Self::Networking => "Networking",
            Self::Interface => "Interface",
            Self::Meta => "Meta",
            Self::Informational => "Informational",
        }
    }
}

/// Strict parse of a bucket label (user selection, not upstream data)
impl FromStr for CategoryBucket {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for CategoryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
