use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Chart bucket for a proposal status.
///
/// Upstream status strings are mapped leniently: anything unrecognized lands
/// in `Final` so new upstream statuses still render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum StatusBucket {
    Draft,
    #[default]
    Final,
    #[serde(rename = "Last Call")]
    LastCall,
    Withdrawn,
    Review,
    Living,
    Stagnant,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 7] = [
        StatusBucket::Draft,
        StatusBucket::Final,
        StatusBucket::LastCall,
        StatusBucket::Withdrawn,
        StatusBucket::Review,
        StatusBucket::Living,
        StatusBucket::Stagnant,
    ];

    /// Map a raw upstream status onto its bucket. Never fails.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "Draft" => Self::Draft,
            "Final" | "Accepted" | "Superseded" => Self::Final,
            "Last Call" => Self::LastCall,
            "Withdrawn" | "Abandoned" | "Rejected" => Self::Withdrawn,
            "Review" => Self::Review,
            "Living" | "Active" => Self::Living,
            "Stagnant" => Self::Stagnant,
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Final => "Final",
            Self::LastCall => "Last Call",
            Self::Withdrawn => "Withdrawn",
            Self::Review => "Review",
            Self::Living => "Living",
            Self::Stagnant => "Stagnant",
        }
    }
}

/// Strict parse of a bucket label (user selection, not upstream data)
impl FromStr for StatusBucket {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::InvalidStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
