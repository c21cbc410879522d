//! Status change - one lifecycle transition of a tracked proposal.

use crate::Repo;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Immutable record of a proposal moving from one status to another.
/// Produced by the ingestion job; this workspace only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    /// Proposal number, e.g. "1559"
    pub eip: String,
    pub from_status: String,
    pub to_status: String,
    pub change_date: DateTime<Utc>,
    pub changed_day: u32,
    pub changed_month: u32,
    pub changed_year: i32,
    pub eip_title: String,
    pub eip_category: String,
}

impl StatusChange {
    /// Build a change with the day/month/year decomposed from `change_date`
    pub fn new(
        eip: impl Into<String>,
        from_status: impl Into<String>,
        to_status: impl Into<String>,
        change_date: DateTime<Utc>,
        eip_title: impl Into<String>,
        eip_category: impl Into<String>,
    ) -> Self {
        Self {
            eip: eip.into(),
            from_status: from_status.into(),
            to_status: to_status.into(),
            change_date,
            changed_day: change_date.day(),
            changed_month: change_date.month(),
            changed_year: change_date.year(),
            eip_title: eip_title.into(),
            eip_category: eip_category.into(),
        }
    }
}

/// A status change tagged with the collection it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedStatusChange {
    #[serde(flatten)]
    pub change: StatusChange,
    pub repo: Repo,
}

impl TaggedStatusChange {
    pub fn new(change: StatusChange, repo: Repo) -> Self {
        Self { change, repo }
    }
}
