//! Server-side view of a user: the public record plus billing state.

use crate::UserRecord;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub record: UserRecord,
    /// Payment provider subscription backing a Premium tier
    pub subscription_id: Option<String>,
    /// Set once a cancellation is scheduled; premium access ends here
    pub premium_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create a new Free account with a generated id
    pub fn new(name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            record: UserRecord {
                id: Uuid::new_v4().to_string(),
                name,
                email,
                ..Default::default()
            },
            subscription_id: None,
            premium_until: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Whether a cancellation has been scheduled with the payment provider
    pub fn is_cancellation_scheduled(&self) -> bool {
        self.premium_until.is_some()
    }
}
