//! User record - the profile shown on the account page.

use crate::Tier;

use serde::{Deserialize, Deserializer, Serialize};

/// Denormalized user profile.
///
/// The database holds the canonical copy; the client keeps a cached copy
/// that is reconciled against the server on every profile load. Missing
/// fields in a cached payload deserialize to their defaults so a partially
/// written cache entry still loads. An unrecognized tier reads as `Free`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar reference (URL)
    pub image: String,
    #[serde(deserialize_with = "lenient_tier")]
    pub tier: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

fn lenient_tier<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Tier, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(Tier::parse_reported(value.as_deref()).unwrap_or_default())
}

impl UserRecord {
    pub fn is_premium(&self) -> bool {
        self.tier == Tier::Premium
    }
}
