use serde::{Deserialize, Serialize};

/// GET /api/GetUserStatus. `tier` stays raw so unknown values fall back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStatusResponse {
    pub tier: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelSubscriptionResponse {
    /// Unix seconds at which premium access ends
    pub end_date: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadCountResponse {
    pub count: i64,
}
