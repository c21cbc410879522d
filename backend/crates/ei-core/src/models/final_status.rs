use serde::{Deserialize, Serialize};

/// Status a proposal ended a given year in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalStatus {
    pub eip: String,
    pub last_status: String,
    pub eip_title: String,
    pub eip_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusYearEntry {
    pub year: i32,
    #[serde(default)]
    pub status_changes: Vec<FinalStatus>,
}

/// Response body of the final-status-by-year endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FinalStatusByYear {
    #[serde(default)]
    pub eip: Vec<StatusYearEntry>,
}
