use ei_core::{StatusChange, UserAccount};

use chrono::{TimeZone, Utc};

pub fn create_test_account(email: &str) -> UserAccount {
    UserAccount::new("Test User".to_string(), email.to_string())
}

pub fn status_change_at(eip: &str, to_status: &str, year: i32, month: u32) -> StatusChange {
    StatusChange::new(
        eip,
        "Draft",
        to_status,
        Utc.with_ymd_and_hms(year, month, 1, 12, 0, 0).unwrap(),
        format!("Proposal {}", eip),
        "Core",
    )
}
