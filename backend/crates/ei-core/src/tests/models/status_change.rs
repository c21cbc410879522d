use crate::{Repo, StatusAggregation, StatusChange, TaggedStatusChange};

use std::str::FromStr;

use chrono::{TimeZone, Utc};

#[test]
fn test_new_decomposes_change_date() {
    let date = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    let change = StatusChange::new("4844", "Review", "Final", date, "Blobs", "Core");

    assert_eq!(change.changed_day, 14);
    assert_eq!(change.changed_month, 11);
    assert_eq!(change.changed_year, 2023);
}

#[test]
fn test_tagged_change_serializes_flat_with_repo() {
    let date = Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap();
    let tagged = TaggedStatusChange::new(
        StatusChange::new("20", "Draft", "Final", date, "Token Standard", "ERC"),
        Repo::Erc,
    );

    let value = serde_json::to_value(&tagged).unwrap();

    assert_eq!(value["repo"], "erc");
    assert_eq!(value["eip"], "20");
    assert_eq!(value["fromStatus"], "Draft");
    assert_eq!(value["toStatus"], "Final");
    assert_eq!(value["changedYear"], 2022);
}

#[test]
fn test_empty_aggregation_serializes_all_three_keys() {
    let value = serde_json::to_value(StatusAggregation::default()).unwrap();
    assert_eq!(value, serde_json::json!({"eip": [], "erc": [], "rip": []}));
}

#[test]
fn test_repo_round_trips_through_str() {
    for repo in Repo::ALL {
        assert_eq!(Repo::from_str(repo.as_str()).unwrap(), repo);
    }
    assert!(Repo::from_str("eips").is_err());
}
