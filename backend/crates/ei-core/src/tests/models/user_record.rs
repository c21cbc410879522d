use crate::{Tier, UserPatch, UserRecord};

use serde_json::json;

#[test]
fn test_user_record_uses_camel_case_wire_names() {
    let record = UserRecord {
        id: "u1".to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        image: String::new(),
        tier: Tier::Premium,
        wallet_address: Some("0xabc".to_string()),
    };

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["walletAddress"], "0xabc");
    assert_eq!(value["tier"], "Premium");
}

#[test]
fn test_user_record_without_wallet_omits_field() {
    let record = UserRecord::default();
    let value = serde_json::to_value(&record).unwrap();
    assert!(value.get("walletAddress").is_none());
}

#[test]
fn test_partial_cached_record_loads_with_defaults() {
    let record: UserRecord = serde_json::from_value(json!({
        "email": "alice@example.com"
    }))
    .unwrap();

    assert_eq!(record.email, "alice@example.com");
    assert_eq!(record.tier, Tier::Free);
    assert!(record.wallet_address.is_none());
}

#[test]
fn test_cached_record_with_unknown_tier_reads_as_free() {
    let record: UserRecord = serde_json::from_value(json!({
        "id": "u1",
        "name": "Alice",
        "email": "alice@example.com",
        "tier": "Gold",
        "walletAddress": "0xabc"
    }))
    .unwrap();

    assert_eq!(record.tier, Tier::Free);
    assert_eq!(record.name, "Alice");
    assert_eq!(record.wallet_address.as_deref(), Some("0xabc"));
}

#[test]
fn test_cached_record_with_null_tier_reads_as_free() {
    let record: UserRecord = serde_json::from_value(json!({
        "id": "u1",
        "tier": null
    }))
    .unwrap();

    assert_eq!(record.tier, Tier::Free);
}

#[test]
fn test_user_patch_accepts_unknown_tier_and_extra_fields() {
    let patch: UserPatch = serde_json::from_value(json!({
        "id": "u1",
        "tier": "Gold",
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(patch.id.as_deref(), Some("u1"));
    assert_eq!(patch.tier.as_deref(), Some("Gold"));
    assert!(patch.name.is_none());
}
