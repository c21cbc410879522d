use crate::Tier;

use std::str::FromStr;

#[test]
fn test_tier_as_str() {
    assert_eq!(Tier::Free.as_str(), "Free");
    assert_eq!(Tier::Premium.as_str(), "Premium");
}

#[test]
fn test_tier_from_str() {
    assert_eq!(Tier::from_str("Free").unwrap(), Tier::Free);
    assert_eq!(Tier::from_str("Premium").unwrap(), Tier::Premium);
    assert!(Tier::from_str("premium").is_err());
    assert!(Tier::from_str("").is_err());
}

#[test]
fn test_tier_default_is_free() {
    assert_eq!(Tier::default(), Tier::Free);
}

#[test]
fn test_parse_reported_ignores_unknown_values() {
    assert_eq!(Tier::parse_reported(Some("Premium")), Some(Tier::Premium));
    assert_eq!(Tier::parse_reported(Some("")), None);
    assert_eq!(Tier::parse_reported(Some("Enterprise")), None);
    assert_eq!(Tier::parse_reported(None), None);
}
