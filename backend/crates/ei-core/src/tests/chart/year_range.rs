use crate::YearRange;

#[test]
fn test_unbounded_range_contains_everything() {
    let range = YearRange::unbounded();
    assert!(range.contains(1900));
    assert!(range.contains(2100));
}

#[test]
fn test_bounds_are_inclusive() {
    let range = YearRange::new(Some(2020), Some(2022));
    assert!(!range.contains(2019));
    assert!(range.contains(2020));
    assert!(range.contains(2022));
    assert!(!range.contains(2023));
}

#[test]
fn test_half_open_ranges() {
    assert!(YearRange::new(Some(2022), None).contains(3000));
    assert!(!YearRange::new(Some(2022), None).contains(2021));
    assert!(YearRange::new(None, Some(2022)).contains(1000));
    assert!(!YearRange::new(None, Some(2022)).contains(2023));
}
