use super::sample_dataset;
use crate::{
    CategoryBucket, ChartPoint, StatusBucket, YearRange, available_years, derive_points,
    stacked_counts,
};

#[test]
fn test_available_years_sorted_and_distinct() {
    let mut data = sample_dataset();
    data.reverse();
    data.push(data[0].clone());

    assert_eq!(available_years(&data), vec![2021, 2022, 2023]);
}

#[test]
fn test_core_points_include_aliases_and_unknown_categories() {
    let points = derive_points(&sample_dataset(), CategoryBucket::Core, YearRange::unbounded());

    assert_eq!(
        points,
        vec![
            ChartPoint { status: StatusBucket::Final, year: 2021, value: 1 },
            ChartPoint { status: StatusBucket::Review, year: 2022, value: 1 },
            ChartPoint { status: StatusBucket::LastCall, year: 2023, value: 1 },
            // unknown status and unknown category both fall into their defaults
            ChartPoint { status: StatusBucket::Final, year: 2023, value: 1 },
        ]
    );
}

#[test]
fn test_points_respect_year_range() {
    let points = derive_points(
        &sample_dataset(),
        CategoryBucket::Erc,
        YearRange::new(Some(2022), None),
    );

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].status, StatusBucket::Draft);
    assert_eq!(points[0].year, 2022);
}

#[test]
fn test_category_without_matches_yields_nothing() {
    let points = derive_points(
        &sample_dataset(),
        CategoryBucket::Networking,
        YearRange::unbounded(),
    );
    assert!(points.is_empty());
}

#[test]
fn test_stacked_counts_sum_per_year_and_status() {
    let points = vec![
        ChartPoint { status: StatusBucket::Final, year: 2022, value: 1 },
        ChartPoint { status: StatusBucket::Draft, year: 2021, value: 1 },
        ChartPoint { status: StatusBucket::Final, year: 2022, value: 1 },
    ];

    let stacked = stacked_counts(&points);

    assert_eq!(stacked.len(), 2);
    assert_eq!((stacked[0].year, stacked[0].status, stacked[0].value), (2021, StatusBucket::Draft, 1));
    assert_eq!((stacked[1].year, stacked[1].status, stacked[1].value), (2022, StatusBucket::Final, 2));
}
