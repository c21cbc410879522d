use crate::{CategoryBucket, ChartPoint, StackedCount, StatusBucket, StatusYearEntry, YearRange};

use std::collections::{BTreeMap, BTreeSet};

/// Distinct years present in the dataset, ascending
pub fn available_years(data: &[StatusYearEntry]) -> Vec<i32> {
    data.iter()
        .map(|entry| entry.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Flatten the dataset into chart points for one category bucket
pub fn derive_points(
    data: &[StatusYearEntry],
    category: CategoryBucket,
    range: YearRange,
) -> Vec<ChartPoint> {
    data.iter()
        .filter(|entry| range.contains(entry.year))
        .flat_map(move |entry| {
            entry
                .status_changes
                .iter()
                .filter(move |change| CategoryBucket::classify(&change.eip_category) == category)
                .map(move |change| ChartPoint {
                    status: StatusBucket::classify(&change.last_status),
                    year: entry.year,
                    value: 1,
                })
        })
        .collect()
}

/// Sum points into stacked column segments ordered by year, then status
pub fn stacked_counts(points: &[ChartPoint]) -> Vec<StackedCount> {
    let mut counts: BTreeMap<(i32, StatusBucket), u32> = BTreeMap::new();
    for point in points {
        *counts.entry((point.year, point.status)).or_default() += point.value;
    }

    counts
        .into_iter()
        .map(|((year, status), value)| StackedCount {
            year,
            status,
            value,
        })
        .collect()
}
