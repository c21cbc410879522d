use super::{change, sample_dataset};
use crate::{
    CategoryBucket, ChartType, CsvRow, StatusYearEntry, YearRange, csv_file_name, export_rows,
    render_csv, status_link,
};

fn row(eip: &str, category: &str) -> CsvRow {
    CsvRow {
        eip: eip.to_string(),
        last_status: "Final".to_string(),
        eip_title: "Title".to_string(),
        eip_category: category.to_string(),
        year: 2022,
    }
}

#[test]
fn test_header_only_for_empty_export() {
    assert_eq!(
        render_csv(&[], ChartType::Eips),
        "EIP,Last Status,EIP Title,EIP Category,Year,Link"
    );
}

#[test]
fn test_rows_render_with_links() {
    let data = vec![StatusYearEntry {
        year: 2021,
        status_changes: vec![change("1559", "Final", "Fee market change", "Core")],
    }];
    let rows = export_rows(&data, CategoryBucket::Core, YearRange::unbounded());

    let csv = render_csv(&rows, ChartType::Eips);

    assert_eq!(
        csv,
        "EIP,Last Status,EIP Title,EIP Category,Year,Link\n\
         1559,Final,Fee market change,Core,2021,https://eipsinsight.com/eips/eip-1559"
    );
}

#[test]
fn test_link_depends_on_category_then_chart_type() {
    assert_eq!(
        status_link(&row("20", "ERC"), ChartType::Rips),
        "https://eipsinsight.com/ercs/erc-20"
    );
    assert_eq!(
        status_link(&row("1", "Core"), ChartType::Eips),
        "https://eipsinsight.com/eips/eip-1"
    );
    assert_eq!(
        status_link(&row("7212", "Core"), ChartType::Rips),
        "https://eipsinsight.com/rips/rip-7212"
    );
    assert_eq!(
        status_link(&row("7212", "Core"), ChartType::Ercs),
        "https://eipsinsight.com/rips/rip-7212"
    );
}

#[test]
fn test_fields_with_commas_and_quotes_are_quoted() {
    let data = vec![StatusYearEntry {
        year: 2023,
        status_changes: vec![change("6780", "Final", "SELFDESTRUCT, \"only\" same tx", "Core")],
    }];
    let rows = export_rows(&data, CategoryBucket::Core, YearRange::unbounded());

    let csv = render_csv(&rows, ChartType::Eips);

    assert!(csv.contains("6780,Final,\"SELFDESTRUCT, \"\"only\"\" same tx\",Core,2023,"));
}

#[test]
fn test_export_row_count_matches_category_and_range() {
    let data = sample_dataset();
    let ranges = [
        YearRange::unbounded(),
        YearRange::new(Some(2022), None),
        YearRange::new(None, Some(2021)),
        YearRange::new(Some(2022), Some(2022)),
        YearRange::new(Some(2030), None),
    ];

    for category in CategoryBucket::ALL {
        for range in ranges {
            let expected = data
                .iter()
                .filter(|entry| range.contains(entry.year))
                .flat_map(|entry| entry.status_changes.iter())
                .filter(|c| CategoryBucket::classify(&c.eip_category) == category)
                .count();

            let rows = export_rows(&data, category, range);
            let csv = render_csv(&rows, ChartType::Eips);

            assert_eq!(rows.len(), expected, "{category:?} {range:?}");
            assert_eq!(csv.lines().count(), expected + 1, "{category:?} {range:?}");
        }
    }
}

#[test]
fn test_file_name_uses_placeholders_for_unset_bounds() {
    assert_eq!(csv_file_name(YearRange::unbounded()), "StatusChart_start-end.csv");
    assert_eq!(
        csv_file_name(YearRange::new(Some(2020), Some(2023))),
        "StatusChart_2020-2023.csv"
    );
    assert_eq!(
        csv_file_name(YearRange::new(None, Some(2023))),
        "StatusChart_start-2023.csv"
    );
}
