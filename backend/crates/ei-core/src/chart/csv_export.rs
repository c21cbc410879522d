//! CSV export of the status chart's underlying rows.

use crate::{CategoryBucket, ChartType, StatusYearEntry, YearRange};

const CSV_HEADER: &str = "EIP,Last Status,EIP Title,EIP Category,Year,Link";
const SITE_BASE_URL: &str = "https://eipsinsight.com";

/// One exported status change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub eip: String,
    pub last_status: String,
    pub eip_title: String,
    pub eip_category: String,
    pub year: i32,
}

/// Select the rows to export: year within range, category bucket matches.
pub fn export_rows(
    data: &[StatusYearEntry],
    category: CategoryBucket,
    range: YearRange,
) -> Vec<CsvRow> {
    data.iter()
        .filter(|entry| range.contains(entry.year))
        .flat_map(move |entry| {
            entry
                .status_changes
                .iter()
                .filter(move |change| CategoryBucket::classify(&change.eip_category) == category)
                .map(move |change| CsvRow {
                    eip: change.eip.clone(),
                    last_status: change.last_status.clone(),
                    eip_title: change.eip_title.clone(),
                    eip_category: change.eip_category.clone(),
                    year: entry.year,
                })
        })
        .collect()
}

/// Site link for a proposal. ERC-category rows always link to the ERC page.
pub fn status_link(row: &CsvRow, chart_type: ChartType) -> String {
    if row.eip_category == "ERC" {
        format!("{}/ercs/erc-{}", SITE_BASE_URL, row.eip)
    } else if chart_type == ChartType::Eips {
        format!("{}/eips/eip-{}", SITE_BASE_URL, row.eip)
    } else {
        format!("{}/rips/rip-{}", SITE_BASE_URL, row.eip)
    }
}

/// Serialize rows, header first, one line per row, no trailing newline
pub fn render_csv(rows: &[CsvRow], chart_type: ChartType) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for row in rows {
        let year = row.year.to_string();
        let link = status_link(row, chart_type);
        let fields = [
            row.eip.as_str(),
            row.last_status.as_str(),
            row.eip_title.as_str(),
            row.eip_category.as_str(),
            year.as_str(),
            link.as_str(),
        ];
        lines.push(
            fields
                .iter()
                .map(|f| escape_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

/// `StatusChart_<from|start>-<to|end>.csv`
pub fn csv_file_name(range: YearRange) -> String {
    let from = range
        .from
        .map(|y| y.to_string())
        .unwrap_or_else(|| "start".to_string());
    let to = range
        .to
        .map(|y| y.to_string())
        .unwrap_or_else(|| "end".to_string());
    format!("StatusChart_{}-{}.csv", from, to)
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
