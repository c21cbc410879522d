pub mod chart;
pub mod error;
pub mod merge;
pub mod models;
pub mod status_by_year;
pub mod taxonomy;

#[cfg(test)]
mod tests;

pub use chart::chart_point::{ChartPoint, StackedCount};
pub use chart::chart_type::ChartType;
pub use chart::csv_export::{CsvRow, csv_file_name, export_rows, render_csv, status_link};
pub use chart::derive::{available_years, derive_points, stacked_counts};
pub use chart::year_range::YearRange;
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use merge::{apply_name_update, apply_server_tier, merge_user_records};
pub use models::final_status::{FinalStatus, FinalStatusByYear, StatusYearEntry};
pub use models::repo::Repo;
pub use models::status_aggregation::StatusAggregation;
pub use models::status_change::{StatusChange, TaggedStatusChange};
pub use models::tier::Tier;
pub use models::user_account::UserAccount;
pub use models::user_patch::UserPatch;
pub use models::user_record::UserRecord;
pub use status_by_year::final_status_by_year;
pub use taxonomy::category_bucket::CategoryBucket;
pub use taxonomy::status_bucket::StatusBucket;
