use crate::{Client, ClientError, ClientResult, ExportReport};

use std::fs;
use std::path::Path;

use ei_core::{
    CategoryBucket, ChartPoint, ChartType, StackedCount, StatusYearEntry, YearRange,
    available_years, csv_file_name, derive_points, export_rows, render_csv, stacked_counts,
};
use log::{debug, info, warn};
use tokio::runtime::Handle;

/// The status chart: one fetch of the per-year final statuses, then every
/// view is derived from that dataset and the current selection.
pub struct StatusChartView {
    client: Client,
    data: Vec<StatusYearEntry>,
    pub category: CategoryBucket,
    pub chart_type: ChartType,
    pub range: YearRange,
}

impl StatusChartView {
    /// Fetch the dataset once
    pub async fn load(
        client: Client,
        category: CategoryBucket,
        chart_type: ChartType,
    ) -> ClientResult<Self> {
        let dataset = client.get_final_status_by_year().await?;
        info!("Loaded {} chart years", dataset.eip.len());

        Ok(Self::from_data(client, dataset.eip, category, chart_type))
    }

    pub fn from_data(
        client: Client,
        data: Vec<StatusYearEntry>,
        category: CategoryBucket,
        chart_type: ChartType,
    ) -> Self {
        Self {
            client,
            data,
            category,
            chart_type,
            range: YearRange::unbounded(),
        }
    }

    pub fn data(&self) -> &[StatusYearEntry] {
        &self.data
    }

    pub fn set_category(&mut self, category: CategoryBucket) {
        self.category = category;
    }

    pub fn set_range(&mut self, range: YearRange) {
        self.range = range;
    }

    pub fn points(&self) -> Vec<ChartPoint> {
        derive_points(&self.data, self.category, self.range)
    }

    pub fn stacked(&self) -> Vec<StackedCount> {
        stacked_counts(&self.points())
    }

    /// Years offered by the range pickers
    pub fn years(&self) -> Vec<i32> {
        available_years(&self.data)
    }

    /// Write `StatusChart_<from>-<to>.csv` into `dir`, then bump the
    /// download counter in the background. Outside a Tokio runtime the
    /// counter is skipped and only the file is written.
    pub fn export_csv(&self, dir: &Path) -> ClientResult<ExportReport> {
        let rows = export_rows(&self.data, self.category, self.range);
        let path = dir.join(csv_file_name(self.range));

        fs::write(&path, render_csv(&rows, self.chart_type))
            .map_err(|e| ClientError::export(path.clone(), e))?;
        info!("Exported {} rows to {path:?}", rows.len());

        let counter = match Handle::try_current() {
            Ok(handle) => {
                let client = self.client.clone();
                Some(handle.spawn(async move {
                    match client.increment_download_counter().await {
                        Ok(response) => debug!("Download count is now {}", response.count),
                        Err(e) => warn!("Failed to record download: {e}"),
                    }
                }))
            }
            Err(_) => {
                warn!("No async runtime; skipping download counter");
                None
            }
        };

        Ok(ExportReport {
            path,
            rows: rows.len(),
            counter,
        })
    }
}
