pub(crate) mod export_report;
pub(crate) mod status_chart_view;

pub use export_report::ExportReport;
pub use status_chart_view::StatusChartView;
