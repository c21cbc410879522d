use crate::StatusBucket;

use serde::Serialize;

/// One status change plotted in the stacked column chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub status: StatusBucket,
    pub year: i32,
    pub value: u32,
}

/// Points summed per `(year, status)` column segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackedCount {
    pub year: i32,
    pub status: StatusBucket,
    pub value: u32,
}
