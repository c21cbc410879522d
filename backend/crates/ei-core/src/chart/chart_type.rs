use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Which proposal family a chart is rendered for; drives export links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    Eips,
    Ercs,
    Rips,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eips => "EIPs",
            Self::Ercs => "ERCs",
            Self::Rips => "RIPs",
        }
    }
}

impl FromStr for ChartType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "eips" | "eip" => Ok(Self::Eips),
            "ercs" | "erc" => Ok(Self::Ercs),
            "rips" | "rip" => Ok(Self::Rips),
            _ => Err(CoreError::InvalidChartType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
