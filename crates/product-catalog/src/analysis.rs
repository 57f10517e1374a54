//! Diagnostic product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category of diagnostic map, each with its own set of supported models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisType {
    /// Composite radar reflectivity with 850 hPa winds, mesoscale models.
    CompositeReflectivityWind,
    /// 24 h accumulated precipitation.
    Precipitation24h,
    /// 500 hPa geopotential height, 850 hPa winds and mean sea level pressure.
    Synoptic500,
}

impl AnalysisType {
    /// Stable identifier used in messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::CompositeReflectivityWind => "composite-reflectivity-and-wind",
            AnalysisType::Precipitation24h => "precipitation-24h",
            AnalysisType::Synoptic500 => "synoptic-500hpa",
        }
    }

    /// All known analysis types.
    pub fn all() -> &'static [AnalysisType] {
        &[
            AnalysisType::CompositeReflectivityWind,
            AnalysisType::Precipitation24h,
            AnalysisType::Synoptic500,
        ]
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
