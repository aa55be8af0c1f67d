use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monitored resource dimension (e.g. "cpu", "memory")
/// Closed set; readings keyed by other names are not classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    Cpu,
    Memory,
    Disk,
    Temperature,
    Network,
}

impl MetricCategory {
    /// All categories, in dashboard display order
    pub const ALL: [MetricCategory; 5] = [
        MetricCategory::Cpu,
        MetricCategory::Memory,
        MetricCategory::Disk,
        MetricCategory::Temperature,
        MetricCategory::Network,
    ];

    /// Get the lowercase name used as a reading key
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricCategory::Cpu => "cpu",
            MetricCategory::Memory => "memory",
            MetricCategory::Disk => "disk",
            MetricCategory::Temperature => "temperature",
            MetricCategory::Network => "network",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for unrecognized category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    pub input: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric category: {}", self.input)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for MetricCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpu" => Ok(MetricCategory::Cpu),
            "memory" => Ok(MetricCategory::Memory),
            "disk" => Ok(MetricCategory::Disk),
            "temperature" => Ok(MetricCategory::Temperature),
            "network" => Ok(MetricCategory::Network),
            _ => Err(ParseCategoryError {
                input: s.to_string(),
            }),
        }
    }
}
