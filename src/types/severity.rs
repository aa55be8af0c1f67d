use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification result, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Normal,
    Warning,
    Critical,
}

impl SeverityLevel {
    /// Fixed color token for badges and progress bars
    pub fn color(&self) -> &'static str {
        match self {
            SeverityLevel::Normal => "#67c23a",
            SeverityLevel::Warning => "#e6a23c",
            SeverityLevel::Critical => "#f56c6c",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Normal => "Normal",
            SeverityLevel::Warning => "Warning",
            SeverityLevel::Critical => "Critical",
        }
    }

    /// Icon identifier for status badges
    pub fn icon(&self) -> &'static str {
        match self {
            SeverityLevel::Normal => "ri:checkbox-circle-line",
            SeverityLevel::Warning => "ri:error-warning-line",
            SeverityLevel::Critical => "ri:close-circle-line",
        }
    }

    /// Get the lowercase name used in wire formats
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Normal => "normal",
            SeverityLevel::Warning => "warning",
            SeverityLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
