use serde::{Deserialize, Serialize};
use std::fmt;

/// Breakpoint triple separating normal/warning/critical for one category
/// Values are percentages or any comparable numeric scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdLevel {
    pub normal: f64,
    pub warning: f64,
    pub critical: f64,
}

impl ThresholdLevel {
    /// Create a new breakpoint triple
    pub fn new(normal: f64, warning: f64, critical: f64) -> Self {
        Self {
            normal,
            warning,
            critical,
        }
    }

    /// Check that the breakpoints are strictly ascending
    /// A triple containing NaN never validates
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !(self.normal < self.warning && self.warning < self.critical) {
            return Err(ThresholdError::new(format!(
                "breakpoints must be strictly ascending, got normal={} warning={} critical={}",
                self.normal, self.warning, self.critical
            )));
        }
        Ok(())
    }
}

/// Error type for rejected threshold updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdError {
    pub message: String,
}

impl ThresholdError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThresholdError: {}", self.message)
    }
}

impl std::error::Error for ThresholdError {}
