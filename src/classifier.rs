use dashmap::DashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::collections::HashMap;
use std::str::FromStr;

use crate::types::{MetricCategory, SeverityLevel, ThresholdError, ThresholdLevel};

/// Built-in default breakpoints for a category
fn builtin_default(category: MetricCategory) -> ThresholdLevel {
    match category {
        MetricCategory::Cpu => ThresholdLevel::new(50.0, 80.0, 90.0),
        MetricCategory::Memory => ThresholdLevel::new(60.0, 80.0, 90.0),
        MetricCategory::Disk => ThresholdLevel::new(70.0, 85.0, 95.0),
        MetricCategory::Temperature => ThresholdLevel::new(50.0, 70.0, 85.0),
        MetricCategory::Network => ThresholdLevel::new(60.0, 80.0, 90.0),
    }
}

/// A single stop in a progress-bar gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: &'static str,
    pub percentage: f64,
}

/// Presentation bundle for one classified reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedMetric {
    pub level: SeverityLevel,
    pub color: String,
    pub label: String,
    pub icon: String,
}

impl ClassifiedMetric {
    fn from_level(level: SeverityLevel) -> Self {
        Self {
            level,
            color: level.color().to_string(),
            label: level.label().to_string(),
            icon: level.icon().to_string(),
        }
    }
}

/// Classifier mapping raw metric readings to severity levels and
/// presentation attributes under a live-updatable threshold table
///
/// The host constructs one instance at startup and shares it; reads and
/// updates may race freely, each read sees either the old or the new
/// breakpoint triple, never a torn one.
pub struct ThresholdClassifier {
    thresholds: DashMap<MetricCategory, ThresholdLevel>,
}

impl ThresholdClassifier {
    /// Create a classifier seeded with the built-in default thresholds
    pub fn new() -> Self {
        let thresholds = DashMap::new();
        for category in MetricCategory::ALL {
            thresholds.insert(category, builtin_default(category));
        }
        Self { thresholds }
    }

    /// Classify a reading against the current thresholds
    ///
    /// Both breakpoints are inclusive lower bounds, so a reading equal
    /// to a breakpoint takes the more severe level. Readings that
    /// compare false against every breakpoint (including NaN) fall
    /// through to Normal, and a category missing from the table
    /// classifies as Normal rather than erroring.
    pub fn classify(&self, category: MetricCategory, value: f64) -> SeverityLevel {
        let threshold = match self.thresholds.get(&category) {
            Some(t) => *t,
            None => return SeverityLevel::Normal,
        };
        if value >= threshold.critical {
            SeverityLevel::Critical
        } else if value >= threshold.warning {
            SeverityLevel::Warning
        } else {
            SeverityLevel::Normal
        }
    }

    /// Color token for a reading
    pub fn color_for(&self, category: MetricCategory, value: f64) -> &'static str {
        self.classify(category, value).color()
    }

    /// Human-readable label for a reading
    pub fn label_for(&self, category: MetricCategory, value: f64) -> &'static str {
        self.classify(category, value).label()
    }

    /// Icon identifier for a reading
    pub fn icon_for(&self, category: MetricCategory, value: f64) -> &'static str {
        self.classify(category, value).icon()
    }

    /// Check whether a reading sits at or above a severity level
    pub fn is_at_least(
        &self,
        category: MetricCategory,
        value: f64,
        level: SeverityLevel,
    ) -> bool {
        self.classify(category, value) >= level
    }

    /// Gradient stops for rendering a progress bar
    ///
    /// Always exactly three stops in ascending breakpoint order. Each
    /// stop is clamped to at least the previous one and the final stop
    /// to at least 100, so a reconfigured table cannot produce a
    /// descending sequence.
    pub fn gradient_stops(&self, category: MetricCategory) -> SmallVec<[GradientStop; 3]> {
        let threshold = self
            .thresholds
            .get(&category)
            .map(|t| *t)
            .unwrap_or_else(|| builtin_default(category));

        let first = threshold.normal;
        let second = threshold.warning.max(first);
        let third = 100.0_f64.max(second);

        smallvec![
            GradientStop {
                color: SeverityLevel::Normal.color(),
                percentage: first,
            },
            GradientStop {
                color: SeverityLevel::Warning.color(),
                percentage: second,
            },
            GradientStop {
                color: SeverityLevel::Critical.color(),
                percentage: third,
            },
        ]
    }

    /// Progress color for a specific reading (alias for color_for())
    pub fn progress_color(&self, category: MetricCategory, value: f64) -> &'static str {
        self.color_for(category, value)
    }

    /// Percentage-to-color function for progress bars that take a
    /// callback
    ///
    /// The closure captures a snapshot of the category's current
    /// thresholds; later table updates do not affect it.
    pub fn progress_color_fn(&self, category: MetricCategory) -> impl Fn(f64) -> &'static str {
        let threshold = self
            .thresholds
            .get(&category)
            .map(|t| *t)
            .unwrap_or_else(|| builtin_default(category));
        move |percentage: f64| {
            if percentage >= threshold.critical {
                SeverityLevel::Critical.color()
            } else if percentage >= threshold.warning {
                SeverityLevel::Warning.color()
            } else {
                SeverityLevel::Normal.color()
            }
        }
    }

    /// Replace the thresholds for one category
    ///
    /// The new breakpoints must be strictly ascending; a rejected
    /// update leaves the table untouched. Takes effect on subsequent
    /// classify calls only.
    pub fn update_threshold(
        &self,
        category: MetricCategory,
        level: ThresholdLevel,
    ) -> Result<(), ThresholdError> {
        if let Err(err) = level.validate() {
            warn!("rejected {} threshold update: {}", category, err);
            return Err(err);
        }
        self.thresholds.insert(category, level);
        info!(
            "updated {} thresholds: normal={} warning={} critical={}",
            category, level.normal, level.warning, level.critical
        );
        Ok(())
    }

    /// Restore the built-in default thresholds for every category
    pub fn reset_thresholds(&self) {
        for category in MetricCategory::ALL {
            self.thresholds.insert(category, builtin_default(category));
        }
        info!("threshold table reset to defaults");
    }

    /// Snapshot of the current threshold table
    pub fn thresholds(&self) -> HashMap<MetricCategory, ThresholdLevel> {
        self.thresholds
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect()
    }

    /// Current thresholds for one category
    pub fn threshold_for(&self, category: MetricCategory) -> Option<ThresholdLevel> {
        self.thresholds.get(&category).map(|t| *t)
    }

    /// Classify a batch of named readings
    ///
    /// Names that do not parse as a known category are dropped from
    /// the result.
    pub fn batch_classify(
        &self,
        readings: &HashMap<String, f64>,
    ) -> HashMap<String, ClassifiedMetric> {
        let mut result = HashMap::with_capacity(readings.len());
        for (name, value) in readings {
            let category = match MetricCategory::from_str(name) {
                Ok(category) => category,
                Err(_) => continue,
            };
            let level = self.classify(category, *value);
            result.insert(name.clone(), ClassifiedMetric::from_level(level));
        }
        result
    }
}

impl Default for ThresholdClassifier {
    fn default() -> Self {
        Self::new()
    }
}
