pub mod classifier;
pub mod format;
pub mod types;

pub use classifier::{ClassifiedMetric, GradientStop, ThresholdClassifier};
pub use format::{
    format_bytes, format_network_speed, format_number, format_time, format_uptime,
};
pub use types::{
    MetricCategory, ParseCategoryError, SeverityLevel, ThresholdError, ThresholdLevel,
};
