use chrono::{DateTime, Utc};

const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
const SPEED_UNITS: [&str; 4] = ["B/s", "KB/s", "MB/s", "GB/s"];

/// Format a byte count with a 1024-based unit suffix
///
/// Missing or non-positive counts render as "0 B". Trailing zeros in
/// the fraction are trimmed ("1.50 KB" renders as "1.5 KB").
pub fn format_bytes(bytes: Option<f64>, decimals: usize) -> String {
    let bytes = match bytes {
        Some(b) if b > 0.0 => b,
        _ => return "0 B".to_string(),
    };
    let exponent = scale_exponent(bytes, BYTE_UNITS.len());
    let scaled = bytes / 1024_f64.powi(exponent as i32);
    format!("{} {}", trim_fraction(scaled, decimals), BYTE_UNITS[exponent])
}

/// Format a transfer rate with a 1024-based unit suffix, two decimals
pub fn format_network_speed(bytes_per_second: Option<f64>) -> String {
    let rate = match bytes_per_second {
        Some(r) if r > 0.0 => r,
        _ => return "0 B/s".to_string(),
    };
    let exponent = scale_exponent(rate, SPEED_UNITS.len());
    let scaled = rate / 1024_f64.powi(exponent as i32);
    format!("{} {}", trim_fraction(scaled, 2), SPEED_UNITS[exponent])
}

/// Format an integer with thousands separators
pub fn format_number(value: Option<i64>) -> String {
    let value = match value {
        Some(v) => v,
        None => return "0".to_string(),
    };
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an uptime in seconds as days/hours/minutes
pub fn format_uptime(seconds: Option<u64>) -> String {
    let seconds = match seconds {
        Some(s) if s > 0 => s,
        _ => return "N/A".to_string(),
    };
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format a timestamp for display
pub fn format_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "N/A".to_string(),
    }
}

fn scale_exponent(value: f64, unit_count: usize) -> usize {
    let exponent = (value.ln() / 1024_f64.ln()).floor();
    if exponent < 0.0 {
        return 0;
    }
    (exponent as usize).min(unit_count - 1)
}

fn trim_fraction(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
