use chrono::{TimeZone, Utc};
use monitor_metrics::format::{
    format_bytes, format_network_speed, format_number, format_time, format_uptime,
};

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(None, 2), "0 B");
    assert_eq!(format_bytes(Some(0.0), 2), "0 B");
    assert_eq!(format_bytes(Some(512.0), 2), "512 B");
    assert_eq!(format_bytes(Some(1024.0), 2), "1 KB");
    assert_eq!(format_bytes(Some(1536.0), 2), "1.5 KB");
    assert_eq!(format_bytes(Some(1_048_576.0), 2), "1 MB");
    assert_eq!(format_bytes(Some(5_368_709_120.0), 2), "5 GB");
    assert_eq!(format_bytes(Some(1_572_864.0), 1), "1.5 MB");
}

#[test]
fn test_format_bytes_trims_trailing_zeros() {
    // 1.50 KB renders as 1.5 KB, 2.00 MB as 2 MB
    assert_eq!(format_bytes(Some(1536.0), 4), "1.5 KB");
    assert_eq!(format_bytes(Some(2_097_152.0), 2), "2 MB");
}

#[test]
fn test_format_network_speed() {
    assert_eq!(format_network_speed(None), "0 B/s");
    assert_eq!(format_network_speed(Some(0.0)), "0 B/s");
    assert_eq!(format_network_speed(Some(800.0)), "800 B/s");
    assert_eq!(format_network_speed(Some(2048.0)), "2 KB/s");
    assert_eq!(format_network_speed(Some(1_310_720.0)), "1.25 MB/s");
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(None), "0");
    assert_eq!(format_number(Some(0)), "0");
    assert_eq!(format_number(Some(999)), "999");
    assert_eq!(format_number(Some(1000)), "1,000");
    assert_eq!(format_number(Some(1_234_567)), "1,234,567");
    assert_eq!(format_number(Some(-45_678)), "-45,678");
}

#[test]
fn test_format_uptime() {
    assert_eq!(format_uptime(None), "N/A");
    assert_eq!(format_uptime(Some(0)), "N/A");
    assert_eq!(format_uptime(Some(59)), "0m");
    assert_eq!(format_uptime(Some(60)), "1m");
    assert_eq!(format_uptime(Some(3_660)), "1h 1m");
    assert_eq!(format_uptime(Some(90_061)), "1d 1h 1m");
    assert_eq!(format_uptime(Some(172_800)), "2d 0h 0m");
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(None), "N/A");

    let time = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
    assert_eq!(format_time(Some(time)), "2025-03-14 09:26:53");
}
