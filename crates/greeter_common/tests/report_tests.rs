//! Tests for report capture and rendering.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};
use greeter_common::report::{COMPLETED, GREETING, INTEGRATION_OK};
use greeter_common::{FixedClock, GreeterConfig, GreeterError, NumberSequence, Report};

fn fixed_clock() -> FixedClock {
    let naive = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(7, 5, 3)
        .unwrap();
    FixedClock(Local.from_local_datetime(&naive).earliest().unwrap())
}

fn render(report: &Report) -> String {
    let mut buf = Vec::new();
    report.write_text(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_default_report_text() {
    let report = Report::capture(&fixed_clock(), &GreeterConfig::default()).unwrap();
    let expected = "🐹 Hello from Go in Turborepo!\n\
                    Go and Turborepo integration is working!\n\
                    Current time: 2024-03-09 07:05:03\n\
                    Sum of [1 2 3 4 5] = 15\n\
                    ✅ Go app completed successfully!\n";
    assert_eq!(render(&report), expected);
}

#[test]
fn test_lines_order() {
    let report = Report::capture(&fixed_clock(), &GreeterConfig::default()).unwrap();
    let lines = report.lines();
    assert_eq!(lines[0], GREETING);
    assert_eq!(lines[1], INTEGRATION_OK);
    assert!(lines[2].starts_with("Current time: "));
    assert_eq!(lines[3], "Sum of [1 2 3 4 5] = 15");
    assert_eq!(lines[4], COMPLETED);
}

#[test]
fn test_timestamp_parses_back() {
    let report = Report::capture(&fixed_clock(), &GreeterConfig::default()).unwrap();
    let parsed = NaiveDateTime::parse_from_str(&report.timestamp, "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(parsed.to_string(), "2024-03-09 07:05:03");
}

#[test]
fn test_repeated_capture_is_identical() {
    let clock = fixed_clock();
    let config = GreeterConfig::default();
    let first = Report::capture(&clock, &config).unwrap();
    let second = Report::capture(&clock, &config).unwrap();
    assert_eq!(render(&first), render(&second));
}

#[test]
fn test_configured_numbers() {
    let config = GreeterConfig {
        numbers: NumberSequence::from(vec![7, -2, 10]),
        ..GreeterConfig::default()
    };
    let report = Report::capture(&fixed_clock(), &config).unwrap();
    assert_eq!(report.lines()[3], "Sum of [7 -2 10] = 15");
}

#[test]
fn test_configured_time_format() {
    let config = GreeterConfig {
        time_format: "%H:%M".to_string(),
        ..GreeterConfig::default()
    };
    let report = Report::capture(&fixed_clock(), &config).unwrap();
    assert_eq!(report.lines()[2], "Current time: 07:05");
}

#[test]
fn test_overflow_fails_capture() {
    let config = GreeterConfig {
        numbers: NumberSequence::from(vec![i64::MAX, 1]),
        ..GreeterConfig::default()
    };
    let err = Report::capture(&fixed_clock(), &config).unwrap_err();
    assert!(matches!(err, GreeterError::Overflow { visited: 1, len: 2 }));
}

#[test]
fn test_json_report() {
    let report = Report::capture(&fixed_clock(), &GreeterConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["message"], GREETING);
    assert_eq!(value["status"], "working");
    assert_eq!(value["timestamp"], "2024-03-09 07:05:03");
    assert_eq!(value["numbers"], serde_json::json!([1, 2, 3, 4, 5]));
    assert_eq!(value["sum"], 15);
    assert_eq!(value["product"], 120);
    assert_eq!(value["squares"], serde_json::json!([1, 4, 9, 16, 25]));
    assert_eq!(value["completed"], COMPLETED);
}

#[test]
fn test_json_overflow_in_product() {
    let config = GreeterConfig {
        numbers: NumberSequence::from(vec![i64::MAX, -i64::MAX, 2]),
        ..GreeterConfig::default()
    };
    let report = Report::capture(&fixed_clock(), &config).unwrap();
    assert_eq!(report.sum, 2);
    assert!(report.to_json().is_err());
}
