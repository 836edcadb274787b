//! Reports produced by the pipeline validate against the exported schema.

use chrono::{Duration, TimeZone, Utc};
use serde_json::{Value, json};
use sw_analysis::{AnalysisSettings, AuditInputs, run_audit};
use sw_core::{DateRange, ReportWindows, RunClock};
use sw_schema::{SchemaError, SchemaRegistry};

fn clock() -> RunClock {
    RunClock::at(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
}

fn post(id: u32, url: &str, age_days: i64, title: &str, body: &str) -> Value {
    let published = (clock().now() - Duration::days(age_days)).to_rfc3339();
    json!({
        "id": id,
        "link": url,
        "date": published,
        "modified": published,
        "title": {"rendered": title},
        "content": {"rendered": body},
    })
}

fn row(url: &str, clicks: u64, position: f64) -> Value {
    json!({"keys": [url], "clicks": clicks, "impressions": clicks * 30, "ctr": 0.03, "position": position})
}

fn inputs() -> AuditInputs {
    let windows = ReportWindows::ending(clock().today(), 3, 28).unwrap();
    AuditInputs {
        recent: Some(vec![row("/a", 40, 4.0), row("/b", 9, 13.0)]),
        prior: Some(vec![row("/a", 300, 3.0), row("/b", 9, 12.0)]),
        documents: Some(vec![
            post(1, "/a", 500, "Best Griddles 2025", "see /b"),
            post(2, "/b", 20, "Griddle Care", "back to /a"),
            post(3, "/c", 800, "Old Notes", "/a /b"),
        ]),
        windows: Some(windows),
    }
}

#[test]
fn full_report_is_valid() {
    let report = run_audit(&inputs(), &AnalysisSettings::default(), &clock());
    assert!(!report.decay_candidates.is_empty());
    assert!(!report.freshness.needs_year_update.is_empty());

    SchemaRegistry::new().validate_report(&report).unwrap();
}

#[test]
fn report_with_skipped_steps_is_valid() {
    let report = run_audit(&AuditInputs::default(), &AnalysisSettings::default(), &clock());
    SchemaRegistry::new().validate_report(&report).unwrap();
}

#[test]
fn tampered_report_is_rejected() {
    let report = run_audit(&inputs(), &AnalysisSettings::default(), &clock());
    let mut value = serde_json::to_value(&report).unwrap();
    value["stats"]["decay_count"] = json!("many");
    if let Some(root) = value.as_object_mut() {
        root.remove("freshness");
    }

    match SchemaRegistry::new().validate("report", &value) {
        Err(SchemaError::ValidationFailed { errors }) => assert!(errors.len() >= 2, "{errors:?}"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn window_schema_matches_dates() {
    let windows = ReportWindows {
        recent: DateRange {
            start: chrono::NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            end: chrono::NaiveDate::from_ymd_opt(2026, 2, 26).unwrap(),
        },
        prior: DateRange {
            start: chrono::NaiveDate::from_ymd_opt(2026, 1, 3).unwrap(),
            end: chrono::NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
        },
    };
    let registry = SchemaRegistry::new();
    registry.validate_value("report_windows", &windows).unwrap();
    assert!(registry
        .validate("report_windows", &json!({"recent": {"start": "2026-01-31"}}))
        .is_err());
}
