//! End-to-end use of the configured calculators for one job.

use agromix::prelude::*;
use approx::assert_relative_eq;
use std::cell::RefCell;

#[derive(Default)]
struct CollectingNotifier {
    messages: RefCell<Vec<Notification>>,
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notification: Notification) {
        self.messages.borrow_mut().push(notification);
    }
}

fn write_config(contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("agromix-{}.toml", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_configured_job_pass() {
    let path = write_config("[job]\ndefault_dose_caldo = 12.0\n");
    let config = AgroMixConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let entries = vec![
        ChemicalEntry::new("p1", "Glifosato", 2.0, "L/ha"),
        ChemicalEntry::new("p2", "Atrazina", 30.0, "kg"),
    ];
    let context = JobContext::new(25.0).with_total_job_hectares(100.0);

    let result = config.job_calculator().compute(&entries, &context);

    assert_relative_eq!(result.caldo_total, 300.0);
    assert_relative_eq!(result.total_liquid_products, 50.0);
    assert_relative_eq!(result.agua_litros, 250.0);
    assert_relative_eq!(result.entries[1].calculated_amount, 7.5);
}

#[test]
fn test_attendance_over_surface_is_saved_with_warning() {
    let config = AgroMixConfig::default();
    let guard = config.hectares_guard();
    let notifier = CollectingNotifier::default();

    let surface: JobSurface =
        serde_json::from_str(r#"{"appliedHectares": null, "theoreticalHectares": 40.0}"#)
            .unwrap();
    let mut records: Vec<AttendanceRecord> = serde_json::from_str(
        r#"[
            {"id": "a1", "jobId": "j1", "hectaresDone": 25},
            {"id": "a2", "jobId": "j1", "hectaresDone": "10"}
        ]"#,
    )
    .unwrap();

    let pending = AttendanceRecord {
        id: "a3".into(),
        job_id: "j1".into(),
        hectares_done: 8.0,
    };
    let check = guard.review(&records, pending.hectares_done, &surface, &notifier);
    records.push(pending);

    assert!(check.is_exceeded());
    assert_eq!(records.len(), 3);
    assert_relative_eq!(sum_hectares_done(&records), 43.0);
    assert_eq!(notifier.messages.borrow().len(), 1);
    assert!(notifier.messages.borrow()[0].message.contains("theoretical"));
}

#[test]
fn test_tracing_notifier_accepts_warnings() {
    let guard = HectaresGuard::default();
    let surface = JobSurface {
        applied_hectares: Some(1.0),
        theoretical_hectares: None,
    };
    let check = guard.review(&[], 2.0, &surface, &TracingNotifier);
    assert!(check.is_exceeded());
}
