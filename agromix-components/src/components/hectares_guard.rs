//! Hectares-done guard
//!
//! Attendance records log the hectares worked on a job. When the running
//! total goes past the job's planned surface the user gets a warning, but
//! the record is always kept: the check is advisory and never blocks a
//! write.
//!
//! The planned surface is the job's applied hectares when set, falling back
//! to its theoretical hectares. A job with neither is never reported.

use super::notification::{Notification, Notifier};
use crate::parameters::HectaresGuardParameters;
use agromix_core::numeric::{lenient_decimal, lenient_decimal_opt, sanitize};
use agromix_core::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A log of work done on a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub job_id: String,
    #[serde(default, alias = "hectares_done", deserialize_with = "lenient_decimal")]
    pub hectares_done: FloatValue,
}

/// Sums the hectares done across `records`, ignoring negative values.
pub fn sum_hectares_done(records: &[AttendanceRecord]) -> FloatValue {
    records
        .iter()
        .map(|record| sanitize(record.hectares_done))
        .fold(0.0, |acc, hectares| acc + hectares)
}

/// Which of the job's surfaces the limit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitSource {
    Applied,
    Theoretical,
}

impl fmt::Display for LimitSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => write!(f, "applied"),
            Self::Theoretical => write!(f, "theoretical"),
        }
    }
}

/// The planned surface of a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSurface {
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub applied_hectares: Option<FloatValue>,
    #[serde(default, deserialize_with = "lenient_decimal_opt")]
    pub theoretical_hectares: Option<FloatValue>,
}

impl JobSurface {
    /// The surface to check against, with its source.
    ///
    /// A surface that is unset or not positive counts as absent.
    pub fn limit(&self) -> Option<(FloatValue, LimitSource)> {
        let present = |value: Option<FloatValue>| value.map(sanitize).filter(|v| *v > 0.0);
        present(self.applied_hectares)
            .map(|limit| (limit, LimitSource::Applied))
            .or_else(|| {
                present(self.theoretical_hectares).map(|limit| (limit, LimitSource::Theoretical))
            })
    }
}

/// Outcome of comparing hectares done against a job's surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum HectaresCheck {
    /// The job has no planned surface.
    NoLimit { total: FloatValue },
    WithinLimit {
        total: FloatValue,
        limit: FloatValue,
        source: LimitSource,
    },
    Exceeded {
        total: FloatValue,
        limit: FloatValue,
        source: LimitSource,
        excess: FloatValue,
    },
}

impl HectaresCheck {
    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }

    #[must_use]
    pub fn total(&self) -> FloatValue {
        match self {
            Self::NoLimit { total }
            | Self::WithinLimit { total, .. }
            | Self::Exceeded { total, .. } => *total,
        }
    }

    /// The advisory message for an exceeded surface.
    pub fn advisory(&self) -> Option<Notification> {
        match self {
            Self::Exceeded {
                total,
                limit,
                source,
                excess,
            } => Some(Notification::warning(format!(
                "Hectares done ({total:.2} ha) exceed the job's {source} surface \
                 ({limit:.2} ha) by {excess:.2} ha"
            ))),
            _ => None,
        }
    }
}

/// Advisory check of hectares done against a job's planned surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HectaresGuard {
    parameters: HectaresGuardParameters,
}

impl HectaresGuard {
    pub fn from_parameters(parameters: HectaresGuardParameters) -> Self {
        Self { parameters }
    }

    /// Compares `total_hectares_done` to the job's surface.
    ///
    /// Only a total strictly greater than the limit is reported.
    pub fn check(&self, total_hectares_done: FloatValue, surface: &JobSurface) -> HectaresCheck {
        let total = sanitize(total_hectares_done);
        match surface.limit() {
            None => HectaresCheck::NoLimit { total },
            Some((limit, source)) if total > limit => HectaresCheck::Exceeded {
                total,
                limit,
                source,
                excess: total - limit,
            },
            Some((limit, source)) => HectaresCheck::WithinLimit {
                total,
                limit,
                source,
            },
        }
    }

    /// Checks the total including a record about to be saved.
    ///
    /// An exceeded surface is reported through `notifier`. The result is
    /// informational only: the caller saves the record whatever it says.
    pub fn review(
        &self,
        existing: &[AttendanceRecord],
        pending_hectares: FloatValue,
        surface: &JobSurface,
        notifier: &dyn Notifier,
    ) -> HectaresCheck {
        let total = sum_hectares_done(existing) + sanitize(pending_hectares);
        let check = self.check(total, surface);

        if let HectaresCheck::Exceeded {
            total,
            limit,
            source,
            excess,
        } = &check
        {
            tracing::warn!(
                total = *total,
                limit = *limit,
                %source,
                excess = *excess,
                "Hectares done exceed the job surface"
            );
            if self.parameters.notify {
                if let Some(notification) = check.advisory() {
                    notifier.notify(notification);
                }
            }
        }

        check
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::NotificationLevel;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        received: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.received.borrow_mut().push(notification);
        }
    }

    fn record(hectares_done: FloatValue) -> AttendanceRecord {
        AttendanceRecord {
            id: "a".into(),
            job_id: "j".into(),
            hectares_done,
        }
    }

    #[test]
    fn test_sum_ignores_negative() {
        let records = [record(10.0), record(-3.0), record(2.5)];
        assert_eq!(sum_hectares_done(&records), 12.5);
    }

    #[test]
    fn test_limit_priority() {
        let surface = JobSurface {
            applied_hectares: Some(80.0),
            theoretical_hectares: Some(100.0),
        };
        assert_eq!(surface.limit(), Some((80.0, LimitSource::Applied)));

        let surface = JobSurface {
            applied_hectares: None,
            theoretical_hectares: Some(100.0),
        };
        assert_eq!(surface.limit(), Some((100.0, LimitSource::Theoretical)));

        let surface = JobSurface {
            applied_hectares: Some(0.0),
            theoretical_hectares: Some(100.0),
        };
        assert_eq!(surface.limit(), Some((100.0, LimitSource::Theoretical)));

        assert_eq!(JobSurface::default().limit(), None);
    }

    #[test]
    fn test_check_is_strict() {
        let guard = HectaresGuard::default();
        let surface = JobSurface {
            applied_hectares: Some(50.0),
            theoretical_hectares: None,
        };
        assert!(!guard.check(50.0, &surface).is_exceeded());
        assert!(guard.check(50.5, &surface).is_exceeded());
    }

    #[test]
    fn test_check_without_limit() {
        let guard = HectaresGuard::default();
        let check = guard.check(1000.0, &JobSurface::default());
        assert_eq!(check, HectaresCheck::NoLimit { total: 1000.0 });
        assert_eq!(check.advisory(), None);
    }

    #[test]
    fn test_review_notifies_on_excess() {
        let guard = HectaresGuard::default();
        let notifier = RecordingNotifier::default();
        let surface = JobSurface {
            applied_hectares: Some(100.0),
            theoretical_hectares: Some(200.0),
        };

        let check = guard.review(&[record(60.0), record(30.0)], 15.0, &surface, &notifier);

        assert_eq!(
            check,
            HectaresCheck::Exceeded {
                total: 105.0,
                limit: 100.0,
                source: LimitSource::Applied,
                excess: 5.0,
            }
        );
        let received = notifier.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].level, NotificationLevel::Warning);
        assert!(received[0].message.contains("applied"));
    }

    #[test]
    fn test_review_within_limit_is_silent() {
        let guard = HectaresGuard::default();
        let notifier = RecordingNotifier::default();
        let surface = JobSurface {
            applied_hectares: None,
            theoretical_hectares: Some(200.0),
        };

        let check = guard.review(&[record(60.0)], 15.0, &surface, &notifier);

        assert_eq!(check.total(), 75.0);
        assert!(!check.is_exceeded());
        assert!(notifier.received.borrow().is_empty());
    }

    #[test]
    fn test_review_with_notifications_disabled() {
        let guard = HectaresGuard::from_parameters(HectaresGuardParameters { notify: false });
        let notifier = RecordingNotifier::default();
        let surface = JobSurface {
            applied_hectares: Some(10.0),
            theoretical_hectares: None,
        };

        let check = guard.review(&[record(20.0)], 0.0, &surface, &notifier);

        assert!(check.is_exceeded());
        assert!(notifier.received.borrow().is_empty());
    }

    #[test]
    fn test_record_accepts_snake_case_and_text() {
        let record: AttendanceRecord =
            serde_json::from_str(r#"{"id": "a1", "jobId": "j1", "hectares_done": "12,5"}"#)
                .unwrap();
        assert_eq!(record.hectares_done, 12.5);
    }

    #[test]
    fn test_surface_accepts_text() {
        let surface: JobSurface =
            serde_json::from_str(r#"{"appliedHectares": "40", "theoreticalHectares": ""}"#)
                .unwrap();
        assert_eq!(surface.applied_hectares, Some(40.0));
        assert_eq!(surface.theoretical_hectares, None);
        assert_eq!(surface.limit(), Some((40.0, LimitSource::Applied)));
    }

    #[test]
    fn test_sum_of_no_records_is_positive_zero() {
        assert!(sum_hectares_done(&[]).is_sign_positive());
    }
}
