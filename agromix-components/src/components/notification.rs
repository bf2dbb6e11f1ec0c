//! Transient user-facing notifications.
//!
//! The calculators never talk to the user directly. Advisory messages go
//! through a [`Notifier`], which the host application implements with its
//! own toast/snackbar surface.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        write!(f, "{name}")
    }
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}

/// The notification surface.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Notifier that emits notifications as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => {
                tracing::info!(notification = true, "{}", notification.message)
            }
            NotificationLevel::Warning => {
                tracing::warn!(notification = true, "{}", notification.message)
            }
            NotificationLevel::Error => {
                tracing::error!(notification = true, "{}", notification.message)
            }
        }
    }
}
