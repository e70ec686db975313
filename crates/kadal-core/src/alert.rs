use serde::{Deserialize, Serialize};

/// Display severity hint carried with every notice. `Destructive` maps to
/// the client's high-priority alert styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Default,
    Destructive,
}

/// Structured user-facing alert. The core never formats UI; consumers
/// decide how a notice is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        severity: AlertSeverity,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Delivery side of the alerting pipeline. Implementations must not fail:
/// dropping a notice is acceptable, propagating an error back into the
/// detection path is not.
pub trait NotificationSink {
    fn notify(&self, notice: Notice);
}
