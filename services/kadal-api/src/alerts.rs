use kadal_core::{now_epoch_millis, AlertSeverity, EpochMillis, Notice, NotificationSink};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::broadcast;

const HISTORY_CAPACITY: usize = 50;
const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Serialize)]
pub struct StoredAlert {
    pub raised_at_ms: EpochMillis,
    #[serde(flatten)]
    pub notice: Notice,
}

/// Fan-out point for every notice the service raises: logged, counted,
/// kept in a bounded history for `GET /v1/alerts`, and broadcast to SSE
/// subscribers. Dispatch never fails; a full history drops its oldest
/// entry and a missing subscriber is not an error.
pub struct AlertHub {
    history: Mutex<VecDeque<StoredAlert>>,
    sender: broadcast::Sender<StoredAlert>,
}

impl AlertHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            history: Mutex::new(VecDeque::with_capacity(HISTORY_CAPACITY)),
            sender,
        }
    }

    /// Most recent alerts, newest first.
    pub fn recent(&self) -> Vec<StoredAlert> {
        match self.history.lock() {
            Ok(history) => history.iter().rev().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoredAlert> {
        self.sender.subscribe()
    }
}

impl Default for AlertHub {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for AlertHub {
    fn notify(&self, notice: Notice) {
        let stored = StoredAlert {
            raised_at_ms: now_epoch_millis(),
            notice,
        };
        match stored.notice.severity {
            AlertSeverity::Destructive => tracing::warn!(
                title = %stored.notice.title,
                message = %stored.notice.message,
                "dispatching alert"
            ),
            AlertSeverity::Default => tracing::info!(
                title = %stored.notice.title,
                message = %stored.notice.message,
                "dispatching alert"
            ),
        }
        metrics::counter!("kadal_alerts_dispatched_total").increment(1);
        if let Ok(mut history) = self.history.lock() {
            if history.len() == HISTORY_CAPACITY {
                history.pop_front();
            }
            history.push_back(stored.clone());
        }
        let _ = self.sender.send(stored);
    }
}
