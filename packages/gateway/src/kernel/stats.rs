//! Fire-and-forget usage statistics emission.
//!
//! Events describe what a request did for later accounting. Emission never
//! blocks or alters the HTTP response: the HTTP emitter hands events to a
//! background task, and delivery failures are logged and dropped.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;
use uuid::Uuid;

/// What happened, for the stats sink.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatsEventKind {
    /// A primary gateway action completed.
    Request {
        method: String,
        path: String,
        status: u16,
    },
    /// An achievement grant side effect succeeded.
    Achievement { achievement_id: i64 },
    /// A pin purchase was debited.
    PinPurchase { pin_id: i64 },
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsEvent {
    pub event_id: Uuid,
    pub user_id: i64,
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: StatsEventKind,
}

impl StatsEvent {
    pub fn new(user_id: i64, kind: StatsEventKind) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            user_id,
            recorded_at: Utc::now(),
            kind,
        }
    }
}

/// Sink for stats events. Implementations must not block the caller.
pub trait BaseStatsEmitter: Send + Sync {
    fn emit(&self, event: StatsEvent);
}

/// Emitter that drops every event. Used when no stats backend is configured.
pub struct NoopStatsEmitter;

impl BaseStatsEmitter for NoopStatsEmitter {
    fn emit(&self, _event: StatsEvent) {}
}

/// Emitter that forwards events to the stats service over HTTP from a
/// background task.
pub struct HttpStatsEmitter {
    sender: mpsc::UnboundedSender<StatsEvent>,
}

impl HttpStatsEmitter {
    /// Spawn the background drain task and return the emitter handle.
    pub fn spawn(base_url: String, client: reqwest::Client) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<StatsEvent>();

        tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                let result = client
                    .post(format!("{base_url}/api/stats/"))
                    .json(&event)
                    .send()
                    .await;
                match result {
                    Ok(response) if !response.status().is_success() => {
                        tracing::debug!(
                            status = %response.status(),
                            event_id = %event.event_id,
                            "Stats service rejected event"
                        );
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, event_id = %event.event_id, "Failed to deliver stats event");
                    }
                    _ => {}
                }
            }
        });

        Self { sender }
    }
}

impl BaseStatsEmitter for HttpStatsEmitter {
    fn emit(&self, event: StatsEvent) {
        // The receiver lives for the process lifetime; a send failure only
        // happens during shutdown and the event is simply dropped.
        let _ = self.sender.send(event);
    }
}
