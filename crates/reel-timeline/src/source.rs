//! Where viewing events come from.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reel_common::{validate_all, RawViewEvent, Result, ViewEvent};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Read access to the viewing history
#[async_trait]
pub trait ViewingHistorySource: Send + Sync {
    /// Events with `watched_at >= cutoff`, ordered by `watched_at`
    async fn events_since(&self, cutoff: NaiveDateTime) -> Result<Vec<ViewEvent>>;

    /// The full history, ordered by `watched_at`
    async fn all_events(&self) -> Result<Vec<ViewEvent>>;
}

/// History held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistorySource {
    events: Vec<ViewEvent>,
}

impl InMemoryHistorySource {
    /// Wrap `events`, ordering them by timestamp.
    pub fn new(mut events: Vec<ViewEvent>) -> Self {
        events.sort_by_key(|e| e.watched_at);
        Self { events }
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are stored.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[async_trait]
impl ViewingHistorySource for InMemoryHistorySource {
    async fn events_since(&self, cutoff: NaiveDateTime) -> Result<Vec<ViewEvent>> {
        Ok(since(&self.events, cutoff))
    }

    async fn all_events(&self) -> Result<Vec<ViewEvent>> {
        Ok(self.events.clone())
    }
}

/// History exported as a JSON array of raw records
///
/// The file is read on every call, so edits are picked up without a restart.
/// Every record is validated; the first malformed one fails the whole read.
#[derive(Debug, Clone)]
pub struct JsonFileHistorySource {
    path: PathBuf,
}

impl JsonFileHistorySource {
    /// Source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<ViewEvent>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let raw: Vec<RawViewEvent> = serde_json::from_str(&content)?;
        let mut events = validate_all(raw)?;
        events.sort_by_key(|e| e.watched_at);

        debug!(events = events.len(), "Loaded viewing history");
        Ok(events)
    }
}

#[async_trait]
impl ViewingHistorySource for JsonFileHistorySource {
    async fn events_since(&self, cutoff: NaiveDateTime) -> Result<Vec<ViewEvent>> {
        let events = self.load().await?;
        Ok(since(&events, cutoff))
    }

    async fn all_events(&self) -> Result<Vec<ViewEvent>> {
        self.load().await
    }
}

/// Tail of a time-ordered slice starting at `cutoff`.
fn since(events: &[ViewEvent], cutoff: NaiveDateTime) -> Vec<ViewEvent> {
    let start = events.partition_point(|e| e.watched_at < cutoff);
    events[start..].to_vec()
}
