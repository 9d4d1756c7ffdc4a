//! Fire-and-forget analytics events.
//!
//! The sink's whole contract: it never blocks a game loop and it never
//! surfaces an error. The channel-backed implementation drops events when
//! its buffer is full and lets a detached worker forward them; without a
//! configured endpoint the no-op sink is used instead.

use crate::games::GameKind;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;

const BUFFER: usize = 256;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
  pub name: &'static str,
  pub room: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub game: Option<GameKind>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub player: Option<String>,
  pub at: DateTime<Utc>,
}

impl AnalyticsEvent {
  pub fn new(name: &'static str, room: &str, game: Option<GameKind>, player: Option<&str>) -> Self {
    Self {
      name,
      room: room.to_string(),
      game,
      player: player.map(str::to_string),
      at: Utc::now(),
    }
  }
}

#[async_trait]
pub trait AnalyticsSink: Send + Sync {
  /// Hand off an event. Must return promptly and must never fail.
  async fn track(&self, event: AnalyticsEvent);
}

/// Sink used when no analytics endpoint is configured.
pub struct NoopAnalytics;

#[async_trait]
impl AnalyticsSink for NoopAnalytics {
  async fn track(&self, _event: AnalyticsEvent) {}
}

/// Bounded-channel sink with a detached worker. `try_send` keeps the game
/// loop from ever waiting; a full buffer silently drops the event.
pub struct ChannelAnalytics {
  tx: mpsc::Sender<AnalyticsEvent>,
}

impl ChannelAnalytics {
  pub fn spawn(endpoint: String) -> Self {
    let (tx, mut rx) = mpsc::channel::<AnalyticsEvent>(BUFFER);
    tokio::spawn(async move {
      while let Some(event) = rx.recv().await {
        match serde_json::to_string(&event) {
          Ok(body) => {
            tracing::debug!(endpoint = %endpoint, event = %body, "analytics event");
          }
          Err(e) => {
            tracing::debug!("analytics event dropped: {}", e);
          }
        }
      }
    });
    Self { tx }
  }
}

#[async_trait]
impl AnalyticsSink for ChannelAnalytics {
  async fn track(&self, event: AnalyticsEvent) {
    // Dropping on a full buffer is the contract, not a failure.
    let _ = self.tx.try_send(event);
  }
}

/// Pick the sink for the configured endpoint, if any.
pub fn sink_from(endpoint: Option<String>) -> Arc<dyn AnalyticsSink> {
  match endpoint {
    Some(endpoint) => Arc::new(ChannelAnalytics::spawn(endpoint)),
    None => Arc::new(NoopAnalytics),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn track_never_blocks_even_when_full() {
    let sink = ChannelAnalytics::spawn("http://localhost:1".into());
    // Far more events than the buffer holds; every call returns at once.
    for _ in 0..(BUFFER * 4) {
      sink
        .track(AnalyticsEvent::new("move", "ROOM01", Some(GameKind::Chess), Some("ann")))
        .await;
    }
  }

  #[tokio::test]
  async fn noop_sink_accepts_everything() {
    let sink = NoopAnalytics;
    sink
      .track(AnalyticsEvent::new("join", "ROOM01", None, Some("ann")))
      .await;
  }
}
