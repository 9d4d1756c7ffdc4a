//! Per-IP rate limiting for fresh room joins.

use std::{
  collections::HashMap,
  sync::Arc,
  time::{Duration, Instant},
};
use tokio::sync::RwLock;

/// Configuration for join rate limiting.
#[derive(Debug, Clone)]
pub struct JoinLimits {
  /// Maximum fresh joins per time window.
  pub max_joins_per_window: u32,
  /// Sliding window for the cap.
  pub window: Duration,
}

impl Default for JoinLimits {
  fn default() -> Self {
    Self {
      max_joins_per_window: 10,
      window: Duration::from_secs(60),
    }
  }
}

/// Sliding-window join limiter keyed by client IP. Reconnections bypass
/// the limiter entirely; only fresh joins are counted.
pub struct JoinLimiter {
  limits: JoinLimits,
  states: Arc<RwLock<HashMap<String, Vec<Instant>>>>,
}

impl JoinLimiter {
  pub fn new(limits: JoinLimits) -> Self {
    Self {
      limits,
      states: Arc::new(RwLock::new(HashMap::new())),
    }
  }

  /// Record one fresh join attempt from `ip` and report whether it is
  /// allowed. Returns false once the window cap is hit.
  pub async fn check_allowed(&self, ip: &str) -> bool {
    let mut states = self.states.write().await;
    let times = states.entry(ip.to_string()).or_default();

    let cutoff = Instant::now() - self.limits.window;
    times.retain(|&t| t > cutoff);

    if times.len() >= self.limits.max_joins_per_window as usize {
      tracing::warn!("Join rate limit exceeded for {}", ip);
      return false;
    }
    times.push(Instant::now());
    true
  }

  /// Reset limiter state for one IP (e.g. for testing or admin actions).
  pub async fn reset(&self, ip: &str) {
    self.states.write().await.remove(ip);
  }
}

impl Clone for JoinLimiter {
  fn clone(&self) -> Self {
    Self {
      limits: self.limits.clone(),
      states: self.states.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn caps_fresh_joins_per_ip() {
    let limiter = JoinLimiter::new(JoinLimits {
      max_joins_per_window: 3,
      window: Duration::from_secs(60),
    });
    for _ in 0..3 {
      assert!(limiter.check_allowed("10.0.0.1").await);
    }
    assert!(!limiter.check_allowed("10.0.0.1").await);
    // A different IP has its own budget.
    assert!(limiter.check_allowed("10.0.0.2").await);
  }

  #[tokio::test]
  async fn window_expiry_frees_the_budget() {
    let limiter = JoinLimiter::new(JoinLimits {
      max_joins_per_window: 1,
      window: Duration::from_millis(20),
    });
    assert!(limiter.check_allowed("10.0.0.1").await);
    assert!(!limiter.check_allowed("10.0.0.1").await);
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(limiter.check_allowed("10.0.0.1").await);
  }

  #[tokio::test]
  async fn reset_clears_state() {
    let limiter = JoinLimiter::new(JoinLimits {
      max_joins_per_window: 1,
      window: Duration::from_secs(60),
    });
    assert!(limiter.check_allowed("10.0.0.1").await);
    assert!(!limiter.check_allowed("10.0.0.1").await);
    limiter.reset("10.0.0.1").await;
    assert!(limiter.check_allowed("10.0.0.1").await);
  }
}
