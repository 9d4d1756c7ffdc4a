//! In-memory win counts per game family, with top-N aggregation. Nothing
//! here persists; the board empties on restart.

use crate::games::GameKind;
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
  pub name: String,
  pub wins: u32,
}

#[derive(Clone, Default)]
pub struct Leaderboard {
  wins: Arc<RwLock<HashMap<GameKind, HashMap<String, u32>>>>,
}

impl Leaderboard {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn record_win(&self, kind: GameKind, name: &str) {
    let mut wins = self.wins.write().await;
    *wins.entry(kind).or_default().entry(name.to_string()).or_insert(0) += 1;
  }

  /// Top `limit` names by wins, for one family or across all of them.
  pub async fn top(&self, kind: Option<GameKind>, limit: usize) -> Vec<LeaderboardEntry> {
    let wins = self.wins.read().await;
    let mut totals: HashMap<&str, u32> = HashMap::new();
    for (family, counts) in wins.iter() {
      if kind.is_some() && kind != Some(*family) {
        continue;
      }
      for (name, count) in counts {
        *totals.entry(name.as_str()).or_insert(0) += count;
      }
    }
    let mut entries: Vec<LeaderboardEntry> = totals
      .into_iter()
      .map(|(name, wins)| LeaderboardEntry {
        name: name.to_string(),
        wins,
      })
      .collect();
    entries.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(limit);
    entries
  }
}
