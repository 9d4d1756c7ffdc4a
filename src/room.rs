//! Room management for multiplayer game sessions.
//!
//! A room is a short-lived lobby with a fixed game family, an ordered seat
//! list whose colors come from the family's color set, and a spectator
//! overflow. Seats survive disconnects: identity is {room id, display
//! name}, so a returning connection with a known name rebinds to its seat.
//! When the last live connection leaves, a grace timer arms; any join
//! cancels it, otherwise the room is deleted.

use crate::games::{Engine, GameKind};
use serde::Serialize;
use std::{
  collections::HashMap,
  sync::Arc,
  time::Duration,
};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

/// Transient connection identifier, 1:1 with a live socket.
pub type ConnId = u64;

pub const ROOM_ID_LEN: usize = 6;
pub const DELETE_GRACE: Duration = Duration::from_secs(60);

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A stable position in a room. The connection handle is null while its
/// owner is disconnected; the name and color persist.
#[derive(Debug)]
pub struct Seat {
  pub name: String,
  pub color: &'static str,
  pub conn: Option<ConnId>,
}

#[derive(Debug)]
pub struct Spectator {
  pub conn: ConnId,
  pub name: String,
}

/// Public projection of one seat, used in `room_update` and state payloads.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerEntry {
  pub name: String,
  pub color: String,
  pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
  pub color: String,
  pub reconnected: bool,
  pub is_player: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOutcome {
  pub room_id: String,
  pub was_player: bool,
  pub name: String,
}

pub struct Room {
  pub id: String,
  pub kind: GameKind,
  pub seats: Vec<Seat>,
  pub spectators: Vec<Spectator>,
  /// Non-null only between game start and game over.
  pub engine: Option<Engine>,
  /// Seat index of an outstanding undo request.
  pub pending_undo: Option<usize>,
  delete_timer: Option<JoinHandle<()>>,
}

impl Room {
  fn new(id: String, kind: GameKind) -> Self {
    Self {
      id,
      kind,
      seats: Vec::new(),
      spectators: Vec::new(),
      engine: None,
      pending_undo: None,
      delete_timer: None,
    }
  }

  /// Seat a connection, preferring its existing seat when the name
  /// matches. Falls back to the spectator list once all seats are taken.
  pub fn join(&mut self, conn: ConnId, name: &str) -> JoinOutcome {
    if let Some(seat) = self.seats.iter_mut().find(|s| s.name == name) {
      seat.conn = Some(conn);
      return JoinOutcome {
        color: seat.color.to_string(),
        reconnected: true,
        is_player: true,
      };
    }
    let colors = self.kind.seat_colors();
    if self.seats.len() < colors.len() {
      let color = colors[self.seats.len()];
      self.seats.push(Seat {
        name: name.to_string(),
        color,
        conn: Some(conn),
      });
      return JoinOutcome {
        color: color.to_string(),
        reconnected: false,
        is_player: true,
      };
    }
    self.spectators.push(Spectator {
      conn,
      name: name.to_string(),
    });
    JoinOutcome {
      color: "spectator".to_string(),
      reconnected: false,
      is_player: false,
    }
  }

  /// Detach a connection. Seats are kept (cleared) for reconnection;
  /// spectators are dropped outright.
  pub fn leave(&mut self, conn: ConnId) -> Option<LeaveOutcome> {
    if let Some(seat) = self.seats.iter_mut().find(|s| s.conn == Some(conn)) {
      seat.conn = None;
      return Some(LeaveOutcome {
        room_id: self.id.clone(),
        was_player: true,
        name: seat.name.clone(),
      });
    }
    if let Some(pos) = self.spectators.iter().position(|s| s.conn == conn) {
      let spectator = self.spectators.remove(pos);
      return Some(LeaveOutcome {
        room_id: self.id.clone(),
        was_player: false,
        name: spectator.name,
      });
    }
    None
  }

  pub fn live_seat_count(&self) -> usize {
    self.seats.iter().filter(|s| s.conn.is_some()).count()
  }

  pub fn seat_index_by_name(&self, name: &str) -> Option<usize> {
    self.seats.iter().position(|s| s.name == name)
  }

  pub fn seat_index_by_conn(&self, conn: ConnId) -> Option<usize> {
    self.seats.iter().position(|s| s.conn == Some(conn))
  }

  pub fn players(&self) -> Vec<PlayerEntry> {
    self
      .seats
      .iter()
      .map(|s| PlayerEntry {
        name: s.name.clone(),
        color: s.color.to_string(),
        connected: s.conn.is_some(),
      })
      .collect()
  }

  pub fn spectator_names(&self) -> Vec<String> {
    self.spectators.iter().map(|s| s.name.clone()).collect()
  }

  /// Every live connection in the room, seats then spectators.
  pub fn connections(&self) -> Vec<ConnId> {
    self
      .seats
      .iter()
      .filter_map(|s| s.conn)
      .chain(self.spectators.iter().map(|s| s.conn))
      .collect()
  }

  fn cancel_delete_timer(&mut self) {
    if let Some(handle) = self.delete_timer.take() {
      handle.abort();
    }
  }
}

/// Manager for all rooms in the server.
pub struct RoomManager {
  rooms: Arc<RwLock<HashMap<String, Arc<Mutex<Room>>>>>,
  grace: Duration,
}

impl RoomManager {
  pub fn new() -> Self {
    Self::with_grace(DELETE_GRACE)
  }

  pub fn with_grace(grace: Duration) -> Self {
    Self {
      rooms: Arc::new(RwLock::new(HashMap::new())),
      grace,
    }
  }

  /// Create an empty room for the family and return its id.
  pub async fn create_room(&self, kind: GameKind) -> String {
    let mut rooms = self.rooms.write().await;
    loop {
      let id = generate_room_id();
      if rooms.contains_key(&id) {
        continue;
      }
      rooms.insert(id.clone(), Arc::new(Mutex::new(Room::new(id.clone(), kind))));
      tracing::info!("Created {:?} room {}", kind, id);
      return id;
    }
  }

  pub async fn get_room(&self, room_id: &str) -> Option<Arc<Mutex<Room>>> {
    self.rooms.read().await.get(room_id).cloned()
  }

  pub async fn room_count(&self) -> usize {
    self.rooms.read().await.len()
  }

  /// Join (or rejoin) a room. Cancels any pending deletion.
  pub async fn join_room(&self, room_id: &str, conn: ConnId, name: &str) -> Option<JoinOutcome> {
    let room = self.get_room(room_id).await?;
    let mut room = room.lock().await;
    room.cancel_delete_timer();
    Some(room.join(conn, name))
  }

  /// Detach a connection from its room. When no live seats remain, a grace
  /// timer is armed; it re-checks before deleting so a reconnect in the
  /// window keeps the room alive.
  pub async fn leave_room(&self, room_id: &str, conn: ConnId) -> Option<LeaveOutcome> {
    let room = self.get_room(room_id).await?;
    let mut guard = room.lock().await;
    let outcome = guard.leave(conn)?;
    if guard.live_seat_count() == 0 {
      guard.cancel_delete_timer();
      let rooms = self.rooms.clone();
      let id = guard.id.clone();
      let grace = self.grace;
      guard.delete_timer = Some(tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        let room = match rooms.read().await.get(&id).cloned() {
          Some(room) => room,
          None => return,
        };
        let still_empty = room.lock().await.live_seat_count() == 0;
        if still_empty {
          rooms.write().await.remove(&id);
          tracing::info!("Deleted idle room {}", id);
        }
      }));
    }
    Some(outcome)
  }
}

impl Default for RoomManager {
  fn default() -> Self {
    Self::new()
  }
}

impl Clone for RoomManager {
  fn clone(&self) -> Self {
    Self {
      rooms: self.rooms.clone(),
      grace: self.grace,
    }
  }
}

fn generate_room_id() -> String {
  use rand::Rng;
  let mut rng = rand::thread_rng();
  (0..ROOM_ID_LEN)
    .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
    .collect()
}

/// ######################################## TESTS ########################################

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn room_ids_are_six_uppercase_alphanumerics() {
    let manager = RoomManager::new();
    let id = manager.create_room(GameKind::Chess).await;
    assert_eq!(id.len(), ROOM_ID_LEN);
    assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
    assert_eq!(manager.room_count().await, 1);
  }

  #[tokio::test]
  async fn seats_fill_in_color_order_then_spectate() {
    let manager = RoomManager::new();
    let id = manager.create_room(GameKind::Chess).await;

    let first = manager.join_room(&id, 1, "ann").await.unwrap();
    assert_eq!(first.color, "white");
    assert!(!first.reconnected);

    let second = manager.join_room(&id, 2, "bob").await.unwrap();
    assert_eq!(second.color, "black");

    let third = manager.join_room(&id, 3, "eve").await.unwrap();
    assert_eq!(third.color, "spectator");
    assert!(!third.is_player);

    let room = manager.get_room(&id).await.unwrap();
    let room = room.lock().await;
    assert_eq!(room.players().len(), 2);
    assert_eq!(room.spectator_names(), vec!["eve"]);
    assert_eq!(room.connections(), vec![1, 2, 3]);
  }

  #[tokio::test]
  async fn reconnection_matches_by_name_and_keeps_the_seat() {
    let manager = RoomManager::new();
    let id = manager.create_room(GameKind::Xiangqi).await;
    manager.join_room(&id, 1, "ann").await.unwrap();

    let outcome = manager.leave_room(&id, 1).await.unwrap();
    assert!(outcome.was_player);
    assert_eq!(outcome.name, "ann");

    // A brand-new connection under the same name rebinds.
    let rejoin = manager.join_room(&id, 9, "ann").await.unwrap();
    assert!(rejoin.reconnected);
    assert_eq!(rejoin.color, "red");

    let room = manager.get_room(&id).await.unwrap();
    let room = room.lock().await;
    assert_eq!(room.seat_index_by_conn(9), Some(0));
    assert_eq!(room.live_seat_count(), 1);
  }

  #[tokio::test]
  async fn missing_room_yields_none() {
    let manager = RoomManager::new();
    assert!(manager.join_room("NOPE42", 1, "ann").await.is_none());
  }

  #[tokio::test(start_paused = true)]
  async fn empty_room_is_deleted_after_the_grace_window() {
    let manager = RoomManager::with_grace(Duration::from_secs(60));
    let id = manager.create_room(GameKind::Chess).await;
    manager.join_room(&id, 1, "ann").await.unwrap();
    manager.leave_room(&id, 1).await.unwrap();

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(manager.room_count().await, 0);
  }

  #[tokio::test(start_paused = true)]
  async fn rejoin_cancels_the_deletion_timer() {
    let manager = RoomManager::with_grace(Duration::from_secs(60));
    let id = manager.create_room(GameKind::Chess).await;
    manager.join_room(&id, 1, "ann").await.unwrap();
    manager.leave_room(&id, 1).await.unwrap();

    tokio::time::sleep(Duration::from_secs(30)).await;
    manager.join_room(&id, 2, "ann").await.unwrap();

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(manager.room_count().await, 1);
  }

  #[tokio::test]
  async fn spectators_are_dropped_on_leave() {
    let manager = RoomManager::new();
    let id = manager.create_room(GameKind::Chess).await;
    manager.join_room(&id, 1, "ann").await.unwrap();
    manager.join_room(&id, 2, "bob").await.unwrap();
    manager.join_room(&id, 3, "eve").await.unwrap();

    let outcome = manager.leave_room(&id, 3).await.unwrap();
    assert!(!outcome.was_player);

    let room = manager.get_room(&id).await.unwrap();
    assert!(room.lock().await.spectator_names().is_empty());
  }
}
