//! Wire protocol: the named events exchanged with clients.
//!
//! Both directions use one JSON envelope, `{"event": <name>, "data": ...}`.
//! Event names and payload field names are part of the client contract and
//! must not change.

use crate::games::{cards::CardId, GameKind};
use crate::room::PlayerEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Commands a client may send.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientCommand {
  #[serde(rename_all = "camelCase")]
  JoinGame {
    #[serde(default)]
    room_id: Option<String>,
    player_name: String,
    #[serde(default)]
    reconnect: bool,
    #[serde(default)]
    game_type: Option<GameKind>,
  },
  StartGame,
  #[serde(rename_all = "camelCase")]
  MakeMove {
    from: String,
    to: String,
    #[serde(default)]
    promotion: Option<char>,
  },
  #[serde(rename_all = "camelCase")]
  CdiPlay { card_ids: Vec<CardId> },
  CdiPass,
  BoggleSubmit { word: String },
  BoggleEnd,
  BingoCall,
  RequestUndo,
  ApproveUndo,
  DeclineUndo,
  Resign,
  Ping,
}

/// Events the server emits.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
  #[serde(rename_all = "camelCase")]
  Joined {
    room_id: String,
    color: String,
    reconnected: bool,
  },
  RoomUpdate {
    players: Vec<PlayerEntry>,
    spectators: Vec<String>,
  },
  GameStarted,
  /// Family-shaped state payload, built by the engine per recipient.
  GameState(Value),
  GameOver {
    winner: Value,
    reason: String,
  },
  InvalidMove {
    reason: String,
  },
  Error {
    message: String,
  },
  BoggleAccept {
    word: String,
  },
  BoggleReject {
    word: String,
    reason: String,
  },
  #[serde(rename_all = "camelCase")]
  BoggleCounts {
    submission_counts: Vec<usize>,
  },
  UndoRequested {
    from: String,
  },
  UndoDeclined,
  #[serde(rename_all = "camelCase")]
  PlayerDisconnected {
    player_name: String,
  },
  Pong,
}
