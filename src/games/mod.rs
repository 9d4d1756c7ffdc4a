//! The five authoritative game engines behind one dispatchable surface.
//!
//! Engines share the queries the dispatcher needs (`is_game_over`, winner,
//! per-recipient state payload) through the [`Engine`] tagged union; the
//! family verbs differ too much in arity for a single generic move
//! signature, so the dispatcher branches on the tag for those.

pub mod big_two;
pub mod bingo;
pub mod boggle;
pub mod cards;
pub mod chess;
pub mod wordlist;
pub mod xiangqi;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A game family. The serialized names are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
  Chess,
  Xiangqi,
  #[serde(rename = "chordaidi")]
  BigTwo,
  Boggle,
  Bingo,
}

impl GameKind {
  /// Ordered color labels; seat 0 is always the host/caller/first-to-act.
  pub fn seat_colors(&self) -> &'static [&'static str] {
    match self {
      GameKind::Chess => &["white", "black"],
      GameKind::Xiangqi => &["red", "black"],
      GameKind::BigTwo => &["south", "west", "north", "east"],
      GameKind::Boggle => &["red", "blue", "green", "purple"],
      GameKind::Bingo => &["caller", "p2", "p3", "p4", "p5", "p6", "p7", "p8"],
    }
  }

  /// How many seats must be filled before the host may start.
  pub fn min_seats(&self) -> usize {
    match self {
      GameKind::Chess | GameKind::Xiangqi => 2,
      GameKind::BigTwo => 4,
      GameKind::Boggle | GameKind::Bingo => 2,
    }
  }

  pub fn max_seats(&self) -> usize {
    self.seat_colors().len()
  }

  /// Do the chess-style verbs (`make_move`, undo, resign) apply?
  pub fn is_board_game(&self) -> bool {
    matches!(self, GameKind::Chess | GameKind::Xiangqi)
  }
}

/// A running engine. Created at `start_game`, dropped at game over.
pub enum Engine {
  Chess(chess::ChessGame),
  Xiangqi(xiangqi::XiangqiGame),
  BigTwo(big_two::BigTwoGame),
  Boggle(boggle::BoggleGame),
  Bingo(bingo::BingoGame),
}

impl Engine {
  /// Spin up a fresh engine for the family with `player_count` seats.
  pub fn start(kind: GameKind, player_count: usize) -> Self {
    let mut rng = StdRng::from_entropy();
    match kind {
      GameKind::Chess => Engine::Chess(chess::ChessGame::new()),
      GameKind::Xiangqi => Engine::Xiangqi(xiangqi::XiangqiGame::new()),
      GameKind::BigTwo => Engine::BigTwo(big_two::BigTwoGame::new(&mut rng)),
      GameKind::Boggle => Engine::Boggle(boggle::BoggleGame::new(player_count, &mut rng)),
      GameKind::Bingo => Engine::Bingo(bingo::BingoGame::new(player_count, &mut rng)),
    }
  }

  pub fn kind(&self) -> GameKind {
    match self {
      Engine::Chess(_) => GameKind::Chess,
      Engine::Xiangqi(_) => GameKind::Xiangqi,
      Engine::BigTwo(_) => GameKind::BigTwo,
      Engine::Boggle(_) => GameKind::Boggle,
      Engine::Bingo(_) => GameKind::Bingo,
    }
  }

  pub fn is_game_over(&self) -> bool {
    match self {
      Engine::Chess(g) => g.is_game_over(),
      Engine::Xiangqi(g) => g.is_game_over(),
      Engine::BigTwo(g) => g.is_game_over(),
      Engine::Boggle(g) => g.is_game_over(),
      Engine::Bingo(g) => g.is_game_over(),
    }
  }

  /// Family-specific winner representation: a color string, a seat index,
  /// a draw marker, or a list of bingo winners.
  pub fn winner_value(&self) -> Value {
    match self {
      Engine::Chess(g) => json!(g.winner()),
      Engine::Xiangqi(g) => json!(g.winner()),
      Engine::BigTwo(g) => json!(g.winner()),
      Engine::Boggle(g) => json!(g.winner()),
      Engine::Bingo(g) => json!(g.winners()),
    }
  }

  /// The state payload for one recipient. `seat` is the recipient's seat
  /// index, or `None` for spectators; only Big Two personalizes, and its
  /// hidden hands never leave the engine module.
  pub fn state_for(&self, seat: Option<usize>) -> Value {
    match self {
      Engine::Chess(g) => json!({
        "fen": g.fen(),
        "turn": g.turn().to_string(),
        "inCheck": g.in_check(),
        "isGameOver": g.is_game_over(),
        "winner": g.winner(),
      }),
      Engine::Xiangqi(g) => json!({
        "fen": g.fen(),
        "turn": g.turn().to_string(),
        "inCheck": g.in_check(),
        "isGameOver": g.is_game_over(),
        "winner": g.winner(),
      }),
      Engine::BigTwo(g) => {
        serde_json::to_value(g.view_for(seat)).expect("big two view serializes")
      }
      Engine::Boggle(g) => serde_json::to_value(g.view()).expect("boggle view serializes"),
      Engine::Bingo(g) => serde_json::to_value(g.view()).expect("bingo view serializes"),
    }
  }
}
