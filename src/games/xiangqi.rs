//! Chinese chess (xiangqi) engine.
//!
//! The board is 10 ranks by 9 files, row 0 being Black's back rank; Red is
//! uppercase and moves first (`w` on the wire, mirroring the chess turn
//! letter). Rules enforced: palace confinement for generals and advisors,
//! the river boundary for elephants and pawn side-stepping, the horse-leg
//! block, the cannon's screen for captures, and the flying-general rule.
//! Xiangqi has no draw by stalemate: a side with no legal move loses.

use crate::error::GameError;
use anyhow::{bail, Context, Result};

pub const INITIAL_FEN: &str =
  "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w";

/// (row, col) with row 0 = Black's back rank.
type Sq = (usize, usize);

const ORTHO_DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAG_DIRS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const HORSE_JUMPS: [(i32, i32); 8] = [
  (-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1),
];

#[derive(Debug, Clone)]
struct Snapshot {
  board: [[Option<char>; 9]; 10],
  red_to_move: bool,
  game_over: bool,
}

pub struct XiangqiGame {
  board: [[Option<char>; 9]; 10],
  red_to_move: bool,
  game_over: bool,
  history: Vec<Snapshot>,
}

fn is_red(piece: char) -> bool {
  piece.is_ascii_uppercase()
}

fn offset(sq: Sq, dr: i32, dc: i32) -> Option<Sq> {
  let r = sq.0 as i32 + dr;
  let c = sq.1 as i32 + dc;
  if (0..10).contains(&r) && (0..9).contains(&c) {
    Some((r as usize, c as usize))
  } else {
    None
  }
}

/// Files run a..i; ranks run 1..10 counted from Red's side, so `e1` is
/// Red's general square and `e10` is Black's.
fn parse_square(s: &str) -> Option<Sq> {
  let bytes = s.as_bytes();
  if bytes.len() < 2 || bytes.len() > 3 {
    return None;
  }
  let col = bytes[0].checked_sub(b'a')? as usize;
  let rank: usize = s.get(1..)?.parse().ok()?;
  if col > 8 || !(1..=10).contains(&rank) {
    return None;
  }
  Some((10 - rank, col))
}

fn in_palace(red: bool, sq: Sq) -> bool {
  let rows = if red { 7..=9 } else { 0..=2 };
  rows.contains(&sq.0) && (3..=5).contains(&sq.1)
}

/// Has this side's piece crossed to the enemy half of the river?
fn crossed_river(red: bool, row: usize) -> bool {
  if red {
    row <= 4
  } else {
    row >= 5
  }
}

impl XiangqiGame {
  pub fn new() -> Self {
    Self::from_fen(INITIAL_FEN).expect("initial FEN is valid")
  }

  pub fn from_fen(fen: &str) -> Result<Self> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().context("missing piece placement")?;
    let side = fields.next().unwrap_or("w");

    let mut board = [[None; 9]; 10];
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 10 {
      bail!("expected 10 board rows, got {}", rows.len());
    }
    for (r, row) in rows.iter().enumerate() {
      let mut c = 0usize;
      for ch in row.chars() {
        if let Some(skip) = ch.to_digit(10) {
          c += skip as usize;
        } else {
          if c > 8 {
            bail!("row {} overflows the board", r);
          }
          board[r][c] = Some(ch);
          c += 1;
        }
      }
      if c != 9 {
        bail!("row {} has {} files", r, c);
      }
    }

    let red_to_move = match side {
      "w" => true,
      "b" => false,
      other => bail!("bad side to move: {}", other),
    };

    let mut game = Self {
      board,
      red_to_move,
      game_over: false,
      history: Vec::new(),
    };
    game.game_over = !game.any_legal_move();
    Ok(game)
  }

  pub fn fen(&self) -> String {
    let mut placement = String::new();
    for r in 0..10 {
      let mut empty = 0;
      for c in 0..9 {
        match self.board[r][c] {
          Some(p) => {
            if empty > 0 {
              placement.push_str(&empty.to_string());
              empty = 0;
            }
            placement.push(p);
          }
          None => empty += 1,
        }
      }
      if empty > 0 {
        placement.push_str(&empty.to_string());
      }
      if r < 9 {
        placement.push('/');
      }
    }
    format!("{} {}", placement, if self.red_to_move { 'w' } else { 'b' })
  }

  pub fn turn(&self) -> char {
    if self.red_to_move {
      'w'
    } else {
      'b'
    }
  }

  pub fn is_game_over(&self) -> bool {
    self.game_over
  }

  /// `red` or `black` once the game is over; the side with no legal move
  /// loses, stalemate included.
  pub fn winner(&self) -> Option<&'static str> {
    if !self.game_over {
      return None;
    }
    Some(if self.red_to_move { "black" } else { "red" })
  }

  pub fn in_check(&self) -> bool {
    self.side_in_check(self.red_to_move)
  }

  pub fn move_piece(&mut self, from: &str, to: &str) -> Result<(), GameError> {
    if self.game_over {
      return Err(GameError::GameOver);
    }
    let from = parse_square(from).ok_or(GameError::IllegalMove)?;
    let to = parse_square(to).ok_or(GameError::IllegalMove)?;

    let piece = self.board[from.0][from.1].ok_or(GameError::NoPieceAtSource)?;
    if is_red(piece) != self.red_to_move {
      return Err(GameError::NotYourPiece);
    }
    if !self.destinations(from).contains(&to) {
      return Err(GameError::IllegalMove);
    }

    let snapshot = self.snapshot();
    self.apply(from, to);
    if self.side_in_check(!self.red_to_move) {
      self.restore(snapshot);
      return Err(GameError::LeavesKingInCheck);
    }
    self.history.push(snapshot);
    self.game_over = !self.any_legal_move();
    Ok(())
  }

  /// Take back one ply. Returns false when there is nothing to undo.
  pub fn undo(&mut self) -> bool {
    match self.history.pop() {
      Some(snapshot) => {
        self.restore(snapshot);
        true
      }
      None => false,
    }
  }

  fn snapshot(&self) -> Snapshot {
    Snapshot {
      board: self.board,
      red_to_move: self.red_to_move,
      game_over: self.game_over,
    }
  }

  fn restore(&mut self, snapshot: Snapshot) {
    self.board = snapshot.board;
    self.red_to_move = snapshot.red_to_move;
    self.game_over = snapshot.game_over;
  }

  fn apply(&mut self, from: Sq, to: Sq) {
    let piece = self.board[from.0][from.1].take().expect("apply on empty source");
    self.board[to.0][to.1] = Some(piece);
    self.red_to_move = !self.red_to_move;
  }

  /// Pseudo-legal destination squares for the piece on `from`.
  fn destinations(&self, from: Sq) -> Vec<Sq> {
    let piece = match self.board[from.0][from.1] {
      Some(p) => p,
      None => return Vec::new(),
    };
    let red = is_red(piece);
    let mut out = Vec::new();

    let free_or_enemy = |sq: Sq| match self.board[sq.0][sq.1] {
      Some(p) => is_red(p) != red,
      None => true,
    };

    match piece.to_ascii_lowercase() {
      'k' => {
        for (dr, dc) in ORTHO_DIRS {
          if let Some(sq) = offset(from, dr, dc) {
            if in_palace(red, sq) && free_or_enemy(sq) {
              out.push(sq);
            }
          }
        }
      }
      'a' => {
        for (dr, dc) in DIAG_DIRS {
          if let Some(sq) = offset(from, dr, dc) {
            if in_palace(red, sq) && free_or_enemy(sq) {
              out.push(sq);
            }
          }
        }
      }
      'b' => {
        for (dr, dc) in DIAG_DIRS {
          let eye = match offset(from, dr, dc) {
            Some(sq) if self.board[sq.0][sq.1].is_none() => sq,
            _ => continue,
          };
          if let Some(sq) = offset(eye, dr, dc) {
            // Elephants never cross the river.
            if !crossed_river(red, sq.0) && free_or_enemy(sq) {
              out.push(sq);
            }
          }
        }
      }
      'n' => {
        for (dr, dc) in HORSE_JUMPS {
          let leg = if dr.abs() == 2 {
            offset(from, dr / 2, 0)
          } else {
            offset(from, 0, dc / 2)
          };
          match leg {
            Some(sq) if self.board[sq.0][sq.1].is_none() => {}
            _ => continue,
          }
          if let Some(sq) = offset(from, dr, dc) {
            if free_or_enemy(sq) {
              out.push(sq);
            }
          }
        }
      }
      'r' => {
        for (dr, dc) in ORTHO_DIRS {
          let mut cur = from;
          while let Some(next) = offset(cur, dr, dc) {
            match self.board[next.0][next.1] {
              None => out.push(next),
              Some(p) => {
                if is_red(p) != red {
                  out.push(next);
                }
                break;
              }
            }
            cur = next;
          }
        }
      }
      'c' => {
        for (dr, dc) in ORTHO_DIRS {
          let mut cur = from;
          let mut screens = 0;
          while let Some(next) = offset(cur, dr, dc) {
            match (screens, self.board[next.0][next.1]) {
              (0, None) => out.push(next),
              (0, Some(_)) => screens = 1,
              (1, Some(p)) => {
                // Jump capture over exactly one screen.
                if is_red(p) != red {
                  out.push(next);
                }
                break;
              }
              (1, None) => {}
              _ => break,
            }
            cur = next;
          }
        }
      }
      'p' => {
        let dir: i32 = if red { -1 } else { 1 };
        if let Some(sq) = offset(from, dir, 0) {
          if free_or_enemy(sq) {
            out.push(sq);
          }
        }
        if crossed_river(red, from.0) {
          for dc in [-1, 1] {
            if let Some(sq) = offset(from, 0, dc) {
              if free_or_enemy(sq) {
                out.push(sq);
              }
            }
          }
        }
      }
      _ => {}
    }
    out
  }

  fn general_square(&self, red: bool) -> Option<Sq> {
    let king = if red { 'K' } else { 'k' };
    for r in 0..10 {
      for c in 3..=5 {
        if self.board[r][c] == Some(king) {
          return Some((r, c));
        }
      }
    }
    None
  }

  /// Facing generals on an open file put whoever must answer in check.
  fn generals_facing(&self) -> bool {
    let (red_sq, black_sq) = match (self.general_square(true), self.general_square(false)) {
      (Some(r), Some(b)) => (r, b),
      _ => return false,
    };
    if red_sq.1 != black_sq.1 {
      return false;
    }
    for r in black_sq.0 + 1..red_sq.0 {
      if self.board[r][red_sq.1].is_some() {
        return false;
      }
    }
    true
  }

  fn side_in_check(&self, red: bool) -> bool {
    if self.generals_facing() {
      return true;
    }
    let general = match self.general_square(red) {
      Some(sq) => sq,
      None => return false,
    };
    for r in 0..10 {
      for c in 0..9 {
        match self.board[r][c] {
          Some(p) if is_red(p) != red => {
            if self.destinations((r, c)).contains(&general) {
              return true;
            }
          }
          _ => {}
        }
      }
    }
    false
  }

  fn any_legal_move(&self) -> bool {
    for r in 0..10 {
      for c in 0..9 {
        match self.board[r][c] {
          Some(p) if is_red(p) == self.red_to_move => {}
          _ => continue,
        }
        for to in self.destinations((r, c)) {
          let mut trial = self.clone_position();
          trial.apply((r, c), to);
          if !trial.side_in_check(!trial.red_to_move) {
            return true;
          }
        }
      }
    }
    false
  }

  fn clone_position(&self) -> XiangqiGame {
    XiangqiGame {
      board: self.board,
      red_to_move: self.red_to_move,
      game_over: self.game_over,
      history: Vec::new(),
    }
  }
}

impl Default for XiangqiGame {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn initial_fen_round_trips() {
    let game = XiangqiGame::new();
    assert_eq!(game.fen(), INITIAL_FEN);
  }

  #[test]
  fn red_moves_first_and_turns_alternate() {
    let mut game = XiangqiGame::new();
    assert_eq!(game.turn(), 'w');
    // Red center pawn one step forward (e4 -> e5 in rank terms).
    game.move_piece("e4", "e5").unwrap();
    assert_eq!(game.turn(), 'b');
    assert_eq!(game.move_piece("e5", "e6"), Err(GameError::NotYourPiece));
  }

  #[test]
  fn horse_leg_blocks_the_jump() {
    let game = XiangqiGame::new();
    // Red horse on b1 = (9,1); the outward jumps over the empty leg work,
    // but a3 (over the blocked rank-step) is fine too since (8,1) is empty.
    let from = parse_square("b1").unwrap();
    let dests = game.destinations(from);
    assert!(dests.contains(&parse_square("a3").unwrap()));
    assert!(dests.contains(&parse_square("c3").unwrap()));
    // d2 requires passing over c1, which is occupied by the elephant.
    assert!(!dests.contains(&parse_square("d2").unwrap()));
  }

  #[test]
  fn cannon_needs_exactly_one_screen_to_capture() {
    let mut game = XiangqiGame::new();
    // Red cannon b3 captures the black horse on b10 over the single screen
    // at b8 (black cannon).
    game.move_piece("b3", "b10").unwrap();
    assert!(game.fen().starts_with("rCbakabnr"), "{}", game.fen());
  }

  #[test]
  fn cannon_cannot_capture_without_screen() {
    let mut game =
      XiangqiGame::from_fen("4k4/9/9/9/9/9/9/4p4/9/3CK4 w").unwrap();
    // Cannon d1 has no screen toward d10; sliding moves are fine, capture
    // without a screen is not generated.
    assert_eq!(game.move_piece("d1", "d10"), Err(GameError::IllegalMove));
  }

  #[test]
  fn elephant_cannot_cross_the_river() {
    let mut game =
      XiangqiGame::from_fen("3k5/9/9/9/9/2B6/9/9/9/4K4 w").unwrap();
    // Red elephant on c5 is already at the river edge; advancing to a7/e7
    // would cross.
    assert_eq!(game.move_piece("c5", "a7"), Err(GameError::IllegalMove));
    assert_eq!(game.move_piece("c5", "e7"), Err(GameError::IllegalMove));
    game.move_piece("c5", "e3").unwrap();
  }

  #[test]
  fn general_confined_to_palace() {
    let mut game = XiangqiGame::new();
    game.move_piece("e4", "e5").unwrap();
    game.move_piece("e7", "e6").unwrap();
    // Red general e1 cannot leave the palace sideways to c1 or jump ranks.
    assert_eq!(game.move_piece("e1", "c1"), Err(GameError::IllegalMove));
    game.move_piece("e1", "e2").unwrap();
  }

  #[test]
  fn pawn_gains_sideways_step_after_crossing() {
    let mut game =
      XiangqiGame::from_fen("3k5/9/9/9/2P6/9/9/9/9/4K4 b").unwrap();
    // Black shuffles so Red's crossed pawn on c6 can demonstrate both the
    // sideways and the forward step.
    game.move_piece("d10", "d9").unwrap();
    game.move_piece("c6", "b6").unwrap();
    game.move_piece("d9", "d10").unwrap();
    game.move_piece("b6", "b7").unwrap();
  }

  #[test]
  fn uncrossed_pawn_cannot_step_sideways() {
    let mut game = XiangqiGame::new();
    assert_eq!(game.move_piece("a4", "b4"), Err(GameError::IllegalMove));
  }

  #[test]
  fn flying_generals_rejects_the_clearing_move() {
    // Only the black advisor at e9 blocks the file between the generals.
    let mut game = XiangqiGame::from_fen("4k4/4a4/9/9/9/9/9/9/9/4K4 b").unwrap();
    assert_eq!(
      game.move_piece("e9", "d10"),
      Err(GameError::LeavesKingInCheck)
    );
  }

  #[test]
  fn moving_into_facing_generals_is_rejected() {
    let mut game = XiangqiGame::from_fen("3k5/9/9/9/9/9/9/9/9/4K4 b").unwrap();
    assert_eq!(game.move_piece("d10", "e10"), Err(GameError::LeavesKingInCheck));
  }

  #[test]
  fn stalemated_side_loses() {
    // Black general on d10, red pawn on e9. The pawn covers d9 and e10,
    // c10 is outside the palace, and the general is not attacked: a true
    // stalemate, which xiangqi scores as a loss for the stalemated side.
    let game = XiangqiGame::from_fen("3k5/4P4/9/9/9/9/9/9/9/4K4 b").unwrap();
    assert!(game.is_game_over());
    assert!(!game.in_check());
    assert_eq!(game.winner(), Some("red"));
  }

  #[test]
  fn undo_restores_previous_position() {
    let mut game = XiangqiGame::new();
    let before = game.fen();
    game.move_piece("e4", "e5").unwrap();
    assert!(game.undo());
    assert_eq!(game.fen(), before);
  }

  #[test]
  fn fen_round_trips_mid_game() {
    let mut game = XiangqiGame::new();
    game.move_piece("b3", "e3").unwrap();
    game.move_piece("h8", "e8").unwrap();
    let fen = game.fen();
    assert_eq!(XiangqiGame::from_fen(&fen).unwrap().fen(), fen);
  }
}
