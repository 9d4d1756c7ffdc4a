//! Western chess engine.
//!
//! The board is an 8x8 array of single-character piece codes (uppercase =
//! White), row 0 being Black's back rank. Moves are validated fully:
//! castling with rights tracking and no-cross-check, en passant, promotion,
//! and the legal filter that forbids leaving one's own king attacked. Game
//! over means the side to move has no legal move; checkmate and stalemate
//! are told apart by whether that side is in check.

use crate::error::GameError;
use anyhow::{bail, Context, Result};

pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// (row, col) with row 0 = rank 8.
type Sq = (usize, usize);

const ROOK_DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_JUMPS: [(i32, i32); 8] = [
  (-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1),
];
const KING_STEPS: [(i32, i32); 8] = [
  (-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Castling {
  wk: bool,
  wq: bool,
  bk: bool,
  bq: bool,
}

#[derive(Debug, Clone)]
struct Snapshot {
  board: [[Option<char>; 8]; 8],
  white_to_move: bool,
  castling: Castling,
  en_passant: Option<Sq>,
  halfmove: u32,
  fullmove: u32,
  game_over: bool,
}

pub struct ChessGame {
  board: [[Option<char>; 8]; 8],
  white_to_move: bool,
  castling: Castling,
  en_passant: Option<Sq>,
  halfmove: u32,
  fullmove: u32,
  game_over: bool,
  history: Vec<Snapshot>,
}

fn parse_square(s: &str) -> Option<Sq> {
  let bytes = s.as_bytes();
  if bytes.len() != 2 {
    return None;
  }
  let col = bytes[0].checked_sub(b'a')? as usize;
  let rank = bytes[1].checked_sub(b'1')? as usize;
  if col > 7 || rank > 7 {
    return None;
  }
  Some((7 - rank, col))
}

fn square_name(sq: Sq) -> String {
  format!("{}{}", (b'a' + sq.1 as u8) as char, 8 - sq.0)
}

fn is_white(piece: char) -> bool {
  piece.is_ascii_uppercase()
}

fn offset(sq: Sq, dr: i32, dc: i32) -> Option<Sq> {
  let r = sq.0 as i32 + dr;
  let c = sq.1 as i32 + dc;
  if (0..8).contains(&r) && (0..8).contains(&c) {
    Some((r as usize, c as usize))
  } else {
    None
  }
}

impl ChessGame {
  pub fn new() -> Self {
    Self::from_fen(INITIAL_FEN).expect("initial FEN is valid")
  }

  pub fn from_fen(fen: &str) -> Result<Self> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().context("missing piece placement")?;
    let side = fields.next().context("missing side to move")?;
    let castling = fields.next().unwrap_or("-");
    let en_passant = fields.next().unwrap_or("-");
    let halfmove: u32 = fields.next().unwrap_or("0").parse().context("bad halfmove clock")?;
    let fullmove: u32 = fields.next().unwrap_or("1").parse().context("bad fullmove number")?;

    let mut board = [[None; 8]; 8];
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
      bail!("expected 8 board rows, got {}", rows.len());
    }
    for (r, row) in rows.iter().enumerate() {
      let mut c = 0usize;
      for ch in row.chars() {
        if let Some(skip) = ch.to_digit(10) {
          c += skip as usize;
        } else {
          if c > 7 {
            bail!("row {} overflows the board", r);
          }
          board[r][c] = Some(ch);
          c += 1;
        }
      }
      if c != 8 {
        bail!("row {} has {} files", r, c);
      }
    }

    let white_to_move = match side {
      "w" => true,
      "b" => false,
      other => bail!("bad side to move: {}", other),
    };

    let mut game = Self {
      board,
      white_to_move,
      castling: Castling {
        wk: castling.contains('K'),
        wq: castling.contains('Q'),
        bk: castling.contains('k'),
        bq: castling.contains('q'),
      },
      en_passant: if en_passant == "-" { None } else { parse_square(en_passant) },
      halfmove,
      fullmove,
      game_over: false,
      history: Vec::new(),
    };
    game.game_over = !game.any_legal_move();
    Ok(game)
  }

  pub fn fen(&self) -> String {
    let mut placement = String::new();
    for r in 0..8 {
      let mut empty = 0;
      for c in 0..8 {
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
      if r < 7 {
        placement.push('/');
      }
    }

    let mut rights = String::new();
    if self.castling.wk {
      rights.push('K');
    }
    if self.castling.wq {
      rights.push('Q');
    }
    if self.castling.bk {
      rights.push('k');
    }
    if self.castling.bq {
      rights.push('q');
    }
    if rights.is_empty() {
      rights.push('-');
    }

    let ep = self.en_passant.map(square_name).unwrap_or_else(|| "-".to_string());

    format!(
      "{} {} {} {} {} {}",
      placement,
      if self.white_to_move { 'w' } else { 'b' },
      rights,
      ep,
      self.halfmove,
      self.fullmove,
    )
  }

  pub fn turn(&self) -> char {
    if self.white_to_move {
      'w'
    } else {
      'b'
    }
  }

  pub fn is_game_over(&self) -> bool {
    self.game_over
  }

  /// `white`, `black` or `draw` once the game is over.
  pub fn winner(&self) -> Option<&'static str> {
    if !self.game_over {
      return None;
    }
    if self.in_check() {
      Some(if self.white_to_move { "black" } else { "white" })
    } else {
      Some("draw")
    }
  }

  pub fn in_check(&self) -> bool {
    self.king_attacked(self.white_to_move)
  }

  /// Validate and apply one move given in algebraic square names
  /// (`e2`, `g8`). `promotion` picks the piece a pawn becomes on the last
  /// rank; it defaults to a queen.
  pub fn move_piece(&mut self, from: &str, to: &str, promotion: Option<char>) -> Result<(), GameError> {
    if self.game_over {
      return Err(GameError::GameOver);
    }
    let from = parse_square(from).ok_or(GameError::IllegalMove)?;
    let to = parse_square(to).ok_or(GameError::IllegalMove)?;

    let piece = self.board[from.0][from.1].ok_or(GameError::NoPieceAtSource)?;
    if is_white(piece) != self.white_to_move {
      return Err(GameError::NotYourPiece);
    }
    if !self.destinations(from).contains(&to) {
      return Err(GameError::IllegalMove);
    }

    let snapshot = self.snapshot();
    self.apply(from, to, promotion);
    if self.king_attacked(!self.white_to_move) {
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
      white_to_move: self.white_to_move,
      castling: self.castling,
      en_passant: self.en_passant,
      halfmove: self.halfmove,
      fullmove: self.fullmove,
      game_over: self.game_over,
    }
  }

  fn restore(&mut self, snapshot: Snapshot) {
    self.board = snapshot.board;
    self.white_to_move = snapshot.white_to_move;
    self.castling = snapshot.castling;
    self.en_passant = snapshot.en_passant;
    self.halfmove = snapshot.halfmove;
    self.fullmove = snapshot.fullmove;
    self.game_over = snapshot.game_over;
  }

  /// Apply a pseudo-legal move. Legality against check is the caller's job.
  fn apply(&mut self, from: Sq, to: Sq, promotion: Option<char>) {
    let piece = self.board[from.0][from.1].take().expect("apply on empty source");
    let lower = piece.to_ascii_lowercase();
    let mut is_capture = self.board[to.0][to.1].is_some();

    // En passant: the captured pawn sits beside the destination square.
    if lower == 'p' && Some(to) == self.en_passant && from.1 != to.1 && !is_capture {
      self.board[from.0][to.1] = None;
      is_capture = true;
    }

    // Castling: the king travels two files, the rook jumps over.
    if lower == 'k' && from.1.abs_diff(to.1) == 2 {
      let row = from.0;
      if to.1 == 6 {
        self.board[row][5] = self.board[row][7].take();
      } else {
        self.board[row][3] = self.board[row][0].take();
      }
    }

    self.en_passant = if lower == 'p' && from.0.abs_diff(to.0) == 2 {
      Some(((from.0 + to.0) / 2, from.1))
    } else {
      None
    };

    let placed = if lower == 'p' && (to.0 == 0 || to.0 == 7) {
      let choice = promotion
        .map(|p| p.to_ascii_lowercase())
        .filter(|p| matches!(p, 'q' | 'r' | 'b' | 'n'))
        .unwrap_or('q');
      if is_white(piece) {
        choice.to_ascii_uppercase()
      } else {
        choice
      }
    } else {
      piece
    };
    self.board[to.0][to.1] = Some(placed);

    if piece == 'K' {
      self.castling.wk = false;
      self.castling.wq = false;
    } else if piece == 'k' {
      self.castling.bk = false;
      self.castling.bq = false;
    }
    for sq in [from, to] {
      match sq {
        (7, 0) => self.castling.wq = false,
        (7, 7) => self.castling.wk = false,
        (0, 0) => self.castling.bq = false,
        (0, 7) => self.castling.bk = false,
        _ => {}
      }
    }

    if lower == 'p' || is_capture {
      self.halfmove = 0;
    } else {
      self.halfmove += 1;
    }
    if !self.white_to_move {
      self.fullmove += 1;
    }
    self.white_to_move = !self.white_to_move;
  }

  /// Pseudo-legal destination squares for the piece on `from`, castling
  /// included (its no-cross-check constraint is enforced here).
  fn destinations(&self, from: Sq) -> Vec<Sq> {
    let piece = match self.board[from.0][from.1] {
      Some(p) => p,
      None => return Vec::new(),
    };
    let white = is_white(piece);
    let mut out = Vec::new();

    let push_if_free_or_enemy = |board: &[[Option<char>; 8]; 8], sq: Sq, out: &mut Vec<Sq>| {
      match board[sq.0][sq.1] {
        Some(p) => {
          if is_white(p) != white {
            out.push(sq);
          }
          false
        }
        None => {
          out.push(sq);
          true
        }
      }
    };

    match piece.to_ascii_lowercase() {
      'p' => {
        let dir: i32 = if white { -1 } else { 1 };
        let start_row = if white { 6 } else { 1 };
        if let Some(one) = offset(from, dir, 0) {
          if self.board[one.0][one.1].is_none() {
            out.push(one);
            if from.0 == start_row {
              if let Some(two) = offset(from, dir * 2, 0) {
                if self.board[two.0][two.1].is_none() {
                  out.push(two);
                }
              }
            }
          }
        }
        for dc in [-1, 1] {
          if let Some(diag) = offset(from, dir, dc) {
            let enemy = self.board[diag.0][diag.1].map(|p| is_white(p) != white).unwrap_or(false);
            if enemy || Some(diag) == self.en_passant {
              out.push(diag);
            }
          }
        }
      }
      'n' => {
        for (dr, dc) in KNIGHT_JUMPS {
          if let Some(sq) = offset(from, dr, dc) {
            push_if_free_or_enemy(&self.board, sq, &mut out);
          }
        }
      }
      'b' | 'r' | 'q' => {
        // A queen slides along every king direction.
        let dirs: &[(i32, i32)] = match piece.to_ascii_lowercase() {
          'b' => &BISHOP_DIRS,
          'r' => &ROOK_DIRS,
          _ => &KING_STEPS,
        };
        for &(dr, dc) in dirs {
          let mut sq = from;
          while let Some(next) = offset(sq, dr, dc) {
            if !push_if_free_or_enemy(&self.board, next, &mut out) {
              break;
            }
            sq = next;
          }
        }
      }
      'k' => {
        for (dr, dc) in KING_STEPS {
          if let Some(sq) = offset(from, dr, dc) {
            push_if_free_or_enemy(&self.board, sq, &mut out);
          }
        }
        self.castle_destinations(from, white, &mut out);
      }
      _ => {}
    }
    out
  }

  fn castle_destinations(&self, from: Sq, white: bool, out: &mut Vec<Sq>) {
    let row = if white { 7 } else { 0 };
    if from != (row, 4) {
      return;
    }
    let (kingside, queenside, rook) = if white {
      (self.castling.wk, self.castling.wq, 'R')
    } else {
      (self.castling.bk, self.castling.bq, 'r')
    };
    let attacked = |col: usize| self.square_attacked((row, col), !white);

    if kingside
      && self.board[row][7] == Some(rook)
      && self.board[row][5].is_none()
      && self.board[row][6].is_none()
      && !attacked(4)
      && !attacked(5)
      && !attacked(6)
    {
      out.push((row, 6));
    }
    if queenside
      && self.board[row][0] == Some(rook)
      && self.board[row][1].is_none()
      && self.board[row][2].is_none()
      && self.board[row][3].is_none()
      && !attacked(4)
      && !attacked(3)
      && !attacked(2)
    {
      out.push((row, 2));
    }
  }

  /// Whether `sq` is attacked by the given side.
  fn square_attacked(&self, sq: Sq, by_white: bool) -> bool {
    let expect = |p: char| if by_white { p.to_ascii_uppercase() } else { p };

    // Pawns attack one diagonal step toward the enemy.
    let pawn_dir: i32 = if by_white { 1 } else { -1 };
    for dc in [-1, 1] {
      if let Some(p) = offset(sq, pawn_dir, dc) {
        if self.board[p.0][p.1] == Some(expect('p')) {
          return true;
        }
      }
    }

    for (dr, dc) in KNIGHT_JUMPS {
      if let Some(p) = offset(sq, dr, dc) {
        if self.board[p.0][p.1] == Some(expect('n')) {
          return true;
        }
      }
    }

    for (dr, dc) in KING_STEPS {
      if let Some(p) = offset(sq, dr, dc) {
        if self.board[p.0][p.1] == Some(expect('k')) {
          return true;
        }
      }
    }

    for &(dr, dc) in &ROOK_DIRS {
      let mut cur = sq;
      while let Some(next) = offset(cur, dr, dc) {
        if let Some(p) = self.board[next.0][next.1] {
          if p == expect('r') || p == expect('q') {
            return true;
          }
          break;
        }
        cur = next;
      }
    }
    for &(dr, dc) in &BISHOP_DIRS {
      let mut cur = sq;
      while let Some(next) = offset(cur, dr, dc) {
        if let Some(p) = self.board[next.0][next.1] {
          if p == expect('b') || p == expect('q') {
            return true;
          }
          break;
        }
        cur = next;
      }
    }
    false
  }

  fn king_square(&self, white: bool) -> Option<Sq> {
    let king = if white { 'K' } else { 'k' };
    for r in 0..8 {
      for c in 0..8 {
        if self.board[r][c] == Some(king) {
          return Some((r, c));
        }
      }
    }
    None
  }

  fn king_attacked(&self, white: bool) -> bool {
    match self.king_square(white) {
      Some(sq) => self.square_attacked(sq, !white),
      None => false,
    }
  }

  /// Does the side to move have at least one legal move?
  fn any_legal_move(&self) -> bool {
    for r in 0..8 {
      for c in 0..8 {
        match self.board[r][c] {
          Some(p) if is_white(p) == self.white_to_move => {}
          _ => continue,
        }
        for to in self.destinations((r, c)) {
          let mut trial = self.clone_position();
          trial.apply((r, c), to, None);
          if !trial.king_attacked(!trial.white_to_move) {
            return true;
          }
        }
      }
    }
    false
  }

  fn clone_position(&self) -> ChessGame {
    ChessGame {
      board: self.board,
      white_to_move: self.white_to_move,
      castling: self.castling,
      en_passant: self.en_passant,
      halfmove: self.halfmove,
      fullmove: self.fullmove,
      game_over: self.game_over,
      history: Vec::new(),
    }
  }
}

impl Default for ChessGame {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn play(game: &mut ChessGame, moves: &[(&str, &str)]) {
    for (from, to) in moves {
      game.move_piece(from, to, None).unwrap_or_else(|e| panic!("{}{} rejected: {}", from, to, e));
    }
  }

  #[test]
  fn initial_fen_round_trips() {
    let game = ChessGame::new();
    assert_eq!(game.fen(), INITIAL_FEN);
  }

  #[test]
  fn fen_round_trips_mid_game() {
    let mut game = ChessGame::new();
    play(&mut game, &[("e2", "e4"), ("c7", "c5"), ("g1", "f3")]);
    let fen = game.fen();
    let reparsed = ChessGame::from_fen(&fen).unwrap();
    assert_eq!(reparsed.fen(), fen);
  }

  #[test]
  fn kingside_castle_moves_rook_and_clears_white_rights() {
    let mut game = ChessGame::new();
    play(
      &mut game,
      &[
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "b5"),
        ("g8", "f6"),
        ("e1", "g1"),
      ],
    );
    let fen = game.fen();
    assert!(fen.contains("RK1"), "king on g1, rook on f1: {}", fen);
    assert!(fen.contains(" kq "), "white rights gone, black intact: {}", fen);
  }

  #[test]
  fn castling_blocked_through_attacked_square() {
    // Black rook on f8 covers f1; White may not castle kingside through it.
    let mut game =
      ChessGame::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert_eq!(game.move_piece("e1", "g1", None), Err(GameError::IllegalMove));
  }

  #[test]
  fn en_passant_capture_removes_bypassed_pawn() {
    let mut game = ChessGame::new();
    play(&mut game, &[("e2", "e4"), ("d7", "d5"), ("e4", "e5")]);
    game.move_piece("f7", "f5", None).unwrap();
    assert!(game.fen().contains(" f6 "), "ep target recorded: {}", game.fen());

    game.move_piece("e5", "f6", None).unwrap();
    let fen = game.fen();
    let board_field = fen.split(' ').next().unwrap();
    // White pawn landed on f6; the bypassed f5 pawn is gone, leaving Black
    // with seven pawns.
    assert!(board_field.split('/').nth(2).unwrap().contains('P'), "{}", fen);
    assert_eq!(board_field.matches('p').count(), 7, "{}", fen);
    assert!(fen.contains(" - "), "ep target cleared: {}", fen);
  }

  #[test]
  fn en_passant_target_lives_for_one_ply() {
    let mut game = ChessGame::new();
    play(&mut game, &[("e2", "e4")]);
    assert!(game.fen().contains(" e3 "));
    play(&mut game, &[("g8", "f6")]);
    assert!(game.fen().contains(" - "));
  }

  #[test]
  fn promotion_defaults_to_queen() {
    let mut game = ChessGame::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    game.move_piece("a7", "a8", None).unwrap();
    assert!(game.fen().starts_with("Q7/"));
  }

  #[test]
  fn underpromotion_honors_choice() {
    let mut game = ChessGame::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    game.move_piece("a7", "a8", Some('n')).unwrap();
    assert!(game.fen().starts_with("N7/"));
  }

  #[test]
  fn pinned_piece_may_not_move() {
    let mut game = ChessGame::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    assert_eq!(
      game.move_piece("e2", "d3", None),
      Err(GameError::LeavesKingInCheck)
    );
    // State untouched by the rejected move.
    assert_eq!(game.turn(), 'w');
  }

  #[test]
  fn fools_mate_is_checkmate_for_black() {
    let mut game = ChessGame::new();
    play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
    game.move_piece("d8", "h4", None).unwrap();
    assert!(game.is_game_over());
    assert!(game.in_check());
    assert_eq!(game.winner(), Some("black"));
    assert_eq!(game.move_piece("a2", "a3", None), Err(GameError::GameOver));
  }

  #[test]
  fn stalemate_is_a_draw() {
    let game = ChessGame::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(game.is_game_over());
    assert!(!game.in_check());
    assert_eq!(game.winner(), Some("draw"));
  }

  #[test]
  fn undo_restores_previous_position() {
    let mut game = ChessGame::new();
    let before = game.fen();
    play(&mut game, &[("e2", "e4")]);
    assert!(game.undo());
    assert_eq!(game.fen(), before);
    assert!(!game.undo());
  }

  #[test]
  fn turn_alternates_and_rights_never_return() {
    let mut game = ChessGame::new();
    let mut seen_rights = vec![game.fen().split(' ').nth(2).unwrap().len()];
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("e1", "e2"), ("e8", "e7")] {
      let turn_before = game.turn();
      game.move_piece(from, to, None).unwrap();
      assert_ne!(game.turn(), turn_before);
      let rights = game.fen().split(' ').nth(2).unwrap().replace('-', "");
      assert!(rights.len() <= *seen_rights.last().unwrap());
      seen_rights.push(rights.len());
    }
    assert!(game.fen().contains(" - "), "both kings moved: {}", game.fen());
  }

  #[test]
  fn wrong_side_and_empty_square_rejections() {
    let mut game = ChessGame::new();
    assert_eq!(game.move_piece("e7", "e5", None), Err(GameError::NotYourPiece));
    assert_eq!(game.move_piece("e4", "e5", None), Err(GameError::NoPieceAtSource));
    assert_eq!(game.move_piece("e2", "e5", None), Err(GameError::IllegalMove));
  }
}
