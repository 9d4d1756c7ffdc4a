//! Bingo engine: column-ranged cards, a caller-driven number pool, and
//! win-pattern detection for rows, columns, diagonals and the full card.
//!
//! Cards draw five distinct numbers per column from disjoint ranges
//! (B 1-15, I 16-30, N 31-45, G 46-60, O 61-75); the center square is FREE,
//! stored as 0 and pre-marked. Seat 0 is the caller and the only seat that
//! may draw.

use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BingoWinner {
  pub seat: usize,
  pub types: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoView {
  pub game_type: &'static str,
  pub called: Vec<u8>,
  pub last_called: Option<u8>,
  pub cards: Vec<[[u8; 5]; 5]>,
  pub marked: Vec<[[bool; 5]; 5]>,
  pub is_game_over: bool,
  pub winners: Vec<BingoWinner>,
  pub caller_seat: usize,
  pub player_count: usize,
}

pub struct BingoGame {
  pool: Vec<u8>,
  called: Vec<u8>,
  cards: Vec<[[u8; 5]; 5]>,
  marked: Vec<[[bool; 5]; 5]>,
  game_over: bool,
  winners: Vec<BingoWinner>,
}

fn generate_card<R: Rng>(rng: &mut R) -> [[u8; 5]; 5] {
  let mut card = [[0u8; 5]; 5];
  for col in 0..5 {
    let low = (col as u8) * 15 + 1;
    let mut range: Vec<u8> = (low..low + 15).collect();
    range.shuffle(rng);
    for row in 0..5 {
      card[row][col] = range[row];
    }
  }
  card[2][2] = 0; // FREE
  card
}

impl BingoGame {
  pub fn new<R: Rng>(player_count: usize, rng: &mut R) -> Self {
    let mut pool: Vec<u8> = (1..=75).collect();
    pool.shuffle(rng);
    let cards: Vec<[[u8; 5]; 5]> = (0..player_count).map(|_| generate_card(rng)).collect();
    let mut marked = vec![[[false; 5]; 5]; player_count];
    for grid in marked.iter_mut() {
      grid[2][2] = true;
    }
    Self {
      pool,
      called: Vec::new(),
      cards,
      marked,
      game_over: false,
      winners: Vec::new(),
    }
  }

  pub fn player_count(&self) -> usize {
    self.cards.len()
  }

  pub fn is_game_over(&self) -> bool {
    self.game_over
  }

  pub fn winners(&self) -> &[BingoWinner] {
    &self.winners
  }

  pub fn last_called(&self) -> Option<u8> {
    self.called.last().copied()
  }

  /// Draw the next number. Only seat 0 may call; the draw marks every
  /// matching cell and then scans all seats for newly completed patterns.
  pub fn call_number(&mut self, seat: usize) -> Result<u8, GameError> {
    if seat != 0 {
      return Err(GameError::NotTheCaller);
    }
    if self.game_over {
      return Err(GameError::GameOver);
    }
    let number = self.pool.pop().ok_or(GameError::PoolExhausted)?;
    self.called.push(number);

    for (card, grid) in self.cards.iter().zip(self.marked.iter_mut()) {
      for r in 0..5 {
        for c in 0..5 {
          if card[r][c] == number {
            grid[r][c] = true;
          }
        }
      }
    }

    for seat in 0..self.cards.len() {
      if self.winners.iter().any(|w| w.seat == seat) {
        continue;
      }
      let types = pattern_types(&self.marked[seat]);
      if !types.is_empty() {
        self.winners.push(BingoWinner { seat, types });
        self.game_over = true;
      }
    }
    Ok(number)
  }

  pub fn view(&self) -> BingoView {
    BingoView {
      game_type: "bingo",
      called: self.called.clone(),
      last_called: self.last_called(),
      cards: self.cards.clone(),
      marked: self.marked.clone(),
      is_game_over: self.game_over,
      winners: self.winners.clone(),
      caller_seat: 0,
      player_count: self.player_count(),
    }
  }
}

/// Every satisfied win pattern on a marked grid.
fn pattern_types(grid: &[[bool; 5]; 5]) -> Vec<&'static str> {
  let mut types = Vec::new();
  if (0..5).any(|r| (0..5).all(|c| grid[r][c])) {
    types.push("row");
  }
  if (0..5).any(|c| (0..5).all(|r| grid[r][c])) {
    types.push("column");
  }
  if (0..5).all(|i| grid[i][i]) || (0..5).all(|i| grid[i][4 - i]) {
    types.push("diagonal");
  }
  if grid.iter().all(|row| row.iter().all(|&m| m)) {
    types.push("fullhouse");
  }
  types
}
