//! Big Two (chor dai di) engine.
//!
//! Four hands are dealt from a shuffled deck by giving every fourth card to
//! each seat. The holder of the 3♦ (card id 0) opens and must include it in
//! the first play. Combos are singles, pairs, triples and the five-card
//! family ordered straight < flush < full house < quads < straight flush.
//! Ties between combos of the same type compare the highest card id, so the
//! suit breaks rank ties. Three consecutive passes against the table owner
//! clear the table and hand the lead back to the owner.

use super::cards::{self, CardId, THREE_OF_DIAMONDS};
use crate::error::GameError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComboType {
  Single,
  Pair,
  Triple,
  Straight,
  Flush,
  #[serde(rename = "fullhouse")]
  FullHouse,
  Quads,
  #[serde(rename = "straightflush")]
  StraightFlush,
}

impl ComboType {
  fn is_five_card(self) -> bool {
    matches!(
      self,
      ComboType::Straight | ComboType::Flush | ComboType::FullHouse | ComboType::Quads | ComboType::StraightFlush
    )
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Combo {
  #[serde(rename = "type")]
  pub kind: ComboType,
  pub card_ids: Vec<CardId>,
}

impl Combo {
  /// Tie-break key: the highest card id in the combo.
  fn key(&self) -> CardId {
    *self.card_ids.iter().max().expect("combo is never empty")
  }
}

/// Classify a set of cards as exactly one combo, or nothing.
///
/// Five-card hands take the strongest matching type; a straight requires
/// five consecutive ranks in the 3..2 ordering with no wrap-around.
pub fn classify(card_ids: &[CardId]) -> Option<Combo> {
  let mut sorted = card_ids.to_vec();
  sorted.sort_unstable();
  sorted.dedup();
  if sorted.len() != card_ids.len() || sorted.iter().any(|&c| c >= cards::DECK_SIZE as u8) {
    return None;
  }

  let ranks: Vec<u8> = sorted.iter().map(|&c| cards::rank(c)).collect();
  let same_rank = ranks.windows(2).all(|w| w[0] == w[1]);

  let kind = match sorted.len() {
    1 => ComboType::Single,
    2 if same_rank => ComboType::Pair,
    3 if same_rank => ComboType::Triple,
    5 => {
      let straight = ranks.windows(2).all(|w| w[1] == w[0] + 1);
      let flush = sorted.windows(2).all(|w| cards::suit(w[0]) == cards::suit(w[1]));
      let mut counts = std::collections::HashMap::new();
      for &r in &ranks {
        *counts.entry(r).or_insert(0usize) += 1;
      }
      let mut shape: Vec<usize> = counts.values().copied().collect();
      shape.sort_unstable();
      match (straight, flush, shape.as_slice()) {
        (true, true, _) => ComboType::StraightFlush,
        (_, _, [1, 4]) => ComboType::Quads,
        (_, _, [2, 3]) => ComboType::FullHouse,
        (_, true, _) => ComboType::Flush,
        (true, _, _) => ComboType::Straight,
        _ => return None,
      }
    }
    _ => return None,
  };

  Some(Combo { kind, card_ids: sorted })
}

/// Does `incoming` beat `table`?
fn beats(incoming: &Combo, table: &Combo) -> bool {
  if incoming.kind.is_five_card() && table.kind.is_five_card() {
    if incoming.kind != table.kind {
      return incoming.kind > table.kind;
    }
    return incoming.key() > table.key();
  }
  incoming.kind == table.kind && incoming.key() > table.key()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BigTwoView {
  pub game_type: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub my_hand: Option<Vec<CardId>>,
  pub hand_counts: [usize; 4],
  pub current_seat: usize,
  pub table_combo: Option<Combo>,
  pub table_owner: Option<usize>,
  pub pass_count: u8,
  pub is_game_over: bool,
  pub winner: Option<usize>,
}

pub struct BigTwoGame {
  hands: [Vec<CardId>; 4],
  current_seat: usize,
  table: Option<Combo>,
  table_owner: Option<usize>,
  pass_count: u8,
  first_play: bool,
  winner: Option<usize>,
}

impl BigTwoGame {
  pub fn new<R: Rng>(rng: &mut R) -> Self {
    let deck = cards::shuffled_deck(rng);
    let mut hands: [Vec<CardId>; 4] = Default::default();
    for (i, &card) in deck.iter().enumerate() {
      hands[i % 4].push(card);
    }
    for hand in hands.iter_mut() {
      hand.sort_unstable();
    }
    let current_seat = hands
      .iter()
      .position(|h| h.contains(&THREE_OF_DIAMONDS))
      .expect("some hand holds the 3♦");
    Self {
      hands,
      current_seat,
      table: None,
      table_owner: None,
      pass_count: 0,
      first_play: true,
      winner: None,
    }
  }

  /// Deterministic deal for a given seed.
  pub fn new_seeded(seed: u64) -> Self {
    Self::new(&mut StdRng::seed_from_u64(seed))
  }

  #[cfg(test)]
  fn from_hands(hands: [Vec<CardId>; 4]) -> Self {
    let current_seat = hands
      .iter()
      .position(|h| h.contains(&THREE_OF_DIAMONDS))
      .expect("some hand holds the 3♦");
    Self {
      hands,
      current_seat,
      table: None,
      table_owner: None,
      pass_count: 0,
      first_play: true,
      winner: None,
    }
  }

  pub fn turn(&self) -> usize {
    self.current_seat
  }

  pub fn is_game_over(&self) -> bool {
    self.winner.is_some()
  }

  pub fn winner(&self) -> Option<usize> {
    self.winner
  }

  pub fn hand(&self, seat: usize) -> &[CardId] {
    &self.hands[seat]
  }

  pub fn play(&mut self, seat: usize, card_ids: &[CardId]) -> Result<(), GameError> {
    if self.winner.is_some() {
      return Err(GameError::GameOver);
    }
    if seat != self.current_seat {
      return Err(GameError::NotYourTurn);
    }

    let mut unique = card_ids.to_vec();
    unique.sort_unstable();
    unique.dedup();
    if unique.len() != card_ids.len() || !unique.iter().all(|c| self.hands[seat].contains(c)) {
      return Err(GameError::CardNotInHand);
    }

    let combo = classify(card_ids).ok_or(GameError::InvalidCombination)?;

    if self.first_play && !combo.card_ids.contains(&THREE_OF_DIAMONDS) {
      return Err(GameError::MustIncludeThreeOfDiamonds);
    }
    if let Some(table) = &self.table {
      if !beats(&combo, table) {
        return Err(GameError::DoesNotBeatTable);
      }
    }

    self.hands[seat].retain(|c| !combo.card_ids.contains(c));
    self.table = Some(combo);
    self.table_owner = Some(seat);
    self.pass_count = 0;
    self.first_play = false;

    if self.hands[seat].is_empty() {
      self.winner = Some(seat);
    } else {
      self.current_seat = (seat + 1) % 4;
    }
    Ok(())
  }

  pub fn pass(&mut self, seat: usize) -> Result<(), GameError> {
    if self.winner.is_some() {
      return Err(GameError::GameOver);
    }
    if seat != self.current_seat {
      return Err(GameError::NotYourTurn);
    }
    if self.table.is_none() {
      return Err(GameError::PassOnEmptyTable);
    }
    if self.table_owner == Some(seat) {
      return Err(GameError::OwnerCannotPass);
    }

    self.pass_count += 1;
    if self.pass_count >= 3 {
      // Round clear: the lead returns to the owner with an open table.
      self.current_seat = self.table_owner.take().expect("owned table on round clear");
      self.table = None;
      self.pass_count = 0;
    } else {
      self.current_seat = (seat + 1) % 4;
    }
    Ok(())
  }

  /// Per-seat payload. `seat` is the recipient; spectators get `None` and
  /// see only the hand counts. Other seats' hands never leave this module.
  pub fn view_for(&self, seat: Option<usize>) -> BigTwoView {
    BigTwoView {
      game_type: "chordaidi",
      my_hand: seat.map(|s| self.hands[s].clone()),
      hand_counts: [
        self.hands[0].len(),
        self.hands[1].len(),
        self.hands[2].len(),
        self.hands[3].len(),
      ],
      current_seat: self.current_seat,
      table_combo: self.table.clone(),
      table_owner: self.table_owner,
      pass_count: self.pass_count,
      is_game_over: self.winner.is_some(),
      winner: self.winner,
    }
  }
}
