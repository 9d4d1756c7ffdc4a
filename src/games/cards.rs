//! 52-card deck primitives.
//!
//! Cards are stable integer ids `0..52` with `id = rank * 4 + suit`. Ranks
//! run 3,4,5,6,7,8,9,10,J,Q,K,A,2 (3 lowest, 2 highest) and suits run
//! Diamonds, Clubs, Hearts, Spades (Diamonds lowest), so the id itself is a
//! total order usable as a tie-break key. Card 0 is 3♦.

use rand::seq::SliceRandom;
use rand::Rng;

pub type CardId = u8;

pub const DECK_SIZE: usize = 52;

/// Id of the 3♦, the card that opens every Big Two game.
pub const THREE_OF_DIAMONDS: CardId = 0;

const RANK_NAMES: [&str; 13] = [
  "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A", "2",
];

const SUIT_NAMES: [&str; 4] = ["♦", "♣", "♥", "♠"];

/// Rank index 0..13, where 0 is 3 and 12 is 2.
pub fn rank(id: CardId) -> u8 {
  id / 4
}

/// Suit index 0..4, where 0 is Diamonds and 3 is Spades.
pub fn suit(id: CardId) -> u8 {
  id % 4
}

/// Human-readable label, e.g. `3♦` for id 0.
pub fn label(id: CardId) -> String {
  format!("{}{}", RANK_NAMES[rank(id) as usize], SUIT_NAMES[suit(id) as usize])
}

/// A freshly shuffled deck of all 52 ids.
pub fn shuffled_deck<R: Rng>(rng: &mut R) -> Vec<CardId> {
  let mut deck: Vec<CardId> = (0..DECK_SIZE as u8).collect();
  deck.shuffle(rng);
  deck
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn card_zero_is_three_of_diamonds() {
    assert_eq!(rank(THREE_OF_DIAMONDS), 0);
    assert_eq!(suit(THREE_OF_DIAMONDS), 0);
    assert_eq!(label(THREE_OF_DIAMONDS), "3♦");
  }

  #[test]
  fn id_orders_by_rank_then_suit() {
    // 6♦ (id 12) outranks every 5 but loses to any 6 of a higher suit.
    assert_eq!(label(12), "6♦");
    assert_eq!(label(13), "6♣");
    assert!(rank(12) > rank(11));
    assert!(12 < 13);
    // 2♠ is the highest card in the deck.
    assert_eq!(label(51), "2♠");
  }

  #[test]
  fn shuffled_deck_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut deck = shuffled_deck(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);
    deck.sort_unstable();
    let expected: Vec<CardId> = (0..DECK_SIZE as u8).collect();
    assert_eq!(deck, expected);
  }
}
