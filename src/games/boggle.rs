//! Boggle engine: a 4x4 dice board, dictionary-checked submissions with a
//! DFS path validation, and unique-word scoring at round end.
//!
//! Each of the sixteen standard dice contributes one face. The face `Q`
//! stands for the digraph `QU` when words are matched. Words duplicated
//! across seats cancel: only a word submitted by exactly one seat scores.

use super::wordlist::WORDS;
use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

pub const ROUND_SECS: u64 = 180;

/// The sixteen standard Boggle dice.
const DICE: [&str; 16] = [
  "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY",
  "DISTTY", "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

fn points_for(word: &str) -> u32 {
  match word.len() {
    0..=4 => 1,
    5 => 2,
    6 => 3,
    7 => 5,
    _ => 11,
  }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordResult {
  pub word: String,
  pub unique: bool,
  pub points: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundResults {
  pub scores: Vec<u32>,
  pub words: Vec<Vec<WordResult>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoggleView {
  pub game_type: &'static str,
  pub board: Vec<String>,
  pub time_left: u64,
  pub submission_counts: Vec<usize>,
  pub is_game_over: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scores: Option<Vec<u32>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub words: Option<Vec<Vec<WordResult>>>,
  pub player_count: usize,
}

pub struct BoggleGame {
  board: [char; 16],
  submissions: Vec<HashSet<String>>,
  deadline: Instant,
  results: Option<RoundResults>,
  dictionary: HashSet<&'static str>,
}

impl BoggleGame {
  pub fn new<R: Rng>(player_count: usize, rng: &mut R) -> Self {
    let mut dice = DICE;
    dice.shuffle(rng);
    let mut board = ['A'; 16];
    for (cell, die) in board.iter_mut().zip(dice.iter()) {
      let faces: Vec<char> = die.chars().collect();
      *cell = faces[rng.gen_range(0..faces.len())];
    }
    Self::from_board(board, player_count)
  }

  /// Fixed board, for deterministic play; `letters` is 16 row-major faces.
  pub fn with_board(letters: &str, player_count: usize) -> Self {
    let chars: Vec<char> = letters.chars().collect();
    assert_eq!(chars.len(), 16, "a Boggle board has 16 faces");
    let mut board = ['A'; 16];
    board.copy_from_slice(&chars);
    Self::from_board(board, player_count)
  }

  fn from_board(board: [char; 16], player_count: usize) -> Self {
    Self {
      board,
      submissions: vec![HashSet::new(); player_count],
      deadline: Instant::now() + Duration::from_secs(ROUND_SECS),
      results: None,
      dictionary: WORDS.iter().copied().collect(),
    }
  }

  pub fn player_count(&self) -> usize {
    self.submissions.len()
  }

  /// Seconds remaining in the round.
  pub fn time_left(&self) -> u64 {
    self.deadline.saturating_duration_since(Instant::now()).as_secs()
  }

  pub fn is_game_over(&self) -> bool {
    self.results.is_some()
  }

  pub fn submission_counts(&self) -> Vec<usize> {
    self.submissions.iter().map(HashSet::len).collect()
  }

  pub fn submit_word(&mut self, seat: usize, word: &str) -> Result<String, GameError> {
    if self.results.is_some() {
      return Err(GameError::RoundOver);
    }
    if self.time_left() == 0 {
      return Err(GameError::TimeUp);
    }
    let word = word.trim().to_ascii_uppercase();
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
      return Err(GameError::LettersOnly);
    }
    if word.len() < 3 {
      return Err(GameError::WordTooShort);
    }
    if self.submissions[seat].contains(&word) {
      return Err(GameError::AlreadySubmitted);
    }
    if !self.dictionary.contains(word.as_str()) {
      return Err(GameError::NotInDictionary);
    }
    if !self.can_form(&word) {
      return Err(GameError::NotOnBoard);
    }
    self.submissions[seat].insert(word.clone());
    Ok(word)
  }

  /// Close the round and score it. Idempotent: a second call returns the
  /// same results without recomputing.
  pub fn end_round(&mut self) -> &RoundResults {
    if self.results.is_none() {
      let mut submitters: HashMap<&str, usize> = HashMap::new();
      for set in &self.submissions {
        for word in set {
          *submitters.entry(word.as_str()).or_insert(0) += 1;
        }
      }

      let mut scores = vec![0u32; self.submissions.len()];
      let mut words: Vec<Vec<WordResult>> = Vec::with_capacity(self.submissions.len());
      for (seat, set) in self.submissions.iter().enumerate() {
        let mut list: Vec<WordResult> = set
          .iter()
          .map(|word| {
            let unique = submitters[word.as_str()] == 1;
            let points = if unique { points_for(word) } else { 0 };
            WordResult { word: word.clone(), unique, points }
          })
          .collect();
        list.sort_by(|a, b| b.unique.cmp(&a.unique).then_with(|| a.word.cmp(&b.word)));
        scores[seat] = list.iter().map(|w| w.points).sum();
        words.push(list);
      }
      self.results = Some(RoundResults { scores, words });
    }
    self.results.as_ref().expect("results just computed")
  }

  /// Highest-scoring seat, lowest index on ties. Only meaningful once the
  /// round has ended.
  pub fn winner(&self) -> Option<usize> {
    let results = self.results.as_ref()?;
    results
      .scores
      .iter()
      .enumerate()
      .max_by(|(ia, a), (ib, b)| a.cmp(b).then_with(|| ib.cmp(ia)))
      .map(|(seat, _)| seat)
  }

  pub fn results(&self) -> Option<&RoundResults> {
    self.results.as_ref()
  }

  pub fn view(&self) -> BoggleView {
    BoggleView {
      game_type: "boggle",
      board: self.board.iter().map(|c| c.to_string()).collect(),
      time_left: self.time_left(),
      submission_counts: self.submission_counts(),
      is_game_over: self.results.is_some(),
      scores: self.results.as_ref().map(|r| r.scores.clone()),
      words: self.results.as_ref().map(|r| r.words.clone()),
      player_count: self.player_count(),
    }
  }

  /// Whether `word` (any case) can be traced on the board. Dictionary
  /// membership is not checked here.
  pub fn can_form_word(&self, word: &str) -> bool {
    self.can_form(&word.trim().to_ascii_uppercase())
  }

  fn can_form(&self, word: &str) -> bool {
    let letters: Vec<char> = word.chars().collect();
    let mut used = [false; 16];
    (0..16).any(|cell| self.dfs(cell, &letters, &mut used))
  }

  fn dfs(&self, cell: usize, rest: &[char], used: &mut [bool; 16]) -> bool {
    let face = self.board[cell];
    let consumed = if face == 'Q' {
      if rest.len() >= 2 && rest[0] == 'Q' && rest[1] == 'U' {
        2
      } else {
        return false;
      }
    } else if rest.first() == Some(&face) {
      1
    } else {
      return false;
    };
    let rest = &rest[consumed..];
    if rest.is_empty() {
      return true;
    }

    used[cell] = true;
    let (r, c) = (cell as i32 / 4, cell as i32 % 4);
    for dr in -1..=1 {
      for dc in -1..=1 {
        if dr == 0 && dc == 0 {
          continue;
        }
        let (nr, nc) = (r + dr, c + dc);
        if (0..4).contains(&nr) && (0..4).contains(&nc) {
          let next = (nr * 4 + nc) as usize;
          if !used[next] && self.dfs(next, rest, used) {
            used[cell] = false;
            return true;
          }
        }
      }
    }
    used[cell] = false;
    false
  }
}
