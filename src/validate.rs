//! Check guesses against the board and the dictionary.
use crate::board::{Board, BOARD_SIZE};
use crate::wordlist::Dictionary;
use multiset::HashMultiSet;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// The board slots used to spell a word, one per letter of the word.
pub type Placement = Vec<usize>;

/// Why a guess is not a valid word. The scoring only cares that it is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    /// Nothing was guessed
    Empty,
    /// The letter does not appear on the board
    NotOnBoard { letter: char },
    /// Every board slot with this letter is already used by the word
    Exhausted { letter: char },
    /// The word can be spelled on the board but is not in the dictionary
    NotInWordlist,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "no word"),
            Rejection::NotOnBoard { letter } => write!(f, "'{}' is not on the board", letter),
            Rejection::Exhausted { letter } => write!(f, "not enough '{}' on the board", letter),
            Rejection::NotInWordlist => write!(f, "not in the wordlist"),
        }
    }
}

/// Find a distinct board slot for every letter of `word`.
///
/// Each letter takes the first unused slot with the same letter, scanning the
/// board from left to right. Case is ignored.
pub fn placement(word: &str, board: &Board) -> Result<Placement, Rejection> {
    let letters = board.letters();
    let mut used = [false; BOARD_SIZE];
    let mut placement = Placement::with_capacity(word.len());
    for c in word.chars().map(|c| c.to_ascii_uppercase()) {
        let slot = letters
            .iter()
            .enumerate()
            .position(|(i, &letter)| letter == c && !used[i]);
        match slot {
            Some(i) => {
                used[i] = true;
                placement.push(i);
            }
            None if letters.contains(&c) => return Err(Rejection::Exhausted { letter: c }),
            None => return Err(Rejection::NotOnBoard { letter: c }),
        }
    }
    Ok(placement)
}

/// Validate `word` on `board`, and return the board slots it uses.
/// ## Errors
/// The reason the word is rejected.
pub fn validate<D>(word: &str, board: &Board, dictionary: &D) -> Result<Placement, Rejection>
where
    D: Dictionary + ?Sized,
{
    let placement = placement(word, board)?;
    if placement.is_empty() {
        return Err(Rejection::Empty);
    }
    if !dictionary.contains(&word.to_lowercase()) {
        return Err(Rejection::NotInWordlist);
    }
    Ok(placement)
}

/// Returns true if `word` can be spelled with the letters on `board`, using every
/// slot at most once, and `word` is in the `dictionary`.
pub fn is_valid<D>(word: &str, board: &Board, dictionary: &D) -> bool
where
    D: Dictionary + ?Sized,
{
    validate(word, board, dictionary).is_ok()
}

/// All letters of `word` (uppercase) that the board can not supply.
pub fn missing_letters(word: &str, board: &Board) -> HashMultiSet<char> {
    let wanted: HashMultiSet<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
    let available: HashMultiSet<char> = board.letters().iter().copied().collect();
    wanted - available
}
