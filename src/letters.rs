//! Vowels, consonants and the random letter pool.
use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

const ASCII_UC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const VOWELS: &str = "AEIOU";

lazy_static! {
    /// The letter sets used by every game.
    pub static ref LETTER_SET: LetterSet = LetterSet::new();
}

/// Choice between a vowel and a consonant for the next board slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterKind {
    Vowel,
    Consonant,
}

impl LetterKind {
    /// Parse a player's choice. `v` or `vowel` picks a vowel, anything else a consonant.
    pub fn from_choice(choice: &str) -> LetterKind {
        match choice.trim().to_lowercase().as_str() {
            "v" | "vowel" => LetterKind::Vowel,
            _ => LetterKind::Consonant,
        }
    }
}

impl fmt::Display for LetterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LetterKind::Vowel => write!(f, "vowel"),
            LetterKind::Consonant => write!(f, "consonant"),
        }
    }
}

/// Two disjoint sets of uppercase letters: the vowels and the remaining 21 consonants.
#[derive(Debug, Clone)]
pub struct LetterSet {
    vowels: Vec<char>,
    consonants: Vec<char>,
}

impl LetterSet {
    fn new() -> LetterSet {
        let (vowels, consonants) = ASCII_UC.chars().partition(|&c| VOWELS.contains(c));
        LetterSet { vowels, consonants }
    }

    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    /// The letters of `kind`.
    pub fn of(&self, kind: LetterKind) -> &[char] {
        match kind {
            LetterKind::Vowel => &self.vowels,
            LetterKind::Consonant => &self.consonants,
        }
    }

    /// Return the kind of `letter`, or None if it is not an uppercase ascii letter.
    pub fn kind(&self, letter: char) -> Option<LetterKind> {
        if self.vowels.contains(&letter) {
            Some(LetterKind::Vowel)
        } else if self.consonants.contains(&letter) {
            Some(LetterKind::Consonant)
        } else {
            None
        }
    }
}

/// Draws letters uniformly at random, with replacement, from [`LETTER_SET`].
#[derive(Debug, Clone)]
pub struct LetterPool<R: Rng = StdRng> {
    set: &'static LetterSet,
    rng: R,
}

impl LetterPool<StdRng> {
    /// A pool seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A pool that draws the same sequence of letters for the same `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for LetterPool<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> LetterPool<R> {
    pub fn with_rng(rng: R) -> Self {
        LetterPool {
            set: &LETTER_SET,
            rng,
        }
    }

    /// Draw one letter of `kind`. The letter stays in the set.
    pub fn draw(&mut self, kind: LetterKind) -> char {
        let letter = *self
            .set
            .of(kind)
            .choose(&mut self.rng)
            .expect("letter sets are not empty");
        tracing::debug!(%kind, %letter, "drew letter");
        letter
    }
}
