use crate::letters::{LetterKind, LetterPool, LETTER_SET};
use crate::Error;
use rand::Rng;
use std::convert::TryFrom;
use std::fmt;
use tinyvec::ArrayVec;

/// The number of letter slots on the board.
pub const BOARD_SIZE: usize = 9;

/// A board slot: a letter, or None if the slot is empty.
pub type Slot = Option<char>;

/// Display the board as 9 letters. Empty slots show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .snapshot()
            .iter()
            .map(|slot| slot.unwrap_or('.').to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", repr)
    }
}

/// The 9 letters shared by all players in a round.
///
/// Letters are placed in slot order, so the filled slots are always the first
/// [`len`](Board::len) slots. A full board accepts no more letters until it is
/// [`reset`](Board::reset).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Board {
    letters: ArrayVec<[char; BOARD_SIZE]>,
}

impl Board {
    /// Create a new empty board.
    #[must_use]
    pub fn new() -> Board {
        Board::default()
    }

    /// Clear all slots.
    pub fn reset(&mut self) {
        self.letters.clear();
    }

    /// Put `letter` in the first empty slot, and return the index of that slot.
    /// ## Errors
    /// [`Error::BoardFull`] if every slot is filled. The board is not changed.
    pub fn place_next(&mut self, letter: char) -> Result<usize, Error> {
        if self.is_full() {
            tracing::warn!(%letter, "board is full");
            return Err(Error::BoardFull);
        }
        let slot = self.letters.len();
        self.letters.push(letter);
        tracing::debug!(%letter, slot, "placed letter");
        Ok(slot)
    }

    /// Draw one letter from `pool` for each of `kinds` and place them on the board.
    /// ## Errors
    /// [`Error::BoardFull`] if there are more kinds than empty slots. Letters placed
    /// before the board filled up stay on the board.
    pub fn fill<R, I>(&mut self, pool: &mut LetterPool<R>, kinds: I) -> Result<(), Error>
    where
        R: Rng,
        I: IntoIterator<Item = LetterKind>,
    {
        for kind in kinds {
            if self.is_full() {
                return Err(Error::BoardFull);
            }
            self.place_next(pool.draw(kind))?;
        }
        Ok(())
    }

    /// Return the 9 slots in order.
    pub fn snapshot(&self) -> [Slot; BOARD_SIZE] {
        let mut slots = [None; BOARD_SIZE];
        for (slot, &letter) in slots.iter_mut().zip(self.letters.iter()) {
            *slot = Some(letter);
        }
        slots
    }

    /// The letters on the board, in slot order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// The number of filled slots.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.letters.len() == BOARD_SIZE
    }
}

/// Build a board from up to 9 letters, ignoring case and whitespace.
impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(letters: &str) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for c in letters.chars().filter(|c| !c.is_whitespace()) {
            let letter = c.to_ascii_uppercase();
            if LETTER_SET.kind(letter).is_none() {
                return Err(Error::InvalidLetter(c));
            }
            board.place_next(letter)?;
        }
        Ok(board)
    }
}
