//! Find the best words on a board, like the dictionary corner at the end of a round.
use crate::board::Board;
use crate::score::try_word_score;
use crate::Wordlist;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A word from the wordlist that can be played on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BestWord {
    pub word: String,
    /// score for this word, including the full board bonus
    pub score: u32,
}

fn best_word(word: &str, board: &Board, wordlist: &Wordlist) -> Option<BestWord> {
    try_word_score(word, board, wordlist)
        .ok()
        .map(|score| BestWord {
            word: String::from(word),
            score,
        })
}

#[cfg(feature = "rayon")]
fn all_words(board: &Board, wordlist: &Wordlist) -> Vec<BestWord> {
    wordlist
        .words()
        .par_iter()
        .filter_map(|word| best_word(word, board, wordlist))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn all_words(board: &Board, wordlist: &Wordlist) -> Vec<BestWord> {
    wordlist
        .iter()
        .filter_map(|word| best_word(word, board, wordlist))
        .collect()
}

/// Return the `limit` highest scoring words that can be played on `board`.
/// Words with the same score are sorted alphabetically.
pub fn best_words(board: &Board, wordlist: &Wordlist, limit: usize) -> Vec<BestWord> {
    if limit == 0 {
        return Vec::new();
    }
    let mut words = all_words(board, wordlist);
    words.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    words.truncate(limit);
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::convert::TryFrom;

    #[test]
    fn test_best_words() -> Result<(), Error> {
        let board = Board::try_from("CATDOGRSE")?;
        let wordlist = Wordlist::from_words(&[
            "cat", "act", "cats", "dog", "dogs", "cc", "zebra", "dogcartse", "coasted",
        ]);
        let best = best_words(&board, &wordlist, 4);
        let found: Vec<(&str, u32)> = best.iter().map(|b| (b.word.as_str(), b.score)).collect();
        assert_eq!(
            found,
            [("dogcartse", 18), ("coasted", 7), ("cats", 4), ("dogs", 4)]
        );
        Ok(())
    }

    #[test]
    fn test_no_words() -> Result<(), Error> {
        let board = Board::try_from("XXXXXXXXX")?;
        let wordlist = Wordlist::from_words(&["cat"]);
        assert!(best_words(&board, &wordlist, 10).is_empty());
        assert!(best_words(&board, &Wordlist::default(), 10).is_empty());
        Ok(())
    }
}
