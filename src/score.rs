use crate::board::{Board, BOARD_SIZE};
use crate::validate::{validate, Rejection};
use crate::wordlist::Dictionary;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score multiplier for a word that uses every slot on the board.
pub const FULL_BOARD_BONUS: u32 = 2;

/// A word guessed by a player in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Guess {
    /// id of the player
    pub player: usize,
    /// the word as it was entered
    pub word: String,
}

impl Guess {
    pub fn new<S: Into<String>>(player: usize, word: S) -> Guess {
        Guess {
            player,
            word: word.into(),
        }
    }
}

/// Score for a single word: its length if it is valid, doubled if it uses the whole board.
/// Returns the rejection for an invalid word.
pub fn try_word_score<D>(word: &str, board: &Board, dictionary: &D) -> Result<u32, Rejection>
where
    D: Dictionary + ?Sized,
{
    let placement = validate(word, board, dictionary)?;
    let score = placement.len() as u32;
    if placement.len() == BOARD_SIZE {
        Ok(score * FULL_BOARD_BONUS)
    } else {
        Ok(score)
    }
}

/// Score for a single word, or 0 if the word is not valid.
pub fn word_score<D>(word: &str, board: &Board, dictionary: &D) -> u32
where
    D: Dictionary + ?Sized,
{
    try_word_score(word, board, dictionary).unwrap_or(0)
}

/// Keep only the highest scores. Ties all keep their score.
pub fn winner_take_all(scores: &[u32]) -> Vec<u32> {
    let highest = scores.iter().copied().max().unwrap_or(0);
    scores
        .iter()
        .map(|&score| if score == highest { score } else { 0 })
        .collect()
}

/// Score every guess, in the order given. An invalid word keeps its rejection.
/// ## Errors
/// - [`Error::UnknownPlayer`] if a guess is for a player id `>= players`,
/// - [`Error::DuplicateGuess`] if a player has more than one guess.
pub fn score_guesses<D>(
    guesses: &[Guess],
    players: usize,
    board: &Board,
    dictionary: &D,
) -> Result<Vec<Result<u32, Rejection>>, Error>
where
    D: Dictionary + ?Sized,
{
    let mut guessed = vec![false; players];
    guesses
        .iter()
        .map(|guess| {
            let player = guess.player;
            if player >= players {
                return Err(Error::UnknownPlayer(player));
            }
            if guessed[player] {
                return Err(Error::DuplicateGuess(player));
            }
            guessed[player] = true;
            let scored = try_word_score(&guess.word, board, dictionary);
            if let Err(rejection) = scored {
                tracing::debug!(player, word = %guess.word, %rejection, "invalid word");
            }
            Ok(scored)
        })
        .collect()
}

/// Spread the results of [`score_guesses`] over `players`. Players without a
/// guess and invalid words score 0.
pub fn scores_by_player(
    guesses: &[Guess],
    scored: &[Result<u32, Rejection>],
    players: usize,
) -> Vec<u32> {
    let mut scores = vec![0; players];
    for (guess, result) in guesses.iter().zip(scored) {
        if let Some(score) = scores.get_mut(guess.player) {
            *score = result.unwrap_or(0);
        }
    }
    scores
}

/// Raw score per player, before [`winner_take_all`]. Players without a guess score 0.
/// ## Errors
/// See [`score_guesses`].
pub fn raw_scores<D>(
    guesses: &[Guess],
    players: usize,
    board: &Board,
    dictionary: &D,
) -> Result<Vec<u32>, Error>
where
    D: Dictionary + ?Sized,
{
    let scored = score_guesses(guesses, players, board, dictionary)?;
    Ok(scores_by_player(guesses, &scored, players))
}

/// Score a round: one score per player, in player order.
/// Only the player(s) with the highest raw score keep it, all others get 0.
/// ## Errors
/// See [`raw_scores`].
pub fn score_round<D>(
    guesses: &[Guess],
    players: usize,
    board: &Board,
    dictionary: &D,
) -> Result<Vec<u32>, Error>
where
    D: Dictionary + ?Sized,
{
    let raw = raw_scores(guesses, players, board, dictionary)?;
    Ok(winner_take_all(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Wordlist;
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, Error>;

    fn setup() -> Result<(Board, Wordlist)> {
        let board = Board::try_from("CATDOGRSE")?;
        let wordlist = Wordlist::from_words(&["cat", "cats", "dog", "dogs", "dogcartse", "cc"]);
        Ok((board, wordlist))
    }

    #[test]
    fn test_word_score() -> Result<()> {
        let (board, wordlist) = setup()?;
        assert_eq!(word_score("cat", &board, &wordlist), 3);
        assert_eq!(word_score("CATS", &board, &wordlist), 4);
        assert_eq!(word_score("cc", &board, &wordlist), 0);
        assert_eq!(word_score("", &board, &wordlist), 0);
        assert_eq!(word_score("catdogrsez", &board, &wordlist), 0);
        Ok(())
    }

    #[test]
    fn test_full_board_bonus() -> Result<()> {
        let (board, wordlist) = setup()?;
        assert_eq!(word_score("dogcartse", &board, &wordlist), 18);
        assert_eq!(
            try_word_score("dogcartes", &board, &wordlist),
            Err(Rejection::NotInWordlist)
        );
        Ok(())
    }

    #[test]
    fn test_winner_take_all() {
        assert_eq!(winner_take_all(&[5, 9]), vec![0, 9]);
        assert_eq!(winner_take_all(&[9, 9]), vec![9, 9]);
        assert_eq!(winner_take_all(&[3, 0, 3, 2]), vec![3, 0, 3, 0]);
        assert_eq!(winner_take_all(&[0, 0]), vec![0, 0]);
        assert_eq!(winner_take_all(&[]), Vec::<u32>::new());
    }

    #[test]
    fn test_score_round() -> Result<()> {
        let (board, wordlist) = setup()?;
        let guesses = [
            Guess::new(0, "cat"),
            Guess::new(1, "dogs"),
            Guess::new(2, "cats"),
            Guess::new(3, "cc"),
        ];
        let scores = score_round(&guesses, 4, &board, &wordlist)?;
        assert_eq!(scores, vec![0, 4, 4, 0]);
        Ok(())
    }

    #[test]
    fn test_missing_guess_scores_zero() -> Result<()> {
        let (board, wordlist) = setup()?;
        let guesses = [Guess::new(1, "dog")];
        assert_eq!(score_round(&guesses, 3, &board, &wordlist)?, vec![0, 3, 0]);
        Ok(())
    }

    #[test]
    fn test_score_guesses() -> Result<()> {
        let (board, wordlist) = setup()?;
        let guesses = [
            Guess::new(2, "dogcartse"),
            Guess::new(0, "cc"),
            Guess::new(1, "dog"),
        ];
        let scored = score_guesses(&guesses, 4, &board, &wordlist)?;
        assert_eq!(
            scored,
            vec![Ok(18), Err(Rejection::Exhausted { letter: 'C' }), Ok(3)]
        );
        assert_eq!(scores_by_player(&guesses, &scored, 4), vec![0, 3, 18, 0]);
        assert_eq!(
            raw_scores(&guesses, 4, &board, &wordlist)?,
            scores_by_player(&guesses, &scored, 4)
        );
        Ok(())
    }

    #[test]
    fn test_bad_guesses() -> Result<()> {
        let (board, wordlist) = setup()?;
        let unknown = [Guess::new(2, "cat")];
        assert!(matches!(
            score_round(&unknown, 2, &board, &wordlist),
            Err(Error::UnknownPlayer(2))
        ));
        let twice = [Guess::new(0, "cat"), Guess::new(0, "dogs")];
        assert!(matches!(
            score_round(&twice, 2, &board, &wordlist),
            Err(Error::DuplicateGuess(0))
        ));
        assert!(matches!(
            score_guesses(&twice, 2, &board, &wordlist),
            Err(Error::DuplicateGuess(0))
        ));
        Ok(())
    }
}
