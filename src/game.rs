//! The round driver: fill the board, collect guesses, score and keep the standings.
use crate::ai::{best_words, BestWord};
use crate::board::{Board, Slot, BOARD_SIZE};
use crate::config::GameConfig;
use crate::letters::{LetterKind, LetterPool};
use crate::player::{Player, PlayerRegistry, MAX_PLAYERS};
use crate::score::{score_guesses, scores_by_player, winner_take_all, Guess};
use crate::validate::Rejection;
use crate::{Error, Wordlist};
use rand::rngs::StdRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Where the game gets its input from. Every call blocks until the answer is known.
pub trait Input {
    /// The number of players. May be out of range; the game asks again.
    fn player_count(&mut self, max: usize) -> Result<i64, Error>;

    /// The name of player `ordinal` (1-based).
    fn player_name(&mut self, ordinal: usize) -> Result<String, Error>;

    /// Vowel or consonant for board slot `slot` (0-based).
    fn letter_kind(&mut self, slot: usize) -> Result<LetterKind, Error>;

    /// The word guessed by `player`.
    fn guess(&mut self, player: &Player) -> Result<String, Error>;
}

/// Where the game sends what the players should see.
pub trait Output {
    /// The player count given was not accepted.
    fn invalid_player_count(&mut self, _count: i64) -> Result<(), Error> {
        Ok(())
    }

    /// The board is filled and ready for guessing.
    fn board(&mut self, board: &Board) -> Result<(), Error>;

    /// The outcome of a round.
    fn round(&mut self, report: &RoundReport) -> Result<(), Error>;

    /// The standings after a round.
    fn standings(&mut self, players: &[Player]) -> Result<(), Error>;
}

/// How one guess was scored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessReport {
    pub player: usize,
    pub word: String,
    /// score before winner-take-all
    pub score: u32,
    /// None if the word is valid
    pub rejection: Option<Rejection>,
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundReport {
    /// 1-based round number
    pub round: usize,
    pub board: [Slot; BOARD_SIZE],
    pub guesses: Vec<GuessReport>,
    /// score per player after winner-take-all
    pub scores: Vec<u32>,
    /// best words on the board, empty unless asked for in the config
    pub best: Vec<BestWord>,
}

/// A game of Countdown letters rounds.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    wordlist: Wordlist,
    board: Board,
    fixed_board: Option<Board>,
    pool: LetterPool<StdRng>,
    players: PlayerRegistry,
    round: usize,
}

impl Game {
    /// Create a game with the settings in `config`, using `wordlist` to check words.
    /// ## Errors
    /// If `config.board` holds letters that can not be put on the board.
    pub fn new(config: GameConfig, wordlist: Wordlist) -> Result<Game, Error> {
        let pool = match config.seed {
            Some(seed) => LetterPool::seeded(seed),
            None => LetterPool::new(),
        };
        let fixed_board = match &config.board {
            Some(letters) => Some(Board::try_from(letters.as_str())?),
            None => None,
        };
        Ok(Game {
            config,
            wordlist,
            board: Board::new(),
            fixed_board,
            pool,
            players: PlayerRegistry::new(),
            round: 0,
        })
    }

    /// Read the wordlist from `config.wordfile` and create the game.
    /// ## Errors
    /// If the wordfile can not be read, or see [`new`](Game::new).
    pub fn from_config(config: GameConfig) -> Result<Game, Error> {
        let wordlist = Wordlist::from_file(&config.wordfile)?;
        Game::new(config, wordlist)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The number of rounds completed so far.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Ask for the number of players until it is valid, then for their names.
    /// ## Errors
    /// If the input fails, or the players were already registered.
    pub fn setup<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<(), Error>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        let count = loop {
            let count = input.player_count(MAX_PLAYERS)?;
            if (0..=MAX_PLAYERS as i64).contains(&count) {
                break count as usize;
            }
            tracing::warn!(count, "invalid number of players");
            output.invalid_player_count(count)?;
        };
        let names = (1..=count)
            .map(|ordinal| input.player_name(ordinal))
            .collect::<Result<Vec<String>, Error>>()?;
        self.players.register(&names)
    }

    fn fill_board<I: Input + ?Sized>(&mut self, input: &mut I) -> Result<(), Error> {
        self.board.reset();
        if let Some(board) = &self.fixed_board {
            self.board = board.clone();
            return Ok(());
        }
        for slot in 0..BOARD_SIZE {
            let kind = input.letter_kind(slot)?;
            self.board.place_next(self.pool.draw(kind))?;
        }
        Ok(())
    }

    /// Play one round: fill the board, ask every player for a word, score the
    /// words and add the scores to the players.
    /// ## Errors
    /// If the input or output fails.
    pub fn play_round<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<RoundReport, Error>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        self.fill_board(input)?;
        let round = self.round + 1;
        tracing::debug!(round, board = %self.board, "board filled");
        output.board(&self.board)?;

        let mut guesses = Vec::with_capacity(self.players.len());
        for player in self.players.players() {
            let word = input.guess(player)?;
            guesses.push(Guess::new(player.id, word.trim()));
        }

        let players = self.players.len();
        let scored = score_guesses(&guesses, players, &self.board, &self.wordlist)?;
        let scores = winner_take_all(&scores_by_player(&guesses, &scored, players));
        let reports = guesses
            .iter()
            .zip(&scored)
            .map(|(guess, &result)| GuessReport {
                player: guess.player,
                word: guess.word.clone(),
                score: result.unwrap_or(0),
                rejection: result.err(),
            })
            .collect();
        self.players.apply_round_scores(&scores)?;
        self.round = round;
        tracing::info!(round, ?scores, "round scored");

        let report = RoundReport {
            round,
            board: self.board.snapshot(),
            guesses: reports,
            scores,
            best: best_words(&self.board, &self.wordlist, self.config.best),
        };
        output.round(&report)?;
        output.standings(self.players.players())?;
        Ok(report)
    }

    /// Play all rounds in the config. Players must be registered with [`setup`](Game::setup).
    /// ## Errors
    /// If the input or output fails.
    pub fn play<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<Vec<RoundReport>, Error>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        let mut reports = Vec::with_capacity(self.config.rounds);
        for _ in 0..self.config.rounds {
            reports.push(self.play_round(input, output)?);
        }
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    type Result<T> = std::result::Result<T, Error>;

    /// Answers from a list, and remembers what was shown.
    #[derive(Default)]
    struct Script {
        counts: VecDeque<i64>,
        names: VecDeque<&'static str>,
        kinds: VecDeque<LetterKind>,
        guesses: VecDeque<&'static str>,
        invalid_counts: Vec<i64>,
        boards: Vec<String>,
        standings: Vec<Vec<Player>>,
    }

    impl Input for Script {
        fn player_count(&mut self, _max: usize) -> Result<i64> {
            self.counts.pop_front().ok_or(Error::EndOfInput)
        }
        fn player_name(&mut self, _ordinal: usize) -> Result<String> {
            self.names.pop_front().map(String::from).ok_or(Error::EndOfInput)
        }
        fn letter_kind(&mut self, _slot: usize) -> Result<LetterKind> {
            self.kinds.pop_front().ok_or(Error::EndOfInput)
        }
        fn guess(&mut self, _player: &Player) -> Result<String> {
            self.guesses.pop_front().map(String::from).ok_or(Error::EndOfInput)
        }
    }

    impl Output for Script {
        fn invalid_player_count(&mut self, count: i64) -> Result<()> {
            self.invalid_counts.push(count);
            Ok(())
        }
        fn board(&mut self, board: &Board) -> Result<()> {
            self.boards.push(board.to_string());
            Ok(())
        }
        fn round(&mut self, _report: &RoundReport) -> Result<()> {
            Ok(())
        }
        fn standings(&mut self, players: &[Player]) -> Result<()> {
            self.standings.push(players.to_vec());
            Ok(())
        }
    }

    fn game(rounds: usize) -> Result<Game> {
        let config = GameConfig {
            rounds,
            board: Some(String::from("CATDOGRSE")),
            best: 1,
            ..GameConfig::default()
        };
        let wordlist = Wordlist::from_words(&["cat", "cats", "dog", "dogs", "dogcartse"]);
        Game::new(config, wordlist)
    }

    #[test]
    fn test_setup_asks_again() -> Result<()> {
        let mut game = game(1)?;
        let mut script = Script {
            counts: vec![5, -1, 2].into(),
            names: vec!["alice", ""].into(),
            ..Script::default()
        };
        let mut output = Script::default();
        game.setup(&mut script, &mut output)?;
        assert_eq!(output.invalid_counts, [5, -1]);
        let names: Vec<&str> = game.players().players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alice", "Player_2"]);
        Ok(())
    }

    #[test]
    fn test_play() -> Result<()> {
        let mut game = game(2)?;
        let mut script = Script {
            counts: vec![2].into(),
            names: vec!["alice", "bob"].into(),
            guesses: vec!["cats", " dog\n", "cc", "dogcartse"].into(),
            ..Script::default()
        };
        let mut output = Script::default();
        game.setup(&mut script, &mut output)?;
        let reports = game.play(&mut script, &mut output)?;

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].scores, [4, 0]);
        assert_eq!(reports[0].guesses[1].word, "dog");
        assert_eq!(reports[0].guesses[1].score, 3);
        assert_eq!(reports[1].scores, [0, 18]);
        assert_eq!(
            reports[1].guesses[0].rejection,
            Some(Rejection::Exhausted { letter: 'C' })
        );
        assert_eq!(reports[1].best[0].word, "dogcartse");

        assert_eq!(output.boards, ["C A T D O G R S E"; 2]);
        let scores: Vec<u32> = output.standings[1].iter().map(|p| p.score).collect();
        assert_eq!(scores, [4, 18]);
        assert!(output.standings[1][1].leading);
        assert!(!output.standings[1][0].leading);
        assert_eq!(game.round(), 2);
        Ok(())
    }

    #[test]
    fn test_reports_match_round_scores() -> Result<()> {
        let mut game = game(1)?;
        let mut script = Script {
            counts: vec![3].into(),
            names: vec!["alice", "bob", "carol"].into(),
            guesses: vec!["dogs", "cats", "tac"].into(),
            ..Script::default()
        };
        let mut output = Script::default();
        game.setup(&mut script, &mut output)?;
        let report = game.play_round(&mut script, &mut output)?;

        let raw: Vec<u32> = report.guesses.iter().map(|g| g.score).collect();
        assert_eq!(raw, [4, 4, 0]);
        assert_eq!(report.scores, winner_take_all(&raw));
        assert_eq!(report.guesses[2].rejection, Some(Rejection::NotInWordlist));
        let scores: Vec<u32> = game.players().players().iter().map(|p| p.score).collect();
        assert_eq!(scores, report.scores);
        Ok(())
    }

    #[test]
    fn test_drawn_board() -> Result<()> {
        use LetterKind::{Consonant, Vowel};
        let config = GameConfig {
            seed: Some(9),
            ..GameConfig::default()
        };
        let mut game = Game::new(config, Wordlist::default())?;
        let mut script = Script {
            counts: vec![1].into(),
            names: vec!["solo"].into(),
            kinds: vec![Vowel; BOARD_SIZE].into(),
            guesses: vec!["aaa"].into(),
            ..Script::default()
        };
        let mut output = Script::default();
        game.setup(&mut script, &mut output)?;
        let report = game.play_round(&mut script, &mut output)?;
        assert!(game.board().is_full());
        assert!(report.board.iter().all(|slot| "AEIOU".contains(slot.unwrap_or('?'))));
        assert_eq!(report.scores, [0]);
        assert!(report.best.is_empty());

        // the next round starts with a fresh board
        script.kinds = vec![Consonant; BOARD_SIZE].into();
        script.guesses = vec![""].into();
        let report = game.play_round(&mut script, &mut output)?;
        assert!(report
            .board
            .iter()
            .all(|slot| !"AEIOU".contains(slot.unwrap_or('A'))));
        assert_eq!(report.guesses[0].rejection, Some(Rejection::Empty));
        Ok(())
    }

    #[test]
    fn test_end_of_input() -> Result<()> {
        let mut game = game(1)?;
        let mut script = Script::default();
        let mut output = Script::default();
        assert!(matches!(
            game.setup(&mut script, &mut output),
            Err(Error::EndOfInput)
        ));
        Ok(())
    }
}
