//! A Countdown letters game for Rust.
//! <br>
//! Each round 9 letters are put on a board, one vowel or consonant at a time.
//! Every player then guesses a word made from the board letters, using each letter
//! on the board at most once. A valid word scores its length, or double its length
//! if it uses all 9 letters. Only the best word(s) of the round score, and the
//! player(s) with the highest total score are leading.
//!
//! # How to use `countdown`
//! The game needs a wordlist to check words. The wordlist must be in utf-8 and
//! contain one word per line, for example the english wordlist from
//! [`dwyl/english-words`](https://github.com/dwyl/english-words).
//! The letters, guesses and standings go through the [`Input`] and [`Output`] traits;
//! [`Console`] and [`Report`] implement them with text prompts.
//!
//! # Basic usage
//!  ```
//! # use std::convert::TryFrom;
//! use countdown::{is_valid, score_round, Board, Guess, PlayerRegistry, Wordlist};
//!
//! let wordlist = Wordlist::from_words(&["cat", "cats", "dog"]);
//! let board = Board::try_from("CATDOGRSE")?;
//! assert!(is_valid("cats", &board, &wordlist));
//! assert!(!is_valid("cc", &board, &wordlist));
//!
//! let mut players = PlayerRegistry::new();
//! players.register(&["alice", "bob"])?;
//! let guesses = [Guess::new(0, "cat"), Guess::new(1, "cats")];
//! let scores = score_round(&guesses, players.len(), &board, &wordlist)?;
//! assert_eq!(scores, [0, 4]);
//! players.apply_round_scores(&scores)?;
//! for player in players.players() {
//!     println!("{}", player);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
mod ai;
mod board;
mod config;
mod console;
mod error;
mod game;
mod letters;
mod player;
mod score;
mod validate;
mod wordlist;

pub use crate::ai::{best_words, BestWord};
pub use crate::board::{Board, Slot, BOARD_SIZE};
pub use crate::config::{GameConfig, DEFAULT_ROUNDS, DEFAULT_WORDFILE};
pub use crate::console::{Console, Report};
pub use crate::error::Error;
pub use crate::game::{Game, GuessReport, Input, Output, RoundReport};
pub use crate::letters::{LetterKind, LetterPool, LetterSet, LETTER_SET};
pub use crate::player::{default_name, Player, PlayerRegistry, MAX_PLAYERS};
pub use crate::score::{
    raw_scores, score_guesses, score_round, scores_by_player, try_word_score, winner_take_all,
    word_score, Guess, FULL_BOARD_BONUS,
};
pub use crate::validate::{is_valid, missing_letters, placement, validate, Placement, Rejection};
pub use crate::wordlist::{Dictionary, Wordlist};
