use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Player count is negative or exceeds the maximum
    #[error("Invalid number of players {0} (expect 0..={max})", max = crate::MAX_PLAYERS)]
    InvalidPlayerCount(i64),

    /// Players are registered once per game
    #[error("Players are already registered")]
    AlreadyRegistered,

    /// All board slots are filled
    #[error("Board is full")]
    BoardFull,

    /// Only the letters `A` ..= `Z` can be put on the board
    #[error("Invalid board letter '{0}'")]
    InvalidLetter(char),

    /// A guess for a player that is not registered
    #[error("Guess for unknown player {0}")]
    UnknownPlayer(usize),

    /// More than one guess for the same player in one round
    #[error("Player {0} guessed twice in one round")]
    DuplicateGuess(usize),

    /// Round scores must have one entry per player
    #[error("Got {got} round scores for {expected} players")]
    ScoreCountMismatch { expected: usize, got: usize },

    /// Error reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input collaborator has nothing left to give
    #[error("Unexpected end of input")]
    EndOfInput,
}
