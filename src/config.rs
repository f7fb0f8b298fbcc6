/// Default location of the wordfile, one english word per line.
/// The list at <https://github.com/dwyl/english-words> works well.
pub const DEFAULT_WORDFILE: &str = "data/words_alpha.txt";

/// Default number of rounds in a game.
pub const DEFAULT_ROUNDS: usize = 3;

/// Settings for a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rounds to play
    pub rounds: usize,
    /// Path of the wordfile
    pub wordfile: String,
    /// Seed for the letter pool. A random seed is used if None.
    pub seed: Option<u64>,
    /// Number of best words to show after each round, 0 to show none
    pub best: usize,
    /// Fixed board letters used every round, instead of drawing letters
    pub board: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rounds: DEFAULT_ROUNDS,
            wordfile: String::from(DEFAULT_WORDFILE),
            seed: None,
            best: 0,
            board: None,
        }
    }
}
