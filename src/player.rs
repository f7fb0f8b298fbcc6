use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// The maximum number of players in a game.
pub const MAX_PLAYERS: usize = 4;

/// A player and the score so far.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    /// zero-based id, in order of registration
    pub id: usize,
    pub name: String,
    /// cumulative score
    pub score: u32,
    /// true if no other player has a higher score
    pub leading: bool,
}

impl Player {
    fn new(id: usize, name: &str) -> Player {
        let name = name.trim();
        let name = if name.chars().count() <= 1 {
            default_name(id)
        } else {
            String::from(name)
        };
        Player {
            id,
            name,
            score: 0,
            leading: true,
        }
    }
}

/// Display a player as `Player 0. name, Score: 12, *Leading*`
impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Player {}. {}, Score: {},",
            self.id, self.name, self.score
        )?;
        if self.leading {
            write!(f, " *Leading*")?;
        }
        Ok(())
    }
}

/// Name for a player that did not give a usable one.
pub fn default_name(id: usize) -> String {
    format!("Player_{}", id + 1)
}

/// Keeps track of the players, their scores and who is leading.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> PlayerRegistry {
        PlayerRegistry::default()
    }

    /// Register one player per name. Names are trimmed first; names that are then
    /// 0 or 1 characters long are replaced with `Player_<n>`.
    /// ## Errors
    /// - [`Error::InvalidPlayerCount`] if there are more than [`MAX_PLAYERS`] names,
    /// - [`Error::AlreadyRegistered`] if players were registered before.
    pub fn register<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), Error> {
        self.register_count(names.len() as i64, names)
    }

    /// Register `count` players. If the number of `names` is not `count`, all
    /// players get a default name.
    /// ## Errors
    /// - [`Error::InvalidPlayerCount`] if `count` is negative or more than [`MAX_PLAYERS`],
    /// - [`Error::AlreadyRegistered`] if players were registered before.
    ///
    /// The registry is not changed on error.
    pub fn register_count<S: AsRef<str>>(&mut self, count: i64, names: &[S]) -> Result<(), Error> {
        if count < 0 || count > MAX_PLAYERS as i64 {
            tracing::warn!(count, "invalid number of players");
            return Err(Error::InvalidPlayerCount(count));
        }
        if !self.players.is_empty() {
            return Err(Error::AlreadyRegistered);
        }
        let count = count as usize;
        self.players = if names.len() == count {
            names
                .iter()
                .enumerate()
                .map(|(id, name)| Player::new(id, name.as_ref()))
                .collect()
        } else {
            (0..count).map(|id| Player::new(id, "")).collect()
        };
        tracing::info!(players = count, "registered players");
        Ok(())
    }

    /// Add the round scores to the players, and update who is leading.
    /// ## Errors
    /// [`Error::ScoreCountMismatch`] if there is not exactly one score per player.
    /// The registry is not changed on error.
    pub fn apply_round_scores(&mut self, round_scores: &[u32]) -> Result<(), Error> {
        if round_scores.len() != self.players.len() {
            return Err(Error::ScoreCountMismatch {
                expected: self.players.len(),
                got: round_scores.len(),
            });
        }
        for (player, &score) in self.players.iter_mut().zip(round_scores) {
            player.score += score;
        }
        let highest = self.players.iter().map(|p| p.score).max().unwrap_or(0);
        for player in self.players.iter_mut() {
            player.leading = player.score == highest;
        }
        Ok(())
    }

    /// The players in id order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// A copy of all players, for reporting.
    pub fn snapshot(&self) -> Vec<Player> {
        self.players.clone()
    }

    /// The players that have the highest score.
    pub fn leaders(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.leading).collect()
    }

    pub fn get(&self, id: usize) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
