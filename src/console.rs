//! Text prompts and reports for the game, over any reader and writer.
use crate::board::Board;
use crate::game::{Input, Output, RoundReport};
use crate::letters::LetterKind;
use crate::player::Player;
use crate::Error;
use std::io::{BufRead, Write};

/// Asks questions on `writer` and reads one answer per line from `reader`.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Write `prompt` and read the answer, without the line ending.
    fn ask(&mut self, prompt: &str) -> Result<String, Error> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::EndOfInput);
        }
        let answer = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(String::from(answer))
    }
}

impl<R: BufRead, W: Write> Input for Console<R, W> {
    /// Asks again until the answer is a number.
    fn player_count(&mut self, max: usize) -> Result<i64, Error> {
        loop {
            let answer = self.ask(&format!("How many players are playing (1-{})? ", max))?;
            match answer.trim().parse() {
                Ok(count) => return Ok(count),
                Err(_) => writeln!(self.writer, "Please enter a number.")?,
            }
        }
    }

    fn player_name(&mut self, ordinal: usize) -> Result<String, Error> {
        if ordinal == 1 {
            writeln!(self.writer, "Give names for these players:")?;
        }
        self.ask(&format!("Player {}'s name: ", ordinal))
    }

    fn letter_kind(&mut self, slot: usize) -> Result<LetterKind, Error> {
        if slot == 0 {
            writeln!(
                self.writer,
                "Choose {} letters to put up on the board.",
                crate::BOARD_SIZE
            )?;
        }
        let answer = self.ask(&format!("{}. Vowel (v) or Consonant (c)? ", slot + 1))?;
        Ok(LetterKind::from_choice(&answer))
    }

    fn guess(&mut self, player: &Player) -> Result<String, Error> {
        self.ask(&format!("{}'s guess: ", player.name))
    }
}

/// Writes the board, round results and standings as text.
#[derive(Debug)]
pub struct Report<W> {
    writer: W,
}

impl<W: Write> Report<W> {
    pub fn new(writer: W) -> Self {
        Report { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for Report<W> {
    fn invalid_player_count(&mut self, _count: i64) -> Result<(), Error> {
        writeln!(self.writer, "Invalid number of players.")?;
        Ok(())
    }

    fn board(&mut self, board: &Board) -> Result<(), Error> {
        writeln!(self.writer, "Final board is {}", board)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn round(&mut self, report: &RoundReport) -> Result<(), Error> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Round {}:", report.round)?;
        for (guess, score) in report.guesses.iter().zip(&report.scores) {
            match guess.rejection {
                Some(rejection) => writeln!(
                    self.writer,
                    "  {:<12} 0 points ({})",
                    guess.word.to_uppercase(),
                    rejection
                )?,
                None => writeln!(
                    self.writer,
                    "  {:<12} {} points",
                    guess.word.to_uppercase(),
                    score
                )?,
            }
        }
        if !report.best.is_empty() {
            let best: Vec<String> = report
                .best
                .iter()
                .map(|b| format!("{} ({})", b.word.to_uppercase(), b.score))
                .collect();
            writeln!(self.writer, "Best words: {}", best.join(", "))?;
        }
        Ok(())
    }

    fn standings(&mut self, players: &[Player]) -> Result<(), Error> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Current state of the game is...")?;
        for player in players {
            writeln!(self.writer, "{}", player)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
