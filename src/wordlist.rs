use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// Membership test for lowercase words. This is all the game needs from a dictionary.
pub trait Dictionary {
    /// Returns true if `word` is in the dictionary. `word` must be lowercase.
    fn contains(&self, word: &str) -> bool;
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The set of words accepted in the game.
pub struct Wordlist {
    words: HashSet<String>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

impl Wordlist {
    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one word per line. Words are stored in lowercase, blank lines are skipped.
    /// ## Errors
    /// Fails if the wordlist can not be read.
    pub fn from_file(wordfile: &str) -> Result<Wordlist, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut wordlist = Wordlist::from_lines(contents.lines());
        wordlist.wordfile = String::from(wordfile);
        tracing::info!(words = wordlist.len(), wordfile, "loaded wordlist");
        Ok(wordlist)
    }

    /// Build a wordlist from a list of words.
    pub fn from_words(words: &[&str]) -> Wordlist {
        Wordlist::from_lines(words.iter().copied())
    }

    fn from_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> Wordlist {
        let words = lines
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect();
        Wordlist {
            words,
            wordfile: String::new(),
        }
    }

    /// Returns true if `word` is in wordlist, ignoring case.
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// The number of words in the wordlist.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[cfg(feature = "rayon")]
    pub(crate) fn words(&self) -> &HashSet<String> {
        &self.words
    }
}

impl Dictionary for Wordlist {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
