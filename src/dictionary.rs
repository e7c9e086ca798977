//! Spellchecking dictionary capability.
//!
//! The checker only needs two operations from a dictionary: membership and
//! augmentation. Both sit behind the [`Dictionary`] trait so any locale-aware
//! backend can be slotted in; the shipped backend is a plain word-list set.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::DictionaryConfig;

/// Errors raised while building a dictionary backend.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// I/O error reading a word-list file
    #[error("I/O error reading word list: {0}")]
    Io(#[from] io::Error),

    /// No word list could be located for the requested locale
    #[error("no word list found for locale {locale}; checked {checked:?}")]
    WordListNotFound { locale: String, checked: Vec<PathBuf> },
}

/// Spellchecking capability used by the typo checker.
///
/// Seeding via [`add`](Dictionary::add) happens once at startup, before any
/// [`check`](Dictionary::check) call; entries are never removed.
pub trait Dictionary {
    /// Whether the word, as written, is recognized
    fn check(&self, word: &str) -> bool;

    /// Accept an additional word, case preserved as given
    fn add(&mut self, word: &str);
}

/// Word-list-backed dictionary.
///
/// A word passes [`check`](Dictionary::check) when it appears verbatim or when
/// its lowercase form appears, so sentence-initial capitalization of a known
/// word is accepted while an unknown casing like "nasa" for a proper noun is
/// not invented.
#[derive(Debug)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from configuration, loading the base word list and
    /// seeding the project word list.
    pub fn from_config(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        let path = match &config.word_list {
            Some(path) => path.clone(),
            None => locate_word_list(&config.language)?,
        };

        let mut dictionary = Self::load(&path)?;
        for word in &config.user_dictionary {
            dictionary.add(word);
        }
        Ok(dictionary)
    }

    /// Load a one-word-per-line word-list file
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path)?;
        let words: HashSet<String> = content
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        debug!("loaded {} words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Build a dictionary from an explicit word set (used by tests and embedders)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl Dictionary for WordListDictionary {
    fn check(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        let lower = word.to_lowercase();
        lower != word && self.words.contains(&lower)
    }

    fn add(&mut self, word: &str) {
        self.words.insert(word.to_string());
    }
}

/// Probe the standard system word-list locations for the given locale.
fn locate_word_list(locale: &str) -> Result<PathBuf, DictionaryError> {
    let candidates = word_list_candidates(locale);
    for candidate in &candidates {
        if candidate.exists() {
            return Ok(candidate.clone());
        }
    }
    Err(DictionaryError::WordListNotFound {
        locale: locale.to_string(),
        checked: candidates,
    })
}

fn word_list_candidates(locale: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    // Debian/Ubuntu install locale word lists under these names.
    match locale {
        "en_US" => candidates.push(PathBuf::from("/usr/share/dict/american-english")),
        "en_GB" => candidates.push(PathBuf::from("/usr/share/dict/british-english")),
        _ => {}
    }
    candidates.push(PathBuf::from("/usr/share/dict/words"));
    candidates
}
