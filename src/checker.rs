//! Typo checker for extracted dialogue text.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::CheckerConfig;
use crate::dictionary::Dictionary;

lazy_static! {
    /// Latin word spans, allowing inner apostrophes and hyphens
    static ref WORD_RE: Regex = Regex::new(r"[A-Za-z][A-Za-z'\-]*").unwrap();
}

/// Checks dialogue text for words the dictionary does not recognize
pub struct TypoChecker {
    min_word_length: usize,
    ignore_words: HashSet<String>,
}

impl TypoChecker {
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            min_word_length: config.min_word_length,
            ignore_words: config.ignore_words.iter().cloned().collect(),
        }
    }

    /// Collect words in `text` the dictionary rejects.
    ///
    /// Short words, ignore-listed words, and all-uppercase words (acronyms)
    /// are never checked. Duplicates within one text collapse; callers sort
    /// at reporting time.
    pub fn find_typos(&self, text: &str, dictionary: &dyn Dictionary) -> HashSet<String> {
        let mut typos = HashSet::new();

        for word_match in WORD_RE.find_iter(text) {
            let word = word_match.as_str();
            let lower = word.to_lowercase();

            if lower.chars().count() < self.min_word_length {
                continue;
            }
            if self.ignore_words.contains(&lower) {
                continue;
            }
            if is_all_uppercase(word) {
                continue;
            }

            if !dictionary.check(word) {
                typos.insert(word.to_string());
            }
        }

        typos
    }
}

/// Whether every cased character is uppercase (and at least one exists)
fn is_all_uppercase(word: &str) -> bool {
    let mut has_upper = false;
    for c in word.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    fn checker() -> TypoChecker {
        TypoChecker::new(&CheckerConfig::default())
    }

    fn dict(words: &[&str]) -> WordListDictionary {
        WordListDictionary::from_words(words.iter().copied())
    }

    #[test]
    fn test_misspelled_word_reported() {
        let dictionary = dict(&["quick", "brown", "fox", "the"]);
        let typos = checker().find_typos("Teh quick brown fox", &dictionary);

        assert_eq!(typos, HashSet::from(["Teh".to_string()]));
    }

    #[test]
    fn test_clean_text_reports_nothing() {
        let dictionary = dict(&["hello", "there"]);
        let typos = checker().find_typos("Hello there.", &dictionary);
        assert!(typos.is_empty());
    }

    #[test]
    fn test_short_words_skipped() {
        let dictionary = dict(&[]);
        let typos = checker().find_typos("Hi ok no", &dictionary);
        assert!(typos.is_empty());
    }

    #[test]
    fn test_all_uppercase_skipped() {
        let dictionary = dict(&[]);
        let typos = checker().find_typos("NASA launched", &dictionary);

        assert!(!typos.contains("NASA"));
        assert!(typos.contains("launched"));
    }

    #[test]
    fn test_ignore_list_skipped() {
        let dictionary = dict(&[]);
        let typos = checker().find_typos("renpy Renpy RENPY", &dictionary);
        // ignore list matches on the lowercase form; the all-caps form is
        // skipped as an acronym anyway
        assert!(typos.is_empty());
    }

    #[test]
    fn test_original_casing_preserved_in_result() {
        let dictionary = dict(&[]);
        let typos = checker().find_typos("Frobnicate the frobnicator", &dictionary);

        assert!(typos.contains("Frobnicate"));
        assert!(typos.contains("frobnicator"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let dictionary = dict(&[]);
        let typos = checker().find_typos("teh teh teh", &dictionary);
        assert_eq!(typos.len(), 1);
    }

    #[test]
    fn test_apostrophes_and_hyphens_stay_in_token() {
        let dictionary = dict(&["don't", "well-known"]);
        let typos = checker().find_typos("don't well-known wasn't", &dictionary);

        assert_eq!(typos, HashSet::from(["wasn't".to_string()]));
    }

    #[test]
    fn test_seeded_words_accepted() {
        let mut dictionary = dict(&[]);
        dictionary.add("videogame");
        let typos = checker().find_typos("my videogame", &dictionary);

        assert!(!typos.contains("videogame"));
    }
}
