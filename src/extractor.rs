//! Dialogue extraction from Ren'Py script lines.
//!
//! Separates narrative dialogue ("say" statements and narrator lines) from
//! structural script statements, and strips interpolation/markup placeholders
//! so only prose reaches the spellchecker.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Dialogue pattern:
    ///   e "Hello there."
    ///   "Narrator line."
    static ref DIALOGUE_RE: Regex = Regex::new(r#"^\s*(?:\w+\s+)?"(.+?)"\s*$"#).unwrap();

    /// Interpolation inserts, like [player]
    static ref BRACKET_RE: Regex = Regex::new(r"\[.*?\]").unwrap();

    /// Text tags, like {i} or {color=#fff}
    static ref BRACE_RE: Regex = Regex::new(r"\{.*?\}").unwrap();
}

/// Extracts spell-checkable dialogue text from script lines
pub struct DialogueExtractor {
    code_prefixes: Vec<String>,
}

impl DialogueExtractor {
    pub fn new(code_prefixes: Vec<String>) -> Self {
        Self { code_prefixes }
    }

    /// Whether a line is a structural statement rather than dialogue.
    ///
    /// Blank lines count as code (trivially skipped). Otherwise a literal,
    /// case-sensitive prefix test against the configured keyword list.
    pub fn is_probably_code(&self, line: &str) -> bool {
        let stripped = line.trim();
        if stripped.is_empty() {
            return true;
        }
        self.code_prefixes
            .iter()
            .any(|prefix| stripped.starts_with(prefix.as_str()))
    }

    /// Extract the quoted dialogue text from a line, with placeholders
    /// replaced by single spaces.
    ///
    /// Returns `None` for code lines and lines that are not a quoted
    /// dialogue statement. The returned text may be empty after stripping;
    /// callers treat that as nothing to check.
    pub fn extract_dialogue(&self, line: &str) -> Option<String> {
        if self.is_probably_code(line) {
            return None;
        }

        let captures = DIALOGUE_RE.captures(line)?;
        let text = captures.get(1)?.as_str();

        // remove inserts, like [player] or {color}
        let text = BRACKET_RE.replace_all(text, " ");
        let text = BRACE_RE.replace_all(&text, " ");

        Some(text.trim().to_string())
    }
}
