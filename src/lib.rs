//! renlint - spellchecker for Ren'Py visual-novel scripts
//!
//! Extracts quoted dialogue from `.rpy` script files and flags likely
//! misspellings as GitHub Actions `::warning` annotations.

pub mod checker;
pub mod config;
pub mod dictionary;
pub mod extractor;
pub mod scanner;
