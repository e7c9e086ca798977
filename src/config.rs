//! Configuration management for renlint
//!
//! Handles loading and parsing of the `renlint.toml` configuration file.
//! Every field has a built-in default matching the stock Ren'Py linting
//! behavior, so running without a config file needs no setup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Dictionary backend settings
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Typo checker settings
    #[serde(default)]
    pub checker: CheckerConfig,

    /// Script layout settings
    #[serde(default)]
    pub scripts: ScriptsConfig,
}

/// Dictionary backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Dictionary language/locale code
    #[serde(default = "default_language")]
    pub language: String,

    /// Explicit word-list file; when unset, standard system paths are probed
    #[serde(default)]
    pub word_list: Option<PathBuf>,

    /// Project-specific words accepted in addition to the base dictionary
    #[serde(default = "default_user_dictionary")]
    pub user_dictionary: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            word_list: None,
            user_dictionary: default_user_dictionary(),
        }
    }
}

/// Typo checker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Words shorter than this are never checked
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Lowercase words excluded from spellchecking
    #[serde(default = "default_ignore_words")]
    pub ignore_words: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            min_word_length: default_min_word_length(),
            ignore_words: default_ignore_words(),
        }
    }
}

/// Script layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptsConfig {
    /// File extension of script files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Top-level directory under the search root holding translated scripts
    #[serde(default = "default_translation_dir")]
    pub translation_dir: String,

    /// Literal prefixes marking a line as a structural statement
    #[serde(default = "default_code_prefixes")]
    pub code_prefixes: Vec<String>,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            translation_dir: default_translation_dir(),
            code_prefixes: default_code_prefixes(),
        }
    }
}

fn default_language() -> String {
    "en_US".to_string()
}

fn default_user_dictionary() -> Vec<String> {
    ["videogame", "webcomics", "Umm", "Umm", "Ummm"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_min_word_length() -> usize {
    3
}

fn default_ignore_words() -> Vec<String> {
    vec!["renpy".to_string()]
}

fn default_extension() -> String {
    "rpy".to_string()
}

fn default_translation_dir() -> String {
    "tl".to_string()
}

fn default_code_prefixes() -> Vec<String> {
    [
        "label ",
        "define ",
        "screen ",
        "transform ",
        "init ",
        "python:",
        "$",
        "if ",
        "elif ",
        "else:",
        "while ",
        "for ",
        "return",
        "menu:",
        "jump ",
        "call ",
        "image ",
        "style ",
        "default ",
        "layeredimage ",
        "thumb",
        "background",
        "foreground",
        "add",
        "textbutton",
        "font",
        "#",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file is an error here; only the default-location probe in
    /// [`load_from_default`](Config::load_from_default) falls back silently.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Get default config file path
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "renlint")
            .map(|dirs| dirs.config_dir().join("renlint.toml"))
    }

    /// Load configuration from default path or workspace
    pub fn load_from_default() -> Self {
        // Try workspace path first
        let workspace_path = PathBuf::from("renlint.toml");
        if workspace_path.exists() {
            if let Ok(config) = Self::load(&workspace_path) {
                return config;
            }
        }

        // Try user config directory
        if let Some(default_path) = Self::default_path() {
            if default_path.exists() {
                if let Ok(config) = Self::load(&default_path) {
                    return config;
                }
            }
        }

        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.dictionary.language, "en_US");
        assert!(config.dictionary.word_list.is_none());
        assert_eq!(config.checker.min_word_length, 3);
        assert_eq!(config.checker.ignore_words, vec!["renpy"]);
        assert_eq!(config.scripts.extension, "rpy");
        assert_eq!(config.scripts.translation_dir, "tl");
        assert!(config.scripts.code_prefixes.contains(&"label ".to_string()));
        assert!(config.scripts.code_prefixes.contains(&"#".to_string()));
    }

    #[test]
    fn test_default_user_dictionary_keeps_duplicates() {
        // The seed list may contain duplicates; adding twice is harmless.
        let config = Config::default();
        let umms = config
            .dictionary
            .user_dictionary
            .iter()
            .filter(|w| *w == "Umm")
            .count();
        assert_eq!(umms, 2);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
[dictionary]
language = "en_GB"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.dictionary.language, "en_GB");
        assert_eq!(config.checker.min_word_length, 3); // defaults kept
        assert_eq!(config.scripts.extension, "rpy");
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[dictionary]
language = "en_US"
word_list = "/usr/share/dict/words"
user_dictionary = ["protag", "worldbuilding"]

[checker]
min_word_length = 4
ignore_words = ["renpy", "sfx"]

[scripts]
extension = "rpym"
translation_dir = "translations"
code_prefixes = ["label ", "$"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(
            config.dictionary.word_list,
            Some(PathBuf::from("/usr/share/dict/words"))
        );
        assert_eq!(config.dictionary.user_dictionary, vec!["protag", "worldbuilding"]);
        assert_eq!(config.checker.min_word_length, 4);
        assert_eq!(config.checker.ignore_words, vec!["renpy", "sfx"]);
        assert_eq!(config.scripts.extension, "rpym");
        assert_eq!(config.scripts.translation_dir, "translations");
        assert_eq!(config.scripts.code_prefixes, vec!["label ", "$"]);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        // An explicitly named config file must not fall back to defaults.
        let path = PathBuf::from("/nonexistent/path/renlint.toml");
        let err = Config::load(&path).unwrap_err();

        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dictionary").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn test_load_existing_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[checker]\nmin_word_length = 5").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.checker.min_word_length, 5);
    }

    #[test]
    fn test_serialize_config() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();

        assert!(toml_str.contains("[dictionary]"));
        assert!(toml_str.contains("[checker]"));
        assert!(toml_str.contains("[scripts]"));
    }
}
