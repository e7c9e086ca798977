//! Script tree scanning and annotation output.
//!
//! Walks the project's `game/` directory, runs every script line through the
//! dialogue extractor and typo checker, and prints one GitHub Actions
//! `::warning` annotation per flagged line.

use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

use crate::checker::TypoChecker;
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::extractor::DialogueExtractor;

/// Subdirectory of the project root holding the scripts
pub const SEARCH_DIR: &str = "game";

/// Locate `<base_dir>/game`, the directory scanning starts from.
///
/// A missing root is the one guarded precondition: callers print the returned
/// diagnostic and exit 1 instead of aborting mid-run.
pub fn locate_search_root(base_dir: &Path) -> Result<PathBuf, String> {
    let root = base_dir.join(SEARCH_DIR);
    if root.exists() {
        Ok(root)
    } else {
        Err(format!("game folder doesnt exist at {}", root.display()))
    }
}

/// Summary of a completed scan.
///
/// Findings are advisory; whether they affect the exit code is the caller's
/// decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Script files read
    pub files_scanned: usize,
    /// Lines that produced at least one misspelling warning
    pub lines_flagged: usize,
}

impl ScanReport {
    pub fn any_typos(&self) -> bool {
        self.lines_flagged > 0
    }

    /// Process exit code for a completed scan.
    ///
    /// A completed scan exits 0 regardless of findings; only strict mode
    /// turns findings into a failure.
    pub fn exit_code(&self, strict: bool) -> u8 {
        if strict && self.any_typos() {
            1
        } else {
            0
        }
    }
}

/// Walks script files and reports misspelled dialogue words
pub struct Scanner {
    extractor: DialogueExtractor,
    checker: TypoChecker,
    dictionary: Box<dyn Dictionary>,
    extension: String,
    translation_dir: String,
}

impl Scanner {
    /// Build a scanner from configuration and an already-seeded dictionary.
    pub fn new(config: &Config, dictionary: Box<dyn Dictionary>) -> Self {
        Self {
            extractor: DialogueExtractor::new(config.scripts.code_prefixes.clone()),
            checker: TypoChecker::new(&config.checker),
            dictionary,
            extension: config.scripts.extension.clone(),
            translation_dir: config.scripts.translation_dir.clone(),
        }
    }

    /// Scan `<base_dir>/game`, printing annotations to stdout.
    ///
    /// The search root must exist; callers check that precondition and map it
    /// to the documented exit code.
    pub fn scan(&self, base_dir: &Path) -> Result<ScanReport> {
        self.scan_with_output(base_dir, &mut io::stdout().lock())
    }

    /// Scan with annotations written to an arbitrary writer.
    pub fn scan_with_output(&self, base_dir: &Path, out: &mut dyn Write) -> Result<ScanReport> {
        let search_root = base_dir.join(SEARCH_DIR);
        let mut report = ScanReport::default();

        for entry in WalkDir::new(&search_root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if self.is_translation(path, &search_root) {
                debug!("skipping translated script {}", path.display());
                continue;
            }

            let rel_path = annotation_path(path, base_dir);
            self.scan_file(path, &rel_path, out, &mut report)?;
        }

        Ok(report)
    }

    /// Whether the file sits under the reserved translation folder.
    fn is_translation(&self, path: &Path, search_root: &Path) -> bool {
        let Ok(rel) = path.strip_prefix(search_root) else {
            return false;
        };
        match rel.components().next() {
            Some(Component::Normal(first)) => first == self.translation_dir.as_str(),
            _ => false,
        }
    }

    fn scan_file(
        &self,
        path: &Path,
        rel_path: &str,
        out: &mut dyn Write,
        report: &mut ScanReport,
    ) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        report.files_scanned += 1;

        for (idx, line) in content.lines().enumerate() {
            let lineno = idx + 1;

            let Some(text) = self.extractor.extract_dialogue(line) else {
                continue;
            };
            if text.is_empty() {
                continue;
            }

            let typos = self.checker.find_typos(&text, self.dictionary.as_ref());
            if typos.is_empty() {
                continue;
            }

            let mut typo_list: Vec<String> = typos.into_iter().collect();
            typo_list.sort();

            writeln!(
                out,
                "::warning file={rel_path},line={lineno}::Possibly misspelled words: {} | Text: {}",
                typo_list.join(", "),
                text
            )?;
            report.lines_flagged += 1;
        }

        Ok(())
    }
}

/// Render a script path relative to the project root with forward slashes,
/// as GitHub annotations expect.
fn annotation_path(path: &Path, base_dir: &Path) -> String {
    let rel: PathBuf = path.strip_prefix(base_dir).unwrap_or(path).to_path_buf();
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.join("/")
}
