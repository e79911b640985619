//! Known-weak password corpus.
//!
//! Handles loading and querying the common-password list. The corpus is
//! loaded once at engine construction from an external file and falls back
//! to a built-in default list when the source is missing, empty or
//! unreadable. Membership testing is case-insensitive and O(1).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum number of entries retained from the ordered source list.
pub const MAX_CORPUS_SIZE: usize = 1000;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Corpus file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read corpus file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Corpus file is empty")]
    EmptyFile,
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `PWD_CORPUS_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn default_corpus_path() -> PathBuf {
    std::env::var("PWD_CORPUS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Reads an ordered password list from a file, one entry per line.
///
/// Blank lines are skipped and surrounding whitespace is trimmed; file
/// order is preserved.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn load_corpus_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CorpusError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(CorpusError::EmptyFile);
    }

    Ok(content
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect())
}

/// Immutable set of known-weak passwords, keyed by lowercased entry.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: HashSet<String>,
}

impl Corpus {
    /// Builds a corpus from an ordered entry sequence.
    ///
    /// The sequence is truncated to [`MAX_CORPUS_SIZE`] entries before the
    /// survivors are lowercased and deduplicated into the lookup set.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .take(MAX_CORPUS_SIZE)
            .map(|e| e.as_ref().to_lowercase())
            .collect();
        Self { entries }
    }

    /// Loads the corpus from `path`, or from [`default_corpus_path`] when
    /// `None`.
    ///
    /// A missing, empty or unreadable source is recovered by falling back
    /// to the built-in default list; this constructor never fails.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(default_corpus_path);

        match load_corpus_file(&path) {
            Ok(entries) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Corpus loaded: {} passwords from {:?}", entries.len(), path);
                Self::from_entries(entries)
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "Corpus load failed ({}), falling back to built-in list",
                    _err
                );
                Self::from_entries(default_entries())
            }
        }
    }

    /// Checks if a password is in the corpus (case-insensitive).
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    /// Number of distinct entries in the lookup set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Corpus {
    /// Corpus built from the built-in default list only.
    fn default() -> Self {
        Self::from_entries(default_entries())
    }
}

/// Built-in fallback list: the fixed top entries plus generated
/// `password{i}`/`parola{i}` variants, capped later by `from_entries`.
fn default_entries() -> Vec<String> {
    let mut entries: Vec<String> = [
        "password", "123456", "12345678", "1234", "qwerty", "12345",
        "dragon", "football", "baseball", "welcome", "abc123",
        "111111", "mustang", "access", "master", "michael", "superman",
        "696969", "123123", "batman", "trustno1", "monkey", "1234567",
        "letmein", "shadow", "ashley", "sunshine", "iloveyou", "fuckyou",
        "parola", "password123", "admin", "qwerty123", "welcome123",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for i in 1000..2000 {
        entries.push(format!("password{}", i));
        entries.push(format!("parola{}", i));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_default_corpus_path() {
        remove_env("PWD_CORPUS_PATH");
        assert_eq!(
            default_corpus_path(),
            PathBuf::from("./assets/common-passwords.txt")
        );

        set_env("PWD_CORPUS_PATH", "/custom/corpus.txt");
        assert_eq!(default_corpus_path(), PathBuf::from("/custom/corpus.txt"));
        remove_env("PWD_CORPUS_PATH");
    }

    #[test]
    fn test_load_corpus_file_not_found() {
        let result = load_corpus_file("/nonexistent/path/corpus.txt");
        assert!(matches!(result, Err(CorpusError::FileNotFound(_))));
    }

    #[test]
    fn test_load_corpus_file_empty() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let result = load_corpus_file(temp_file.path());
        assert!(matches!(result, Err(CorpusError::EmptyFile)));
    }

    #[test]
    fn test_load_corpus_file_preserves_order_and_skips_blanks() {
        let temp_file = setup_with_tempfile(&["first", "", "  second  ", "third"]);
        let entries = load_corpus_file(temp_file.path()).expect("load failed");
        assert_eq!(entries, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_from_entries_caps_ordered_input() {
        let entries: Vec<String> = (0..1500).map(|i| format!("entry{}", i)).collect();
        let corpus = Corpus::from_entries(&entries);
        assert_eq!(corpus.len(), MAX_CORPUS_SIZE);
        assert!(corpus.contains("entry0"));
        assert!(corpus.contains("entry999"));
        assert!(!corpus.contains("entry1000"));
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let corpus = Corpus::from_entries(["Password", "Qwerty"]);
        assert!(corpus.contains("password"));
        assert!(corpus.contains("PASSWORD"));
        assert!(corpus.contains("qwErTy"));
        assert!(!corpus.contains("uncommon987"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_file = setup_with_tempfile(&["hunter2", "letmein"]);
        let corpus = Corpus::load(Some(temp_file.path()));
        assert_eq!(corpus.len(), 2);
        assert!(corpus.contains("HUNTER2"));
        // Fallback list was not used
        assert!(!corpus.contains("dragon"));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let corpus = Corpus::load(Some(Path::new("/nonexistent/corpus.txt")));
        assert_eq!(corpus.len(), MAX_CORPUS_SIZE);
        assert!(corpus.contains("password"));
        assert!(corpus.contains("parola"));
        assert!(corpus.contains("password1000"));
        assert!(!corpus.contains("password1999"));
    }

    #[test]
    fn test_load_empty_file_falls_back() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let corpus = Corpus::load(Some(temp_file.path()));
        assert!(corpus.contains("qwerty"));
    }

    #[test]
    fn test_default_corpus_contains_fixed_entries() {
        let corpus = Corpus::default();
        for pwd in ["password", "123456", "qwerty", "password123", "parola"] {
            assert!(corpus.contains(pwd), "default corpus missing '{}'", pwd);
        }
    }
}
