//! Password analyzer - composes the entropy model, scorer, sections and
//! corpus into a single characterization of a password.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::path::Path;

use crate::corpus::Corpus;
use crate::entropy::{CharClasses, estimate_entropy};
use crate::scorer::{Strength, score_from_entropy, suggest_improvements};
use crate::sections::detect_problems;

/// Full characterization of a single password.
///
/// Field names are stable for serialization interop. The password itself
/// is never stored here.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordAnalysis {
    pub password_length: usize,
    pub entropy: f64,
    pub score: u8,
    pub strength_category: Strength,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub is_common: bool,
    pub problems: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Analysis engine holding the immutable common-password corpus.
///
/// Construction never fails: a missing or unreadable corpus source falls
/// back to the built-in list. Once constructed the engine is read-only
/// and freely shareable across threads.
#[derive(Debug, Clone)]
pub struct PasswordEngine {
    corpus: Corpus,
}

impl PasswordEngine {
    /// Engine with the corpus resolved from `PWD_CORPUS_PATH` or the
    /// default asset path.
    pub fn new() -> Self {
        Self {
            corpus: Corpus::load(None),
        }
    }

    /// Engine with the corpus loaded from an explicit file path.
    pub fn with_corpus_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            corpus: Corpus::load(Some(path.as_ref())),
        }
    }

    /// Engine with a corpus supplied directly by an external loader.
    pub fn with_corpus(corpus: Corpus) -> Self {
        Self { corpus }
    }

    /// Engine built from an ordered entry sequence.
    pub fn from_corpus<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            corpus: Corpus::from_entries(entries),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Analyzes a password.
    ///
    /// Deterministic for every field except the synthesized improved
    /// candidate inside `suggestions`, which draws from `rng`.
    pub fn analyze<R: Rng>(&self, password: &SecretString, rng: &mut R) -> PasswordAnalysis {
        let pwd = password.expose_secret();

        let classes = CharClasses::of(pwd);
        let entropy = estimate_entropy(pwd);
        let (score, strength_category) = score_from_entropy(entropy);
        let is_common = self.corpus.contains(pwd);
        let problems = detect_problems(pwd, &classes, is_common);
        let suggestions = suggest_improvements(pwd, &classes, score, rng);

        PasswordAnalysis {
            password_length: pwd.chars().count(),
            entropy,
            score,
            strength_category,
            has_lower: classes.has_lower,
            has_upper: classes.has_upper,
            has_digits: classes.has_digits,
            has_special: classes.has_special,
            is_common,
            problems,
            suggestions,
        }
    }
}

impl Default for PasswordEngine {
    fn default() -> Self {
        Self::with_corpus(Corpus::default())
    }
}
