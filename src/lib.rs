//! Password generation and strength analysis library
//!
//! This library evaluates password strength from a character-set entropy
//! model, detects structural weaknesses and membership in a
//! common-password corpus, and generates random or memorable passwords.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CORPUS_PATH`: Custom path to the common-password corpus file
//!   (default: `./assets/common-passwords.txt`)
//! - `PWD_HISTORY_PATH`: Custom path to the history file
//!   (default: `./password_history.enc`)
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{PasswordEngine, generate};
//! use secrecy::SecretString;
//!
//! let engine = PasswordEngine::default();
//! let mut rng = rand::thread_rng();
//!
//! // Generate a password with all character classes
//! let password = generate(16, true, true, true, &mut rng).unwrap();
//!
//! // Analyze it
//! let analysis = engine.analyze(&SecretString::new(password.into()), &mut rng);
//! println!("Score: {}/100 ({})", analysis.score, analysis.strength_category);
//! ```

// Internal modules
mod analyzer;
mod corpus;
mod entropy;
mod generator;
mod history;
mod scorer;
mod sections;
mod wordlist;

// Public API
pub use analyzer::{PasswordAnalysis, PasswordEngine};
pub use corpus::{Corpus, CorpusError, MAX_CORPUS_SIZE, default_corpus_path, load_corpus_file};
pub use entropy::{CharClasses, PUNCTUATION, estimate_entropy};
pub use generator::{
    GenerateError, GenerationMode, GenerationRequest, generate, generate_batch,
    generate_memorable,
};
pub use history::{
    HistoryEntry, HistoryError, HistorySink, HistoryStore, MAX_HISTORY_ENTRIES,
};
pub use scorer::{Strength, score_from_entropy, suggest_improvements};
pub use sections::detect_problems;
pub use wordlist::WORDS;
