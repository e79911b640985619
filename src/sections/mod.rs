//! Password problem-detection sections
//!
//! Each section inspects one structural aspect of a password and reports
//! at most one problem. Sections run in a fixed order, independently of
//! the entropy score.

mod composition;
mod corpus;
mod length;
mod sequence;
mod variety;

pub use composition::{digits_only_section, letters_only_section};
pub use corpus::corpus_section;
pub use length::length_section;
pub use sequence::sequence_section;
pub use variety::{digits_section, special_section, uppercase_section};

use crate::entropy::CharClasses;

/// Outcome of a single section.
/// - `Some(problem)` - Section failed with a problem description
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// Runs every section in order and collects the failures.
pub fn detect_problems(password: &str, classes: &CharClasses, is_common: bool) -> Vec<String> {
    [
        length_section(password),
        uppercase_section(classes),
        digits_section(classes),
        special_section(classes),
        corpus_section(is_common),
        digits_only_section(password),
        letters_only_section(password),
        sequence_section(password),
    ]
    .into_iter()
    .flatten()
    .collect()
}
