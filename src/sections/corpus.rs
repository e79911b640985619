//! Corpus section - reports membership in the common-password corpus.

use super::SectionResult;

/// Reports corpus membership. The lookup itself happens in the analyzer;
/// this section only turns the flag into a problem description.
pub fn corpus_section(is_common: bool) -> SectionResult {
    is_common.then(|| "Found in common password lists".to_string())
}
