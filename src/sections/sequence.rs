//! Sequence section - scans for predictable low-entropy substrings.

use super::SectionResult;

/// Ordered scan list; only the first match is reported.
const SEQUENCES: [&str; 6] = ["123", "abc", "qwe", "asd", "password", "parola"];

/// Scans the password (case-insensitive) for common sequences, stopping
/// at the first match.
pub fn sequence_section(password: &str) -> SectionResult {
    let lowered = password.to_lowercase();
    SEQUENCES
        .iter()
        .find(|seq| lowered.contains(*seq))
        .map(|seq| format!("Contains common sequence '{}'", seq))
}
