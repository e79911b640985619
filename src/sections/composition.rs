//! Composition sections - single-class passwords.

use super::SectionResult;

/// Reports a non-empty password made up entirely of digits.
pub fn digits_only_section(password: &str) -> SectionResult {
    (!password.is_empty() && password.chars().all(char::is_numeric))
        .then(|| "Contains only digits".to_string())
}

/// Reports a non-empty password made up entirely of letters.
pub fn letters_only_section(password: &str) -> SectionResult {
    (!password.is_empty() && password.chars().all(char::is_alphabetic))
        .then(|| "Contains only letters".to_string())
}
