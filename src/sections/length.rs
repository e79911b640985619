//! Length section - checks password length against recommended minimums.

use super::SectionResult;

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

/// Checks the password length.
///
/// # Returns
/// - `Some(problem)` when the password is below the hard or recommended
///   minimum
/// - `None` when the length is sufficient
pub fn length_section(password: &str) -> SectionResult {
    let length = password.chars().count();
    if length < MIN_LENGTH {
        Some(format!(
            "Too short (minimum recommended: {} characters)",
            RECOMMENDED_LENGTH
        ))
    } else if length < RECOMMENDED_LENGTH {
        Some(format!(
            "Suboptimal length (recommended: {}+ characters)",
            RECOMMENDED_LENGTH
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let result = length_section("abcdefg");
        assert_eq!(
            result,
            Some("Too short (minimum recommended: 12 characters)".to_string())
        );
    }

    #[test]
    fn test_length_section_empty() {
        assert!(length_section("").unwrap().contains("Too short"));
    }

    #[test]
    fn test_length_section_suboptimal() {
        let result = length_section("abcdefgh");
        assert_eq!(
            result,
            Some("Suboptimal length (recommended: 12+ characters)".to_string())
        );
    }

    #[test]
    fn test_length_section_sufficient() {
        assert_eq!(length_section("abcdefghijkl"), None);
    }
}
