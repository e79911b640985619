//! Character variety sections - one check per missing character class.

use super::SectionResult;
use crate::entropy::CharClasses;

/// Reports a missing uppercase letter.
pub fn uppercase_section(classes: &CharClasses) -> SectionResult {
    (!classes.has_upper).then(|| "Missing uppercase letters".to_string())
}

/// Reports a missing digit.
pub fn digits_section(classes: &CharClasses) -> SectionResult {
    (!classes.has_digits).then(|| "Missing digits".to_string())
}

/// Reports a missing special character.
pub fn special_section(classes: &CharClasses) -> SectionResult {
    (!classes.has_special).then(|| "Missing special characters".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_uppercase() {
        let classes = CharClasses::of("lower123!");
        assert!(uppercase_section(&classes).is_some());
        assert!(digits_section(&classes).is_none());
        assert!(special_section(&classes).is_none());
    }

    #[test]
    fn test_missing_digits_and_special() {
        let classes = CharClasses::of("OnlyLetters");
        assert!(uppercase_section(&classes).is_none());
        assert_eq!(digits_section(&classes), Some("Missing digits".to_string()));
        assert_eq!(
            special_section(&classes),
            Some("Missing special characters".to_string())
        );
    }

    #[test]
    fn test_all_classes_present() {
        let classes = CharClasses::of("Full1!set");
        assert!(uppercase_section(&classes).is_none());
        assert!(digits_section(&classes).is_none());
        assert!(special_section(&classes).is_none());
    }
}
