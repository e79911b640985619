//! Fixed vocabulary for memorable password assembly.

/// Word pool drawn from when composing memorable passwords.
/// Constant for the lifetime of the process.
pub const WORDS: [&str; 34] = [
    "sun", "moon", "star", "sky", "earth", "water", "fire", "wind",
    "tree", "flower", "house", "car", "human", "animal", "time",
    "love", "friend", "family", "mountain", "sea", "river", "book",
    "computer", "phone", "window", "door", "chair",
    "blue", "red", "green", "yellow", "black", "white", "orange",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_no_empty_words() {
        for (i, word) in WORDS.iter().enumerate() {
            assert!(!word.is_empty(), "word at index {} is empty", i);
        }
    }

    #[test]
    fn test_all_lowercase() {
        for word in WORDS {
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn test_words_are_distinct() {
        let unique: HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
