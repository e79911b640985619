//! Character-set entropy model.
//!
//! Strength is estimated from the character classes present in a password,
//! not from a statistical language model: every password of a given length
//! and composition is treated as equally strong regardless of actual
//! predictability. This is a documented limitation of the model.

/// Reference set of ASCII punctuation used for the "special" class (32 chars).
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Character-class flags for a password, computed in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digits: bool,
    pub has_special: bool,
}

impl CharClasses {
    /// Classifies every character of `password` into the four disjoint
    /// alphabets.
    pub fn of(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            if c.is_lowercase() {
                classes.has_lower = true;
            } else if c.is_uppercase() {
                classes.has_upper = true;
            } else if c.is_ascii_digit() {
                classes.has_digits = true;
            } else if PUNCTUATION.contains(c) {
                classes.has_special = true;
            }
        }
        classes
    }

    /// Effective alphabet size: the summed sizes of the classes present
    /// (26 + 26 + 10 + 32). Falls back to 26 when no class matches.
    pub fn alphabet_size(&self) -> u32 {
        let mut size = 0;
        if self.has_lower {
            size += 26;
        }
        if self.has_upper {
            size += 26;
        }
        if self.has_digits {
            size += 10;
        }
        if self.has_special {
            size += 32;
        }
        if size == 0 { 26 } else { size }
    }
}

/// Estimates password strength in bits: `length * log2(alphabet_size)`.
///
/// The empty string has entropy 0.0 exactly.
pub fn estimate_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    let classes = CharClasses::of(password);
    password.chars().count() as f64 * f64::from(classes.alphabet_size()).log2()
}
