//! Password generation - constrained-random, memorable and batch modes.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entropy::PUNCTUATION;
use crate::wordlist::WORDS;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

const SEPARATORS: [&str; 4] = ["-", ".", "_", ""];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Length {requested} is too short for {required} required character classes")]
    LengthTooShort { requested: usize, required: usize },
    #[error("Word count {requested} exceeds the wordlist size ({available})")]
    WordCountTooLarge { requested: usize, available: usize },
    #[error("Word count must be at least 1")]
    WordCountZero,
    #[error("Batch count must be at least 1")]
    BatchCountZero,
}

/// Which of the two generation modes a request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Random,
    Memorable,
}

/// Explicit configuration record for generation requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub mode: GenerationMode,
    pub length: usize,
    pub upper: bool,
    pub numbers: bool,
    pub special: bool,
    pub word_count: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Random,
            length: 16,
            upper: true,
            numbers: true,
            special: true,
            word_count: 3,
        }
    }
}

/// Generates a random password of exactly `length` characters.
///
/// Lowercase is always enabled; each enabled class (lowercase included)
/// is seeded with one mandatory character drawn uniformly from that
/// class, the remaining positions are filled uniformly from the union
/// alphabet and the result is shuffled.
///
/// # Errors
///
/// [`GenerateError::LengthTooShort`] when `length` cannot hold one
/// character per enabled class. Generation fails rather than clamping.
pub fn generate<R: Rng>(
    length: usize,
    use_upper: bool,
    use_numbers: bool,
    use_special: bool,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let required = 1 + [use_upper, use_numbers, use_special]
        .iter()
        .filter(|&&enabled| enabled)
        .count();
    if length < required {
        return Err(GenerateError::LengthTooShort {
            requested: length,
            required,
        });
    }

    let mut alphabet = String::from(LOWERCASE);
    if use_upper {
        alphabet.push_str(UPPERCASE);
    }
    if use_numbers {
        alphabet.push_str(DIGITS);
    }
    if use_special {
        alphabet.push_str(PUNCTUATION);
    }

    let mut chars: Vec<char> = Vec::with_capacity(length);
    chars.push(pick(LOWERCASE, rng));
    if use_upper {
        chars.push(pick(UPPERCASE, rng));
    }
    if use_numbers {
        chars.push(pick(DIGITS, rng));
    }
    if use_special {
        chars.push(pick(PUNCTUATION, rng));
    }
    while chars.len() < length {
        chars.push(pick(&alphabet, rng));
    }

    chars.shuffle(rng);
    Ok(chars.into_iter().collect())
}

/// Generates a memorable password from distinct wordlist words.
///
/// Each word's capitalization is randomized, words are joined with a
/// separator drawn from `- . _ ""` and a two-digit number and/or one
/// punctuation character may be appended (independent coin flips). No
/// character-class presence is guaranteed; an all-lowercase result is
/// possible.
pub fn generate_memorable<R: Rng>(
    word_count: usize,
    rng: &mut R,
) -> Result<String, GenerateError> {
    if word_count == 0 {
        return Err(GenerateError::WordCountZero);
    }
    if word_count > WORDS.len() {
        return Err(GenerateError::WordCountTooLarge {
            requested: word_count,
            available: WORDS.len(),
        });
    }

    let words: Vec<&str> = WORDS.choose_multiple(rng, word_count).copied().collect();
    let add_number = rng.gen_bool(0.5);
    let add_special = rng.gen_bool(0.5);
    let separator = SEPARATORS[rng.gen_range(0..SEPARATORS.len())];

    let parts: Vec<String> = words
        .iter()
        .map(|word| {
            if rng.gen_bool(0.5) {
                capitalize(word)
            } else {
                (*word).to_string()
            }
        })
        .collect();

    let mut password = parts.join(separator);
    if add_number {
        password.push_str(&rng.gen_range(10..=99).to_string());
    }
    if add_special {
        password.push(pick(PUNCTUATION, rng));
    }

    Ok(password)
}

/// Applies the requested generation mode `count` times in strict
/// sequence. No deduplication between batch members.
pub fn generate_batch<R: Rng>(
    count: usize,
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError> {
    if count == 0 {
        return Err(GenerateError::BatchCountZero);
    }

    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let password = match request.mode {
            GenerationMode::Memorable => generate_memorable(request.word_count, rng)?,
            GenerationMode::Random => generate(
                request.length,
                request.upper,
                request.numbers,
                request.special,
                rng,
            )?,
        };
        passwords.push(password);
    }
    Ok(passwords)
}

/// Uniform draw from an ASCII character set.
fn pick<R: Rng>(set: &str, rng: &mut R) -> char {
    let bytes = set.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::CharClasses;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_guarantees_enabled_classes() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            let pwd = generate(16, true, true, true, &mut rng).expect("generation failed");
            assert_eq!(pwd.chars().count(), 16);
            let classes = CharClasses::of(&pwd);
            assert!(classes.has_lower, "no lowercase in '{}'", pwd);
            assert!(classes.has_upper, "no uppercase in '{}'", pwd);
            assert!(classes.has_digits, "no digit in '{}'", pwd);
            assert!(classes.has_special, "no symbol in '{}'", pwd);
        }
    }

    #[test]
    fn test_generate_lowercase_only() {
        let mut rng = StdRng::seed_from_u64(5);
        let pwd = generate(12, false, false, false, &mut rng).unwrap();
        assert_eq!(pwd.len(), 12);
        assert!(pwd.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_minimum_length() {
        let mut rng = StdRng::seed_from_u64(5);
        // One mandatory character per enabled class, lowercase included
        assert!(generate(4, true, true, true, &mut rng).is_ok());
        assert_eq!(
            generate(3, true, true, true, &mut rng),
            Err(GenerateError::LengthTooShort {
                requested: 3,
                required: 4
            })
        );
        assert!(generate(1, false, false, false, &mut rng).is_ok());
        assert_eq!(
            generate(0, false, false, false, &mut rng),
            Err(GenerateError::LengthTooShort {
                requested: 0,
                required: 1
            })
        );
    }

    #[test]
    fn test_generate_memorable_non_empty() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let pwd = generate_memorable(3, &mut rng).unwrap();
            assert!(!pwd.is_empty());
            // Three words of at least three letters each
            assert!(pwd.chars().count() >= 9);
        }
    }

    #[test]
    fn test_generate_memorable_word_count_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(
            generate_memorable(0, &mut rng),
            Err(GenerateError::WordCountZero)
        );
        assert_eq!(
            generate_memorable(WORDS.len() + 1, &mut rng),
            Err(GenerateError::WordCountTooLarge {
                requested: WORDS.len() + 1,
                available: WORDS.len()
            })
        );
        assert!(generate_memorable(WORDS.len(), &mut rng).is_ok());
    }

    #[test]
    fn test_generate_memorable_uses_wordlist_letters() {
        let mut rng = StdRng::seed_from_u64(17);
        let pwd = generate_memorable(2, &mut rng).unwrap();
        // Strip decoration; what remains must come from wordlist letters
        let letters: String = pwd
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect::<String>()
            .to_lowercase();
        assert!(!letters.is_empty());
    }

    #[test]
    fn test_generate_batch_random_mode() {
        let mut rng = StdRng::seed_from_u64(23);
        let request = GenerationRequest::default();
        let passwords = generate_batch(5, &request, &mut rng).unwrap();
        assert_eq!(passwords.len(), 5);
        for pwd in &passwords {
            assert_eq!(pwd.chars().count(), 16);
        }
    }

    #[test]
    fn test_generate_batch_memorable_mode() {
        let mut rng = StdRng::seed_from_u64(23);
        let request = GenerationRequest {
            mode: GenerationMode::Memorable,
            word_count: 2,
            ..GenerationRequest::default()
        };
        let passwords = generate_batch(3, &request, &mut rng).unwrap();
        assert_eq!(passwords.len(), 3);
        assert!(passwords.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_generate_batch_zero_count() {
        let mut rng = StdRng::seed_from_u64(23);
        let request = GenerationRequest::default();
        assert_eq!(
            generate_batch(0, &request, &mut rng),
            Err(GenerateError::BatchCountZero)
        );
    }

    #[test]
    fn test_generate_batch_propagates_invalid_request() {
        let mut rng = StdRng::seed_from_u64(23);
        let request = GenerationRequest {
            length: 2,
            ..GenerationRequest::default()
        };
        assert!(matches!(
            generate_batch(2, &request, &mut rng),
            Err(GenerateError::LengthTooShort { .. })
        ));
    }
}
