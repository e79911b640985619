//! Entropy-to-score mapping and improvement suggestions.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entropy::CharClasses;

/// Qualitative strength category, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::VeryWeak => "VERY WEAK",
            Strength::Weak => "WEAK",
            Strength::Medium => "MEDIUM",
            Strength::Strong => "STRONG",
            Strength::VeryStrong => "VERY STRONG",
        };
        f.write_str(label)
    }
}

/// Maps entropy bits to a 0-100 score and a strength category.
///
/// Piecewise-linear over five half-open bands; a boundary value resolves
/// to the higher band. Monotonically non-decreasing in entropy, with up to
/// one point of slack at band edges from integer truncation.
pub fn score_from_entropy(entropy: f64) -> (u8, Strength) {
    if entropy < 28.0 {
        (entropy.max(0.0) as u8, Strength::VeryWeak)
    } else if entropy < 36.0 {
        (30 + ((entropy - 28.0) / 8.0 * 20.0) as u8, Strength::Weak)
    } else if entropy < 60.0 {
        (50 + ((entropy - 36.0) / 24.0 * 30.0) as u8, Strength::Medium)
    } else if entropy < 80.0 {
        (80 + ((entropy - 60.0) / 20.0 * 15.0) as u8, Strength::Strong)
    } else {
        let bonus = ((entropy - 80.0) / 20.0 * 5.0).min(5.0) as u8;
        (95 + bonus, Strength::VeryStrong)
    }
}

const IMPROVE_SYMBOLS: [char; 4] = ['#', '!', '$', '@'];
const RECOMMENDED_LENGTH: usize = 12;

/// Produces improvement suggestions for a weak password.
///
/// Only passwords scoring below 50 get suggestions: a length-gap hint,
/// one hint per missing character class, and a synthesized improved
/// candidate. Synthesizing the candidate draws from `rng`; this is the
/// one randomized step in analysis.
pub fn suggest_improvements<R: Rng>(
    password: &str,
    classes: &CharClasses,
    score: u8,
    rng: &mut R,
) -> Vec<String> {
    if score >= 50 {
        return Vec::new();
    }

    let mut suggestions = Vec::new();
    let length = password.chars().count();

    if length < RECOMMENDED_LENGTH {
        suggestions.push(format!("Add {} characters", RECOMMENDED_LENGTH - length));
    }
    if !classes.has_upper {
        suggestions.push("Add uppercase letters".to_string());
    }
    if !classes.has_digits {
        suggestions.push("Add digits".to_string());
    }
    if !classes.has_special {
        suggestions.push("Add symbols (@, #, $, etc.)".to_string());
    }

    if let Some(improved) = improved_candidate(password, classes, rng) {
        suggestions.push(format!("Improved version: {}", improved));
    }

    suggestions
}

/// Builds an improved variant of `password`, returning it only when it
/// differs from the input.
///
/// The leading character is capitalized only when it is a lowercase
/// letter; a leading digit or symbol is left untouched.
fn improved_candidate<R: Rng>(
    password: &str,
    classes: &CharClasses,
    rng: &mut R,
) -> Option<String> {
    let mut improved = password.to_string();

    if !classes.has_upper {
        let capitalized = {
            let mut chars = improved.chars();
            match chars.next() {
                Some(first) if first.is_lowercase() => {
                    Some(first.to_uppercase().chain(chars).collect::<String>())
                }
                _ => None,
            }
        };
        if let Some(capitalized) = capitalized {
            improved = capitalized;
        }
    }

    if !classes.has_special {
        improved.push(IMPROVE_SYMBOLS[rng.gen_range(0..IMPROVE_SYMBOLS.len())]);
    }

    if improved.chars().count() < RECOMMENDED_LENGTH {
        improved.push_str(&rng.gen_range(10..=99).to_string());
    }

    (improved != password).then_some(improved)
}
