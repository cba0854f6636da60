//! Heuristic password strength scoring.
//!
//! [`calculate_password_strength`] is a pure function of the password
//! string — it knows nothing about how the password was produced, so it
//! scores user-typed and generated passwords identically. The additive
//! heuristic rewards length, class variety, and non-trivial digit/symbol
//! placement, and penalizes repetition and keyboard sequences. Class and
//! sequence detection are direct character-range tests, no regex engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Scores below this are worth a "consider a longer or more varied
/// password" advisory in calling layers.
pub const WEAK_SCORE_THRESHOLD: u8 = 40;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Qualitative strength band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Band for a score. Thresholds are inclusive lower bounds, checked
    /// highest-first: >=80, >=60, >=40, >=20, else very weak.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::VeryStrong
        } else if score >= 60 {
            Self::Strong
        } else if score >= 40 {
            Self::Moderate
        } else if score >= 20 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "VERY WEAK",
            Self::Weak => "WEAK",
            Self::Moderate => "MODERATE",
            Self::Strong => "STRONG",
            Self::VeryStrong => "VERY STRONG",
        }
    }

    /// Presentation color hint. The real contract is (score, label); this
    /// exists so every frontend maps bands to the same hue.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::VeryWeak => "red",
            Self::Weak => "orange",
            Self::Moderate => "yellow",
            Self::Strong => "cyan",
            Self::VeryStrong => "green",
        }
    }
}

/// Display form of a strength band, shaped for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthText {
    /// Label text, e.g. `"VERY STRONG"`.
    pub text: String,
    /// Color hint, e.g. `"green"`.
    pub color: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute a heuristic strength score in `[0, 100]`.
///
/// Additive terms, clamped once at the end (intermediate values may go
/// negative):
///
/// - `+4` per character, capped at `+40`
/// - `+10` per character class present (uppercase, lowercase, digit,
///   symbol — symbol meaning any non-alphanumeric character)
/// - `-2` per repeated character (length minus distinct count)
/// - `+2` per digit or symbol that is neither first nor last
/// - `-5` if any three characters form an ascending run (`abc`, `123`,
///   case-insensitive)
/// - `-5` if any character appears three or more times in a row
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
pub fn calculate_password_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let chars: Vec<char> = password.chars().collect();
    let length = chars.len() as i64;
    let mut score: i64 = 0;

    // Length — strong emphasis on longer passwords.
    score += (length * 4).min(40);

    // Character variety.
    let has_uppercase = chars.iter().any(|c| c.is_ascii_uppercase());
    let has_lowercase = chars.iter().any(|c| c.is_ascii_lowercase());
    let has_digits = chars.iter().any(|c| c.is_ascii_digit());
    let has_symbols = chars.iter().any(|c| !c.is_ascii_alphanumeric());
    let variety = [has_uppercase, has_lowercase, has_digits, has_symbols]
        .iter()
        .filter(|present| **present)
        .count() as i64;
    score += variety * 10;

    // Repeated characters drag the score down.
    let distinct: HashSet<char> = chars.iter().copied().collect();
    score -= (length - distinct.len() as i64) * 2;

    // Digits and symbols buried in the middle are harder to guess than
    // the classic trailing "1!".
    if chars.len() > 2 {
        let interior = chars[1..chars.len() - 1]
            .iter()
            .filter(|c| !c.is_ascii_alphabetic())
            .count() as i64;
        score += interior * 2;
    }

    if has_sequential_run(&chars) {
        score -= 5;
    }

    if has_triple_repeat(&chars) {
        score -= 5;
    }

    score.clamp(0, 100) as u8
}

/// Map a score to its display label and color hint.
#[must_use]
pub fn password_strength_text(score: u8) -> StrengthText {
    let label = StrengthLabel::from_score(score);
    StrengthText {
        text: label.as_str().to_string(),
        color: label.color().to_string(),
    }
}

/// `true` below [`WEAK_SCORE_THRESHOLD`] — the cue calling layers use to
/// surface a weak-password advisory.
#[must_use]
pub const fn is_weak(score: u8) -> bool {
    score < WEAK_SCORE_THRESHOLD
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether `b` directly follows `a` within the digit run `0-9` or the
/// letter run `a-z`. Runs never cross class boundaries (`9` is not
/// followed by `:`), and case was already folded by the caller.
#[allow(clippy::arithmetic_side_effects)]
const fn follows(a: char, b: char) -> bool {
    let same_class = (a.is_ascii_digit() && b.is_ascii_digit())
        || (a.is_ascii_lowercase() && b.is_ascii_lowercase());
    same_class && b as u32 == a as u32 + 1
}

/// Any 3-character ascending run (`012`..`789`, `abc`..`xyz`), case-insensitive.
fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(3).any(|window| {
        let a = window[0].to_ascii_lowercase();
        let b = window[1].to_ascii_lowercase();
        let c = window[2].to_ascii_lowercase();
        follows(a, b) && follows(b, c)
    })
}

/// Any character repeated three or more times in a row (case-sensitive).
fn has_triple_repeat(chars: &[char]) -> bool {
    chars
        .windows(3)
        .any(|window| window[0] == window[1] && window[1] == window[2])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
