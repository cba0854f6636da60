//! Cryptographic password generation.
//!
//! [`generate_password`] builds a password from the enabled character
//! classes: one guaranteed character per enabled class, random fill from
//! the combined pool, then a Fisher–Yates shuffle so the guaranteed
//! characters are not predictably placed. All randomness comes from
//! [`crate::random`] (OS CSPRNG, rejection-sampled).

use serde::{Deserialize, Serialize};

use crate::error::CredentialError;
use crate::random::{secure_random_int, secure_shuffle};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

// Character sets
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_-+=<>?";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A character class with a fixed alphabet.
///
/// Charset assembly and per-class seeding iterate [`CharacterClass::ALL`]
/// in declaration order, so generated pools are deterministic for a given
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    /// Uppercase letters (A-Z).
    Uppercase,
    /// Lowercase letters (a-z).
    Lowercase,
    /// Digits (0-9).
    Digit,
    /// Symbols (!@#$%^&*()_-+=<>?).
    Symbol,
}

impl CharacterClass {
    /// Every class, in charset-assembly order.
    pub const ALL: [Self; 4] = [Self::Uppercase, Self::Lowercase, Self::Digit, Self::Symbol];

    /// The fixed alphabet bound to this class. All alphabets are ASCII.
    #[must_use]
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }
}

/// Configuration for which character classes to include in a password.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharsetConfig {
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include symbols (!@#$%^&*...).
    pub symbols: bool,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl CharsetConfig {
    /// Whether the given class is enabled.
    #[must_use]
    pub const fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Symbol => self.symbols,
        }
    }

    /// Enabled classes in charset-assembly order.
    fn active_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a random password of the given `length` using the enabled
/// character classes.
///
/// One character from each enabled class is guaranteed, each drawn
/// uniformly from that class's own alphabet — plain uniform sampling over
/// the combined pool cannot guarantee coverage at short lengths. The
/// remaining positions are filled from the combined pool, then the whole
/// sequence is Fisher–Yates shuffled.
///
/// Degenerate inputs are not errors:
///
/// - No class enabled: falls back to the lowercase alphabet (and no
///   guaranteed characters, so `length == 0` yields an empty string).
/// - `length` smaller than the number of enabled classes: the result still
///   carries one character per enabled class and is longer than requested.
///   Callers observe the deviation through the returned string's length.
///
/// # Errors
///
/// Returns [`CredentialError::Entropy`] if the OS CSPRNG fails.
///
/// # Panics
///
/// Panics if the generated bytes are not valid UTF-8 (cannot happen: all
/// alphabets are ASCII).
pub fn generate_password(
    length: usize,
    charsets: &CharsetConfig,
) -> Result<String, CredentialError> {
    let active = charsets.active_classes();

    // Combined pool in class order; lowercase-only fallback when nothing
    // is selected.
    let mut pool: Vec<u8> = Vec::new();
    if active.is_empty() {
        pool.extend_from_slice(LOWERCASE);
    } else {
        for class in &active {
            pool.extend_from_slice(class.alphabet());
        }
    }

    // One guaranteed character per enabled class.
    let mut chars: Vec<u8> = Vec::with_capacity(length.max(active.len()));
    for class in &active {
        chars.push(pick(class.alphabet())?);
    }

    // Random fill from the combined pool up to the requested length.
    while chars.len() < length {
        chars.push(pick(&pool)?);
    }

    // Shuffle so the guaranteed characters are not clustered at the front.
    secure_shuffle(&mut chars)?;

    Ok(String::from_utf8(chars).expect("password chars are ASCII"))
}

/// Uniformly pick one byte from a non-empty alphabet.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
fn pick(alphabet: &[u8]) -> Result<u8, CredentialError> {
    debug_assert!(!alphabet.is_empty());
    let index = secure_random_int(0, (alphabet.len() - 1) as u64)? as usize;
    Ok(alphabet[index])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
