//! `palisade-credential-core` — Pure credential-strength primitives for PALISADE.
//!
//! This crate is the audit target: zero network, zero async, zero UI
//! dependencies. Four operations, all pure and side-effect free:
//!
//! - [`generate_password`] — CSPRNG-backed password generation with
//!   guaranteed character-class coverage
//! - [`calculate_password_strength`] — heuristic 0-100 strength score
//! - [`password_strength_text`] — score → label/color band
//! - [`mask_credential`] — partially redacted display form
//!
//! Every operation allocates and returns its own values; there is no shared
//! mutable state, so concurrent callers need no coordination.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod random;

pub mod password;

pub mod strength;

pub mod mask;

pub use error::CredentialError;
pub use mask::{mask_credential, DEFAULT_VISIBLE_CHARS, MASK_CHAR, MAX_MASK_RUN};
pub use password::{
    generate_password, CharacterClass, CharsetConfig, DEFAULT_PASSWORD_LENGTH,
};
pub use random::{secure_random_int, secure_shuffle};
pub use strength::{
    calculate_password_strength, is_weak, password_strength_text, StrengthLabel, StrengthText,
    WEAK_SCORE_THRESHOLD,
};
