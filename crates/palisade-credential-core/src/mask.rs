//! Partial redaction of credentials for display.
//!
//! [`mask_credential`] keeps a few characters at each end and replaces the
//! middle with a bullet run. The run is capped so the output stops leaking
//! the true length of long secrets. Masked forms are recomputed on demand
//! and never stored alongside the plaintext.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Characters kept visible at each end when the caller does not choose.
pub const DEFAULT_VISIBLE_CHARS: usize = 2;

/// Redaction character.
pub const MASK_CHAR: char = '•';

/// Upper bound on the redaction run. Beyond `2 * visible + MAX_MASK_RUN`
/// characters, the masked form no longer reveals the original length.
pub const MAX_MASK_RUN: usize = 8;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Mask a credential, keeping `visible_chars` characters at each end.
///
/// Inputs of at most `2 * visible_chars` characters are returned unchanged
/// — there is nothing left to hide once both ends are shown. Counts are in
/// characters, not bytes, so multi-byte input masks cleanly.
///
/// Masking is **not** idempotent: masking an already-masked string
/// re-masks the bullet run. Callers must mask the original credential,
/// not a stored masked form.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn mask_credential(text: &str, visible_chars: usize) -> String {
    let total = text.chars().count();
    if total <= visible_chars.saturating_mul(2) {
        return text.to_string();
    }

    let first: String = text.chars().take(visible_chars).collect();
    let last: String = text
        .chars()
        .skip(total - visible_chars)
        .collect();
    let run = (total - 2 * visible_chars).min(MAX_MASK_RUN);

    let mut masked = String::with_capacity(first.len() + run * MASK_CHAR.len_utf8() + last.len());
    masked.push_str(&first);
    for _ in 0..run {
        masked.push(MASK_CHAR);
    }
    masked.push_str(&last);
    masked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
