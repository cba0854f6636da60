//! Uniform random integers from the OS CSPRNG.
//!
//! Everything in this crate that needs randomness goes through
//! [`secure_random_int`], which draws from `OsRng` via the fallible
//! `try_fill_bytes` API and applies rejection sampling so that every range
//! is exactly uniform. There is no fallback generator: if the OS entropy
//! source fails, the error propagates to the caller.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::CredentialError;

/// Fill `buf` from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`CredentialError::Entropy`] if the CSPRNG fails. Callers must
/// propagate this — degrading to a weaker generator is never acceptable.
fn fill_secure(buf: &mut [u8]) -> Result<(), CredentialError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CredentialError::Entropy(format!("CSPRNG fill failed: {e}")))
}

/// Uniform random byte value in `[0, range)` for `range` in `2..=256`.
///
/// Single-byte fast path: a draw is rejected when it falls into the partial
/// block at the top of the byte space, so the modulo reduction is bias-free.
/// Expected draws per call are below 2 for every range.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
fn secure_byte_below(range: u16) -> Result<u8, CredentialError> {
    debug_assert!((2..=256).contains(&range));
    // Largest multiple of `range` that fits in a byte; values at or above
    // it would over-represent the low residues.
    let limit = 256 - (256 % range);
    let mut buf = [0u8; 1];
    loop {
        fill_secure(&mut buf)?;
        let drawn = u16::from(buf[0]);
        if drawn < limit {
            buf.zeroize();
            return Ok((drawn % range) as u8);
        }
    }
}

/// Uniform random integer over the inclusive range `[min, max]`.
///
/// For spans of at most 256 values a single rejected-and-reduced byte is
/// drawn. Wider spans use the classic mask-and-reject construction: draw
/// `ceil(bits/8)` bytes, assemble big-endian, mask down to `bits` ones,
/// and redraw while the masked value still overshoots the span. Both paths
/// terminate with probability 1 and wipe their scratch bytes before
/// returning.
///
/// # Errors
///
/// - [`CredentialError::InvalidRange`] if `min > max`.
/// - [`CredentialError::Entropy`] if the OS CSPRNG fails.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn secure_random_int(min: u64, max: u64) -> Result<u64, CredentialError> {
    if min > max {
        return Err(CredentialError::InvalidRange { min, max });
    }
    // Widened so the full-u64 span cannot overflow.
    let range = u128::from(max) - u128::from(min) + 1;
    if range == 1 {
        return Ok(min);
    }
    if range <= 256 {
        let byte = secure_byte_below(range as u16)?;
        return Ok(min + u64::from(byte));
    }

    let bits = 128 - (range - 1).leading_zeros();
    let bytes = ((bits + 7) / 8) as usize;
    let bitmask = (1u128 << bits) - 1;

    let mut buf = [0u8; 8];
    let accepted = loop {
        fill_secure(&mut buf[..bytes])?;
        let mut assembled: u128 = 0;
        for &b in &buf[..bytes] {
            assembled = (assembled << 8) | u128::from(b);
        }
        assembled &= bitmask;
        if assembled < range {
            break assembled;
        }
    };
    buf.zeroize();

    Ok(min + accepted as u64)
}

/// Fisher–Yates shuffle driven by [`secure_random_int`].
///
/// Walks from the top index down, swapping each element with a uniformly
/// chosen earlier (or same) position. Used by the password generator so
/// that guaranteed per-class characters are not predictably placed.
///
/// # Errors
///
/// Returns [`CredentialError::Entropy`] if the OS CSPRNG fails mid-shuffle.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn secure_shuffle<T>(items: &mut [T]) -> Result<(), CredentialError> {
    for i in (1..items.len()).rev() {
        let j = secure_random_int(0, i as u64)? as usize;
        items.swap(i, j);
    }
    Ok(())
}
