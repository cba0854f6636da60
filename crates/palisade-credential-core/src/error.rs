//! Error types for `palisade-credential-core`.

use thiserror::Error;

/// Errors produced by the credential-strength engine.
///
/// Scoring and masking are total functions and never fail; only operations
/// that touch the OS entropy source can return an error.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The OS CSPRNG failed or is unavailable. This is fatal by design —
    /// the engine must never degrade to a non-cryptographic generator.
    #[error("entropy source failure: {0}")]
    Entropy(String),

    /// `secure_random_int` was called with an inverted range.
    #[error("invalid random range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Lower bound as supplied by the caller.
        min: u64,
        /// Upper bound as supplied by the caller.
        max: u64,
    },
}
