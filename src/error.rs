use thiserror::Error;

/// Errors raised by the fallible parts of the crate.
///
/// Validation and sanitization never fail: their rejections are reported
/// as data in [`ValidationOutcome`](crate::ValidationOutcome) and
/// [`SanitizationOutcome`](crate::SanitizationOutcome). Only password
/// generation and the history stores return this type.
///
/// No variant carries plaintext password material.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested length falls outside the configured password policy.
    #[error("password length must be between {min} and {max}, got {length}")]
    InvalidLength {
        /// Length that was requested
        length: usize,
        /// Inclusive lower bound of the policy
        min: usize,
        /// Inclusive upper bound of the policy
        max: usize,
    },

    /// Length too short to hold one character from every required class.
    #[error("a password of length {length} cannot contain all four character classes")]
    UnsatisfiableLength {
        /// Length that was requested
        length: usize,
    },

    /// Rejection sampling hit its safety cap without a valid candidate.
    #[error("no valid password produced after {attempts} attempts")]
    GenerationExhausted {
        /// Number of candidates drawn before giving up
        attempts: usize,
    },

    /// Reading or writing a history store failed.
    #[error("history store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
