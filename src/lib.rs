//! Rule-based handling of untrusted form input and a small password toolkit.
//!
//! This crate provides four stateless components:
//! - **Validator**: per-field acceptance rules with a human-readable reason
//!   on rejection
//! - **Sanitizer**: per-field cleaning pipelines that report what they changed
//! - **Strength assessor**: scores a password into WEAK / MODERATE / STRONG
//! - **Generator**: mints random passwords and their SHA-256 digests
//!
//! The form components cover four fixed fields: full name, email, username
//! and message. Validation and sanitization are independent; run either or
//! both on the same input. Nothing here keeps state between calls, so every
//! function is safe to call from any number of threads.
//!
//! # Core Types
//!
//! - [`FormData`]: a submission, each value held as [`Tainted<String>`]
//! - [`ValidationOutcome`] / [`SanitizationOutcome`]: per-field results
//! - [`PasswordAssessment`]: rating, color token and feedback lines
//! - [`GeneratedPassword`]: plaintext in a [`Secret`] plus its hex digest
//! - [`FormReport`]: both result maps, rendered as a text report
//!
//! # Examples
//!
//! ```
//! use octoguard::{sanitize_all, validate_all, FieldName, FormData};
//!
//! let form = FormData::new()
//!     .with(FieldName::FullName, "Jane Doe")
//!     .with(FieldName::Email, "jane@example.com")
//!     .with(FieldName::Username, "jane_doe")
//!     .with(FieldName::Message, "<b>Hi</b> there");
//!
//! let validation = validate_all(&form);
//! assert!(validation.values().all(|outcome| outcome.is_valid()));
//!
//! let sanitized = sanitize_all(&form);
//! assert_eq!(sanitized[&FieldName::Message].sanitized(), "Hi there");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod field;
mod form;
mod generator;
mod history;
mod patterns;
mod report;
mod sanitizer;
mod secret;
mod strength;
mod tainted;
mod validator;

pub use error::{Error, Result};
pub use field::{FieldName, UnknownField};
pub use form::FormData;
pub use generator::{
    generate, generate_with, hash, GeneratedPassword, PasswordPolicy,
    GENERATOR_SPECIAL_CHARACTERS, MAX_GENERATION_ATTEMPTS,
};
pub use history::{
    PasswordHistory, ValidationLog, DEFAULT_PASSWORD_LOG, DEFAULT_VALIDATION_LOG, NO_HISTORY,
};
pub use report::{FieldStatus, FormReport};
pub use sanitizer::{
    sanitize_all, sanitize_email, sanitize_field, sanitize_full_name, sanitize_message,
    sanitize_username, SanitizationOutcome,
};
pub use secret::Secret;
pub use strength::{
    assess, PasswordAssessment, Rating, StrengthPolicy, STRENGTH_SPECIAL_CHARACTERS,
};
pub use tainted::Tainted;
pub use validator::{
    validate_all, validate_email, validate_field, validate_full_name, validate_message,
    validate_username, ValidationOutcome, MESSAGE_MAX_LENGTH, NAME_MIN_LENGTH,
    USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH,
};
