//! Per-field acceptance rules.
//!
//! Each validator takes the raw field value and returns a
//! [`ValidationOutcome`]. Checks run in a fixed order and the first failing
//! check supplies the reason, so the most specific message always wins over
//! the catch-all shape check at the end. Validators never panic and never
//! return an error: a rejection is data.

use std::collections::BTreeMap;
use std::fmt;

use crate::patterns::{
    trim_form, EMAIL_LEADING_FORBIDDEN, EMAIL_SHAPE, FULL_NAME_SHAPE, SCRIPT_BLOCK, SQL_KEYWORDS,
    SUSPICIOUS_IMG, USERNAME_SHAPE,
};
use crate::{FieldName, FormData};

/// Minimum length of a trimmed full name.
pub const NAME_MIN_LENGTH: usize = 2;
/// Minimum length of a trimmed username.
pub const USERNAME_MIN_LENGTH: usize = 4;
/// Maximum length of a trimmed username.
pub const USERNAME_MAX_LENGTH: usize = 16;
/// Maximum length of a trimmed message.
pub const MESSAGE_MAX_LENGTH: usize = 250;

/// Pass/fail result of validating one field.
///
/// A reason is present exactly when the value was rejected; the type only
/// offers constructors that keep that pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    valid: bool,
    reason: Option<String>,
}

impl ValidationOutcome {
    /// An accepted value.
    pub fn pass() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    /// A rejected value with a human-readable reason.
    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    /// Outcome for a field that was not submitted at all.
    ///
    /// Distinct from an empty value: the reason reads
    /// "`<Field>` field is missing".
    pub fn missing(field: FieldName) -> Self {
        Self::fail(format!("{} field is missing", field.display_name()))
    }

    /// Returns `true` if the value was accepted.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Rejection reason, present iff the value was rejected.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            None => f.write_str("valid"),
            Some(reason) => write!(f, "invalid: {}", reason),
        }
    }
}

fn reject(field: FieldName, reason: impl Into<String>) -> ValidationOutcome {
    let outcome = ValidationOutcome::fail(reason);
    tracing::debug!(
        field = %field,
        reason = outcome.reason().unwrap_or_default(),
        "validation rejected field"
    );
    outcome
}

/// Validates a full name.
///
/// Accepts names of at least two characters that start and end with a
/// letter and otherwise contain only letters, whitespace, hyphens and
/// apostrophes.
///
/// # Examples
///
/// ```
/// use octoguard::validate_full_name;
///
/// assert!(validate_full_name("Mary-Jane O'Neil").is_valid());
///
/// let outcome = validate_full_name("R2D2");
/// assert_eq!(outcome.reason(), Some("Full name cannot contain numbers"));
/// ```
pub fn validate_full_name(name: &str) -> ValidationOutcome {
    const FIELD: FieldName = FieldName::FullName;

    if name.is_empty() {
        return reject(FIELD, "Full name is required");
    }

    let name = trim_form(name);

    if name.chars().count() < NAME_MIN_LENGTH {
        return reject(FIELD, "Full name must be at least 2 characters long");
    }

    if name.chars().any(|c| c.is_ascii_digit()) {
        return reject(FIELD, "Full name cannot contain numbers");
    }

    if !FULL_NAME_SHAPE.is_match(name) {
        return reject(
            FIELD,
            "Full name contains invalid special characters (only spaces, hyphens, and apostrophes allowed)",
        );
    }

    ValidationOutcome::pass()
}

/// Validates an email address.
///
/// Granular checks (spaces, `@` count, empty parts, domain extension) give
/// specific reasons; a final shape check catches everything else as
/// "Invalid email format".
///
/// # Examples
///
/// ```
/// use octoguard::validate_email;
///
/// assert!(validate_email("john@example.com").is_valid());
/// assert_eq!(
///     validate_email("bad email@x.com").reason(),
///     Some("Email address cannot contain spaces"),
/// );
/// ```
pub fn validate_email(email: &str) -> ValidationOutcome {
    const FIELD: FieldName = FieldName::Email;

    if email.is_empty() {
        return reject(FIELD, "Email address is required");
    }

    let email = trim_form(email);

    if email.contains(' ') {
        return reject(FIELD, "Email address cannot contain spaces");
    }

    if !email.contains('@') {
        return reject(FIELD, "Email address must contain '@' symbol");
    }

    // Non-empty: it contains '@'.
    if let Some(first) = email.chars().next() {
        if EMAIL_LEADING_FORBIDDEN.contains(first) {
            return reject(FIELD, "Email address cannot start with a special character");
        }
    }

    let parts: Vec<&str> = email.split('@').collect();
    let [local_part, domain_part] = parts.as_slice() else {
        return reject(FIELD, "Email address must contain exactly one '@' symbol");
    };

    if local_part.is_empty() {
        return reject(FIELD, "Email address must have a username before '@'");
    }

    if domain_part.is_empty() {
        return reject(FIELD, "Email address must have a domain after '@'");
    }

    if !domain_part.contains('.') {
        return reject(
            FIELD,
            "Email address missing domain extension (e.g., .com, .org)",
        );
    }

    let extension = domain_part.rsplit('.').next().unwrap_or_default();
    if extension.chars().count() < 2 {
        return reject(FIELD, "Email address has invalid domain extension");
    }

    if !EMAIL_SHAPE.is_match(email) {
        return reject(FIELD, "Invalid email format");
    }

    ValidationOutcome::pass()
}

/// Validates a username: 4 to 16 characters of letters, digits and
/// underscores, not starting with a digit.
pub fn validate_username(username: &str) -> ValidationOutcome {
    const FIELD: FieldName = FieldName::Username;

    if username.is_empty() {
        return reject(FIELD, "Username is required");
    }

    let username = trim_form(username);
    let length = username.chars().count();

    if length < USERNAME_MIN_LENGTH {
        return reject(FIELD, "Username must be at least 4 characters long");
    }

    if length > USERNAME_MAX_LENGTH {
        return reject(FIELD, "Username cannot exceed 16 characters");
    }

    if username.starts_with(|c: char| c.is_ascii_digit()) {
        return reject(FIELD, "Username cannot start with a number");
    }

    if !USERNAME_SHAPE.is_match(username) {
        return reject(
            FIELD,
            "Username can only contain letters, numbers, and underscores",
        );
    }

    ValidationOutcome::pass()
}

/// Validates a free-text message.
///
/// Rejects blank messages, messages over 250 characters, complete script
/// blocks, `<img>` tags with event handlers, and whole-word SQL keywords.
/// When several keywords appear, the first in the fixed order `SELECT, DROP,
/// INSERT, DELETE, UPDATE, UNION, EXEC, EXECUTE, ALTER, CREATE, TABLE` is
/// reported.
///
/// # Examples
///
/// ```
/// use octoguard::validate_message;
///
/// let outcome = validate_message("please drop table users");
/// assert_eq!(outcome.reason(), Some("Message contains prohibited SQL keyword: DROP"));
/// ```
pub fn validate_message(message: &str) -> ValidationOutcome {
    const FIELD: FieldName = FieldName::Message;

    let message = trim_form(message);

    if message.is_empty() {
        return reject(FIELD, "Message cannot be empty");
    }

    if message.chars().count() > MESSAGE_MAX_LENGTH {
        return reject(FIELD, "Message cannot exceed 250 characters");
    }

    if SCRIPT_BLOCK.is_match(message) {
        return reject(FIELD, "Message contains prohibited script tags");
    }

    if SUSPICIOUS_IMG.is_match(message) {
        return reject(
            FIELD,
            "Message contains prohibited HTML tags with suspicious attributes",
        );
    }

    let upper = message.to_uppercase();
    if let Some((keyword, _)) = SQL_KEYWORDS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&upper))
    {
        return reject(
            FIELD,
            format!("Message contains prohibited SQL keyword: {}", keyword),
        );
    }

    ValidationOutcome::pass()
}

/// Runs the validator that belongs to `field`.
pub fn validate_field(field: FieldName, value: &str) -> ValidationOutcome {
    match field {
        FieldName::FullName => validate_full_name(value),
        FieldName::Email => validate_email(value),
        FieldName::Username => validate_username(value),
        FieldName::Message => validate_message(value),
    }
}

/// Validates every canonical field of a submission.
///
/// The result always holds all four fields. Fields absent from the form get
/// [`ValidationOutcome::missing`]; no field's outcome depends on another's.
///
/// # Examples
///
/// ```
/// use octoguard::{validate_all, FieldName, FormData};
///
/// let form = FormData::new()
///     .with(FieldName::Email, "jane@example.com")
///     .with(FieldName::Username, "");
///
/// let results = validate_all(&form);
/// assert_eq!(results.len(), 4);
/// assert!(results[&FieldName::Email].is_valid());
/// assert_eq!(results[&FieldName::Username].reason(), Some("Username is required"));
/// assert_eq!(results[&FieldName::Message].reason(), Some("Message field is missing"));
/// ```
pub fn validate_all(form: &FormData) -> BTreeMap<FieldName, ValidationOutcome> {
    FieldName::ALL
        .into_iter()
        .map(|field| {
            let outcome = match form.raw(field) {
                Some(value) => validate_field(field, value),
                None => ValidationOutcome::missing(field),
            };
            (field, outcome)
        })
        .collect()
}
