use std::fmt;
use std::str::FromStr;

/// One of the four canonical form fields.
///
/// The set is closed. Wherever every field is enumerated, iteration follows
/// [`FieldName::ALL`]: full name, email, username, message. The derived
/// `Ord` matches that order, so maps keyed by `FieldName` iterate
/// canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    /// The person's full name
    FullName,
    /// Email address
    Email,
    /// Account username
    Username,
    /// Free-text message body
    Message,
}

impl FieldName {
    /// All fields in canonical order.
    pub const ALL: [FieldName; 4] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Username,
        FieldName::Message,
    ];

    /// Machine key used by form submissions (`full_name`, `email`, ...).
    pub fn key(self) -> &'static str {
        match self {
            FieldName::FullName => "full_name",
            FieldName::Email => "email",
            FieldName::Username => "username",
            FieldName::Message => "message",
        }
    }

    /// Sentence-case name used at the start of rejection reasons.
    pub fn display_name(self) -> &'static str {
        match self {
            FieldName::FullName => "Full name",
            FieldName::Email => "Email",
            FieldName::Username => "Username",
            FieldName::Message => "Message",
        }
    }

    /// Title-case heading used in rendered reports.
    pub fn title(self) -> &'static str {
        match self {
            FieldName::FullName => "Full Name",
            FieldName::Email => "Email",
            FieldName::Username => "Username",
            FieldName::Message => "Message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown field key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(String);

impl UnknownField {
    /// The key that failed to parse.
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
