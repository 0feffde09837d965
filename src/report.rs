//! Combined validation and sanitization results for one submission.

use std::collections::BTreeMap;
use std::fmt;

use crate::{
    sanitize_all, validate_all, FieldName, FormData, SanitizationOutcome, ValidationOutcome,
};

/// Summary status of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Passed validation and needed no cleaning
    Valid,
    /// The sanitizer changed the value, whatever the validator said
    Sanitized,
    /// Failed validation and was left unchanged
    Invalid,
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldStatus::Valid => write!(f, "✓ Valid"),
            FieldStatus::Sanitized => write!(f, "⚠ Sanitized"),
            FieldStatus::Invalid => write!(f, "✗ Invalid"),
        }
    }
}

/// Both result maps for a submission, renderable as a plain-text report.
///
/// `Display` writes one block per canonical field: a title, the validation
/// line, and (for submitted fields) the original value followed by either
/// the sanitized value with its change notes or "No changes needed".
///
/// # Examples
///
/// ```
/// use octoguard::{FieldName, FieldStatus, FormData, FormReport};
///
/// let form = FormData::new()
///     .with(FieldName::Username, "jane_doe")
///     .with(FieldName::Email, "Jane@Example.com");
///
/// let report = FormReport::evaluate(&form);
/// assert_eq!(report.status(FieldName::Username), FieldStatus::Valid);
/// assert_eq!(report.status(FieldName::Email), FieldStatus::Sanitized);
/// assert_eq!(report.status(FieldName::Message), FieldStatus::Invalid);
///
/// let text = report.to_string();
/// assert!(text.contains("Username\n  ✓ Validation passed\n"));
/// ```
#[derive(Debug, Clone)]
pub struct FormReport {
    validation: BTreeMap<FieldName, ValidationOutcome>,
    sanitization: BTreeMap<FieldName, SanitizationOutcome>,
}

impl FormReport {
    /// Builds a report from results computed elsewhere.
    pub fn new(
        validation: BTreeMap<FieldName, ValidationOutcome>,
        sanitization: BTreeMap<FieldName, SanitizationOutcome>,
    ) -> Self {
        Self {
            validation,
            sanitization,
        }
    }

    /// Runs the validator and the sanitizer over `form` and keeps both results.
    pub fn evaluate(form: &FormData) -> Self {
        Self::new(validate_all(form), sanitize_all(form))
    }

    /// Validation outcome per field.
    pub fn validation(&self) -> &BTreeMap<FieldName, ValidationOutcome> {
        &self.validation
    }

    /// Sanitization outcome per submitted field.
    pub fn sanitization(&self) -> &BTreeMap<FieldName, SanitizationOutcome> {
        &self.sanitization
    }

    /// Summary status of `field`.
    pub fn status(&self, field: FieldName) -> FieldStatus {
        let valid = self
            .validation
            .get(&field)
            .is_some_and(ValidationOutcome::is_valid);
        let modified = self
            .sanitization
            .get(&field)
            .is_some_and(SanitizationOutcome::was_modified);

        if valid && !modified {
            FieldStatus::Valid
        } else if modified {
            FieldStatus::Sanitized
        } else {
            FieldStatus::Invalid
        }
    }

    /// Returns `true` if every field passed validation.
    ///
    /// Sanitizer changes do not count against the form; a valid field that
    /// was trimmed or collapsed still passes.
    pub fn all_valid(&self) -> bool {
        FieldName::ALL.into_iter().all(|field| {
            self.validation
                .get(&field)
                .is_some_and(ValidationOutcome::is_valid)
        })
    }
}

impl fmt::Display for FormReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in FieldName::ALL {
            writeln!(f, "{}", field.title())?;

            match self.validation.get(&field).and_then(ValidationOutcome::reason) {
                None => writeln!(f, "  ✓ Validation passed")?,
                Some(reason) => writeln!(f, "  ✗ {}", reason)?,
            }

            if let Some(outcome) = self.sanitization.get(&field) {
                writeln!(f, "  Original: {}", outcome.original())?;
                if outcome.was_modified() {
                    writeln!(f, "  Sanitized: {}", outcome.sanitized())?;
                    writeln!(f, "  Changes: {}", outcome.notes().join(", "))?;
                } else {
                    writeln!(f, "  No changes needed")?;
                }
            }

            writeln!(f)?;
        }
        Ok(())
    }
}
