//! Inbound form submissions.

use std::collections::BTreeMap;

use crate::{FieldName, Tainted};

/// A submitted form: each canonical field mapped to its raw value.
///
/// Fields the client did not send are simply absent. Absence is reported
/// differently from an empty value by [`validate_all`](crate::validate_all)
/// ("field is missing" versus "required"/"cannot be empty").
///
/// # Examples
///
/// ```
/// use octoguard::{FieldName, FormData};
///
/// let form = FormData::new()
///     .with(FieldName::FullName, "Ada Lovelace")
///     .with(FieldName::Email, "ada@example.com");
///
/// assert!(form.contains(FieldName::Email));
/// assert!(!form.contains(FieldName::Message));
/// assert_eq!(form.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormData {
    values: BTreeMap<FieldName, Tainted<String>>,
}

impl FormData {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a later value for the same field replaces the earlier one.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Sets the raw value for a field.
    pub fn insert(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, Tainted::new(value.into()));
    }

    /// Returns `true` if the field was submitted.
    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    /// Number of submitted fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn raw(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).map(|value| value.as_inner().as_str())
    }
}

impl<V: Into<String>> FromIterator<(FieldName, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (FieldName, V)>>(iter: I) -> Self {
        let mut form = FormData::new();
        for (field, value) in iter {
            form.insert(field, value);
        }
        form
    }
}
