//! Per-field cleaning pipelines.
//!
//! Every sanitizer runs a fixed sequence of stages, each feeding the next,
//! and reports what it did as a [`SanitizationOutcome`]. Notes record why a
//! stage ran; they are not a diff of the net effect, so a value can be
//! modified with no note (email case folding) and several notes can describe
//! overlapping removals (digits are also "invalid special characters" in a
//! full name). Client-facing wording depends on these exact notes.

use std::collections::BTreeMap;

use crate::patterns::{
    trim_form, HTML_TAG, NAME_DISALLOWED, SCRIPT_BLOCK, SQL_INJECTION, USERNAME_DISALLOWED,
    WHITESPACE_RUN,
};
use crate::{FieldName, FormData};

/// Result of sanitizing one field.
///
/// `was_modified` is always `sanitized != original`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizationOutcome {
    original: String,
    sanitized: String,
    was_modified: bool,
    notes: Vec<String>,
}

impl SanitizationOutcome {
    fn new(original: &str, sanitized: String, notes: Vec<String>) -> Self {
        let was_modified = sanitized != original;
        Self {
            original: original.to_string(),
            sanitized,
            was_modified,
            notes,
        }
    }

    fn unchanged_empty() -> Self {
        Self::new("", String::new(), Vec::new())
    }

    /// The raw value exactly as submitted.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The cleaned value.
    pub fn sanitized(&self) -> &str {
        &self.sanitized
    }

    /// Consumes the outcome and returns the cleaned value.
    pub fn into_sanitized(self) -> String {
        self.sanitized
    }

    /// Returns `true` if the cleaned value differs from the original.
    pub fn was_modified(&self) -> bool {
        self.was_modified
    }

    /// Ordered notes describing which stages fired.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

fn finish(
    field: FieldName,
    original: &str,
    sanitized: String,
    notes: Vec<String>,
) -> SanitizationOutcome {
    let outcome = SanitizationOutcome::new(original, sanitized, notes);
    if outcome.was_modified() {
        tracing::debug!(
            field = %field,
            notes = outcome.notes().len(),
            "sanitizer modified field"
        );
    }
    outcome
}

/// Cleans a full name: trim, drop everything but letters, whitespace,
/// hyphens and apostrophes, then collapse whitespace runs.
///
/// Notes are independent of each other: "Removed numbers" when the original
/// holds a digit, "Removed invalid special characters" when the original
/// holds any disallowed character, digits included.
///
/// Whitespace is collapsed but not re-trimmed, so `"Ann 1"` becomes
/// `"Ann "` and only a second pass yields `"Ann"`.
///
/// # Examples
///
/// ```
/// use octoguard::sanitize_full_name;
///
/// let outcome = sanitize_full_name("  Jane   D0e!");
/// assert_eq!(outcome.sanitized(), "Jane De");
/// assert_eq!(outcome.notes(), ["Removed numbers", "Removed invalid special characters"]);
/// ```
pub fn sanitize_full_name(name: &str) -> SanitizationOutcome {
    if name.is_empty() {
        return SanitizationOutcome::unchanged_empty();
    }

    let trimmed = trim_form(name);
    let allowed = NAME_DISALLOWED.replace_all(trimmed, "");
    let sanitized = WHITESPACE_RUN.replace_all(&allowed, " ").into_owned();

    let mut notes = Vec::new();
    if name.chars().any(|c| c.is_ascii_digit()) {
        notes.push("Removed numbers".to_string());
    }
    if NAME_DISALLOWED.is_match(name) {
        notes.push("Removed invalid special characters".to_string());
    }

    finish(FieldName::FullName, name, sanitized, notes)
}

/// Cleans an email address: delete spaces, tabs and newlines, then
/// lowercase.
///
/// "Removed spaces" fires when the original held a space. "Converted to
/// lowercase" fires when the result differs from the lowercased original,
/// which happens when any whitespace was deleted; a pure case change is
/// still reported through `was_modified` but adds no note.
///
/// # Examples
///
/// ```
/// use octoguard::sanitize_email;
///
/// let outcome = sanitize_email("John @Example.com");
/// assert_eq!(outcome.sanitized(), "john@example.com");
/// assert_eq!(outcome.notes(), ["Removed spaces", "Converted to lowercase"]);
/// ```
pub fn sanitize_email(email: &str) -> SanitizationOutcome {
    if email.is_empty() {
        return SanitizationOutcome::unchanged_empty();
    }

    let sanitized: String = email
        .chars()
        .filter(|c| !matches!(*c, ' ' | '\t' | '\n'))
        .collect::<String>()
        .to_lowercase();

    let mut notes = Vec::new();
    if email.contains(' ') {
        notes.push("Removed spaces".to_string());
    }
    if sanitized != email.to_lowercase() {
        notes.push("Converted to lowercase".to_string());
    }

    finish(FieldName::Email, email, sanitized, notes)
}

/// Cleans a username: trim, then keep only ASCII letters, digits and
/// underscores. Any change is reported as a single "Removed invalid
/// characters" note.
pub fn sanitize_username(username: &str) -> SanitizationOutcome {
    if username.is_empty() {
        return SanitizationOutcome::unchanged_empty();
    }

    let sanitized = USERNAME_DISALLOWED
        .replace_all(trim_form(username), "")
        .into_owned();

    let notes = if sanitized != username {
        vec!["Removed invalid characters".to_string()]
    } else {
        Vec::new()
    };

    finish(FieldName::Username, username, sanitized, notes)
}

/// Escapes `& < > " '` as HTML entities, ampersand first.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Cleans a free-text message in five stages:
///
/// 1. Delete complete `<script>` blocks ("Script tags removed").
/// 2. Delete remaining `<...>` tags ("HTML tags removed (N tag(s))").
/// 3. Delete SQL tautologies, `--` comment markers and `UNION ... SELECT`
///    spans ("SQL injection patterns removed").
/// 4. Entity-escape `& < > " '` ("Special characters escaped").
/// 5. Collapse whitespace and trim (never noted).
///
/// Escaping is not idempotent: a second pass turns `&amp;` into `&amp;amp;`.
///
/// # Examples
///
/// ```
/// use octoguard::sanitize_message;
///
/// let outcome = sanitize_message("<script>alert(1)</script>Hello");
/// assert_eq!(outcome.sanitized(), "Hello");
/// assert!(outcome.was_modified());
/// assert_eq!(outcome.notes(), ["Script tags removed"]);
/// ```
pub fn sanitize_message(message: &str) -> SanitizationOutcome {
    if message.is_empty() {
        return SanitizationOutcome::unchanged_empty();
    }

    let mut notes = Vec::new();
    let mut current = message.to_string();

    if SCRIPT_BLOCK.is_match(&current) {
        current = SCRIPT_BLOCK.replace_all(&current, "").into_owned();
        notes.push("Script tags removed".to_string());
    }

    let tag_count = HTML_TAG.find_iter(&current).count();
    if tag_count > 0 {
        current = HTML_TAG.replace_all(&current, "").into_owned();
        notes.push(format!("HTML tags removed ({} tag(s))", tag_count));
    }

    if SQL_INJECTION.is_match(&current) {
        current = SQL_INJECTION.replace_all(&current, "").into_owned();
        notes.push("SQL injection patterns removed".to_string());
    }

    let escaped = escape_html(&current);
    if escaped != current {
        current = escaped;
        notes.push("Special characters escaped".to_string());
    }

    let sanitized = trim_form(&WHITESPACE_RUN.replace_all(&current, " ")).to_string();

    finish(FieldName::Message, message, sanitized, notes)
}

/// Runs the sanitizer that belongs to `field`.
pub fn sanitize_field(field: FieldName, value: &str) -> SanitizationOutcome {
    match field {
        FieldName::FullName => sanitize_full_name(value),
        FieldName::Email => sanitize_email(value),
        FieldName::Username => sanitize_username(value),
        FieldName::Message => sanitize_message(value),
    }
}

/// Sanitizes every field present in a submission.
///
/// Absent fields are left out of the result; there is nothing to clean.
/// Each outcome's `original` is the raw submitted value.
pub fn sanitize_all(form: &FormData) -> BTreeMap<FieldName, SanitizationOutcome> {
    FieldName::ALL
        .into_iter()
        .filter_map(|field| {
            form.raw(field)
                .map(|value| (field, sanitize_field(field, value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Full name

    #[test]
    fn full_name_clean_input_unchanged() {
        let outcome = sanitize_full_name("Mary-Jane O'Neil");

        assert_eq!(outcome.sanitized(), "Mary-Jane O'Neil");
        assert!(!outcome.was_modified());
        assert!(outcome.notes().is_empty());
    }

    #[test]
    fn full_name_trim_only_modifies_without_notes() {
        let outcome = sanitize_full_name("  Jane Doe ");

        assert_eq!(outcome.sanitized(), "Jane Doe");
        assert!(outcome.was_modified());
        assert!(outcome.notes().is_empty());
    }

    #[test]
    fn full_name_digit_fires_both_notes() {
        let outcome = sanitize_full_name("John2 Smith");

        assert_eq!(outcome.sanitized(), "John Smith");
        assert_eq!(
            outcome.notes(),
            ["Removed numbers", "Removed invalid special characters"]
        );
    }

    #[test]
    fn full_name_special_characters_only() {
        let outcome = sanitize_full_name("John <Smith>");

        assert_eq!(outcome.sanitized(), "John Smith");
        assert_eq!(outcome.notes(), ["Removed invalid special characters"]);
    }

    #[test]
    fn full_name_collapses_inner_whitespace() {
        let outcome = sanitize_full_name("Jane \t\n Doe");
        assert_eq!(outcome.sanitized(), "Jane Doe");
    }

    #[test]
    fn full_name_treats_unit_separator_as_space() {
        let outcome = sanitize_full_name("\x1cJane\x1fDoe\x1d");
        assert_eq!(outcome.sanitized(), "Jane Doe");
        assert!(outcome.notes().is_empty());
    }

    #[test]
    fn full_name_removal_can_leave_edge_space() {
        let first = sanitize_full_name("Ann 1");
        assert_eq!(first.sanitized(), "Ann ");

        let second = sanitize_full_name(first.sanitized());
        assert_eq!(second.sanitized(), "Ann");
        assert!(second.notes().is_empty());
    }

    #[test]
    fn full_name_non_ascii_letters_removed() {
        let outcome = sanitize_full_name("José");
        assert_eq!(outcome.sanitized(), "Jos");
        assert_eq!(outcome.notes(), ["Removed invalid special characters"]);
    }

    // Email

    #[test]
    fn email_clean_input_unchanged() {
        let outcome = sanitize_email("john@example.com");
        assert!(!outcome.was_modified());
        assert!(outcome.notes().is_empty());
    }

    #[test]
    fn email_spaces_and_case() {
        let outcome = sanitize_email(" John @Example.COM ");

        assert_eq!(outcome.sanitized(), "john@example.com");
        assert_eq!(outcome.notes(), ["Removed spaces", "Converted to lowercase"]);
    }

    #[test]
    fn email_case_only_change_has_no_note() {
        let outcome = sanitize_email("John@Example.com");

        assert_eq!(outcome.sanitized(), "john@example.com");
        assert!(outcome.was_modified());
        assert!(outcome.notes().is_empty());
    }

    #[test]
    fn email_tab_removal_reports_lowercase_only() {
        let outcome = sanitize_email("john\t@example.com\n");

        assert_eq!(outcome.sanitized(), "john@example.com");
        assert_eq!(outcome.notes(), ["Converted to lowercase"]);
    }

    #[test]
    fn email_keeps_carriage_return() {
        let outcome = sanitize_email("a\rb@x.io");
        assert_eq!(outcome.sanitized(), "a\rb@x.io");
    }

    // Username

    #[test]
    fn username_clean_input_unchanged() {
        let outcome = sanitize_username("john_doe42");
        assert!(!outcome.was_modified());
        assert!(outcome.notes().is_empty());
    }

    #[test]
    fn username_strips_invalid_characters() {
        let outcome = sanitize_username("  john.doe-42! ");

        assert_eq!(outcome.sanitized(), "johndoe42");
        assert_eq!(outcome.notes(), ["Removed invalid characters"]);
    }

    #[test]
    fn username_is_a_fixed_point() {
        let once = sanitize_username(" j@hn doe ").into_sanitized();
        let twice = sanitize_username(&once);

        assert_eq!(twice.sanitized(), once);
        assert!(!twice.was_modified());
    }

    // Message

    #[test]
    fn message_script_block_removed() {
        let outcome = sanitize_message("<script>alert(1)</script>Hello");

        assert_eq!(outcome.sanitized(), "Hello");
        assert!(outcome.was_modified());
        assert_eq!(outcome.notes(), ["Script tags removed"]);
    }

    #[test]
    fn message_multiline_script_block_removed() {
        let outcome = sanitize_message("a<SCRIPT src=x>\nbad()\n</Script>b");
        assert_eq!(outcome.sanitized(), "ab");
    }

    #[test]
    fn message_tags_counted() {
        let outcome = sanitize_message("<b>bold</b> and <i>it</i>");

        assert_eq!(outcome.sanitized(), "bold and it");
        assert_eq!(outcome.notes(), ["HTML tags removed (4 tag(s))"]);
    }

    #[test]
    fn message_script_then_tags() {
        let outcome = sanitize_message("<p>Hi</p><script>x()</script>");

        assert_eq!(outcome.sanitized(), "Hi");
        assert_eq!(
            outcome.notes(),
            ["Script tags removed", "HTML tags removed (2 tag(s))"]
        );
    }

    #[test]
    fn message_sql_tautology_removed() {
        let outcome = sanitize_message("name OR 1=1");

        assert_eq!(outcome.sanitized(), "name");
        assert_eq!(outcome.notes(), ["SQL injection patterns removed"]);
    }

    #[test]
    fn message_quoted_tautology_removed() {
        let outcome = sanitize_message("admin' OR '1'='1");

        // Match starts at the first quote, so nothing is left to escape
        assert_eq!(outcome.sanitized(), "admin");
        assert_eq!(outcome.notes(), ["SQL injection patterns removed"]);
    }

    #[test]
    fn message_comment_marker_and_union_select() {
        let outcome = sanitize_message("x -- y UNION ALL SELECT z");

        assert_eq!(outcome.sanitized(), "x y z");
        assert_eq!(outcome.notes(), ["SQL injection patterns removed"]);
    }

    #[test]
    fn message_escapes_special_characters() {
        let outcome = sanitize_message("Tom & \"Jerry\" aren't here");

        assert_eq!(
            outcome.sanitized(),
            "Tom &amp; &quot;Jerry&quot; aren&#x27;t here"
        );
        assert_eq!(outcome.notes(), ["Special characters escaped"]);
    }

    #[test]
    fn message_stray_angle_bracket_escaped() {
        let outcome = sanitize_message("1 < 2");

        assert_eq!(outcome.sanitized(), "1 &lt; 2");
        assert_eq!(outcome.notes(), ["Special characters escaped"]);
    }

    #[test]
    fn message_whitespace_collapse_is_unnoted() {
        let outcome = sanitize_message("  hello \n\n world  ");

        assert_eq!(outcome.sanitized(), "hello world");
        assert!(outcome.was_modified());
        assert!(outcome.notes().is_empty());
    }

    #[test]
    fn message_escaping_is_not_idempotent() {
        let once = sanitize_message("fish & chips").into_sanitized();
        assert_eq!(once, "fish &amp; chips");

        let twice = sanitize_message(&once);
        assert_eq!(twice.sanitized(), "fish &amp;amp; chips");
    }

    #[test]
    fn message_plain_text_is_a_fixed_point() {
        let once = sanitize_message("  thanks   for the help ").into_sanitized();
        let twice = sanitize_message(&once);

        assert_eq!(twice.sanitized(), once);
        assert!(!twice.was_modified());
    }

    // Empty and aggregates

    #[test]
    fn empty_inputs_are_untouched() {
        for field in FieldName::ALL {
            let outcome = sanitize_field(field, "");
            assert_eq!(outcome.sanitized(), "");
            assert!(!outcome.was_modified());
            assert!(outcome.notes().is_empty());
        }
    }

    #[test]
    fn sanitize_all_skips_absent_fields() {
        let form = FormData::new()
            .with(FieldName::Username, " bad name! ")
            .with(FieldName::Message, "hi");

        let results = sanitize_all(&form);

        assert_eq!(
            results.keys().copied().collect::<Vec<_>>(),
            vec![FieldName::Username, FieldName::Message]
        );
        assert_eq!(results[&FieldName::Username].original(), " bad name! ");
        assert_eq!(results[&FieldName::Username].sanitized(), "badname");
        assert!(!results[&FieldName::Message].was_modified());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: Full names keep only letters, single spaces, hyphens and apostrophes
            #[test]
            fn proptest_full_name_output_charset(input in any::<String>()) {
                let outcome = sanitize_full_name(&input);
                let sanitized = outcome.sanitized();

                prop_assert!(sanitized
                    .chars()
                    .all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '\'')));
                prop_assert!(!sanitized.contains("  "));
            }

            /// Property: Sanitized messages never carry raw angle brackets or quotes
            #[test]
            fn proptest_message_output_is_escaped(
                input in prop::string::string_regex("[ a-z<>/\"'&=()]{0,80}").unwrap()
            ) {
                let outcome = sanitize_message(&input);
                let sanitized = outcome.sanitized();

                prop_assert!(!sanitized.contains(['<', '>', '"', '\'']));
                prop_assert_eq!(sanitized, sanitized.trim());
            }

            /// Property: Notes only appear on outcomes that changed the value
            #[test]
            fn proptest_notes_imply_modification(input in any::<String>()) {
                for field in FieldName::ALL {
                    let outcome = sanitize_field(field, &input);
                    if !outcome.notes().is_empty() {
                        prop_assert!(outcome.was_modified());
                    }
                }
            }
        }
    }
}
