//! Compiled text patterns shared by the validator and the sanitizer.
//!
//! Letter and digit classes are ASCII. Whitespace is Unicode `\s` widened
//! with U+001C..=U+001F, the same set [`trim_form`] strips.

use regex::Regex;

lazy_static::lazy_static! {
    /// A complete `<script ...> ... </script>` block, spanning lines.
    pub(crate) static ref SCRIPT_BLOCK: Regex =
        Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("script pattern is valid");

    /// An `<img>` tag carrying an event-handler attribute.
    pub(crate) static ref SUSPICIOUS_IMG: Regex =
        Regex::new(r"(?i)<img[^>]*(onerror|onload|onclick)[^>]*>").expect("img pattern is valid");

    /// Any angle-bracket-delimited tag-like span.
    pub(crate) static ref HTML_TAG: Regex =
        Regex::new(r"<[^>]+>").expect("tag pattern is valid");

    /// Tautologies, comment markers and UNION-SELECT spans.
    pub(crate) static ref SQL_INJECTION: Regex = Regex::new(concat!(
        r#"(?i)(\bOR\b|\bAND\b)[\s\x1c-\x1f]*['"]?\d+['"]?[\s\x1c-\x1f]*=[\s\x1c-\x1f]*['"]?\d+['"]?"#,
        r"|'[\s\x1c-\x1f]*OR[\s\x1c-\x1f]*'1'[\s\x1c-\x1f]*=[\s\x1c-\x1f]*'1",
        r"|--",
        r"|\bUNION\b.*\bSELECT\b",
    ))
    .expect("sql injection pattern is valid");

    /// Letter first and last, letters, whitespace, hyphens and apostrophes between.
    pub(crate) static ref FULL_NAME_SHAPE: Regex =
        Regex::new(r"^[a-zA-Z][a-zA-Z\s\x1c-\x1f\-']*[a-zA-Z]$").expect("name pattern is valid");

    pub(crate) static ref USERNAME_SHAPE: Regex =
        Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]{3,15}$").expect("username pattern is valid");

    pub(crate) static ref EMAIL_SHAPE: Regex = Regex::new(
        r"^[a-zA-Z0-9][a-zA-Z0-9._-]*@[a-zA-Z0-9][a-zA-Z0-9.-]*\.[a-zA-Z]{2,}$"
    )
    .expect("email pattern is valid");

    /// Characters a full name may not contain.
    pub(crate) static ref NAME_DISALLOWED: Regex =
        Regex::new(r"[^a-zA-Z\s\x1c-\x1f\-']").expect("name filter is valid");

    /// Characters a username may not contain.
    pub(crate) static ref USERNAME_DISALLOWED: Regex =
        Regex::new(r"[^a-zA-Z0-9_]").expect("username filter is valid");

    pub(crate) static ref WHITESPACE_RUN: Regex =
        Regex::new(r"[\s\x1c-\x1f]+").expect("whitespace pattern is valid");

    /// SQL keywords in the order they are reported, each as a whole word.
    pub(crate) static ref SQL_KEYWORDS: Vec<(&'static str, Regex)> = [
        "SELECT", "DROP", "INSERT", "DELETE", "UPDATE", "UNION", "EXEC", "EXECUTE", "ALTER",
        "CREATE", "TABLE",
    ]
    .into_iter()
    .map(|keyword| {
        let pattern = Regex::new(&format!(r"\b{keyword}\b")).expect("keyword pattern is valid");
        (keyword, pattern)
    })
    .collect();
}

/// Whitespace as form input treats it: Unicode `White_Space` plus the ASCII
/// information separators U+001C..=U+001F.
pub(crate) fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Strips form whitespace from both ends.
pub(crate) fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Characters that may not start an email address.
pub(crate) const EMAIL_LEADING_FORBIDDEN: &str = "!@#$%^&*()+=[]{}|\\;:'\",<>?/";
