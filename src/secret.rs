use std::fmt;

/// Holds password plaintext so it cannot be printed or logged by accident.
///
/// Minted passwords travel as `Secret<String>`. `Debug` and `Display`
/// always render `[REDACTED]`; the value is reachable only through
/// [`expose_secret`](Self::expose_secret), which callers use when the
/// plaintext genuinely has to be shown or stored.
///
/// # Examples
///
/// ```
/// use octoguard::Secret;
///
/// let password = Secret::new("Xk9!mP2#qL".to_string());
///
/// assert_eq!(format!("{:?}", password), "[REDACTED]");
/// assert_eq!(format!("{}", password), "[REDACTED]");
/// assert_eq!(password.expose_secret(), "Xk9!mP2#qL");
/// ```
// Do NOT derive Clone, Copy or Default: copies of plaintext should be deliberate.
pub struct Secret<T> {
    // Must stay private, otherwise formatting could reach the plaintext.
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Borrows the plaintext.
    ///
    /// The long name is intentional: every call site is a place where
    /// plaintext leaves the wrapper.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Debug for Secret<T> {
    // Must unconditionally print the placeholder, in every build profile.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
