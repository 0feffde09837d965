use std::fmt;

/// A raw form value that has not been through the validator or sanitizer.
///
/// `Tainted<T>` marks data that arrived from a user and keeps it from being
/// used as if it were clean. Inside this crate the validator and sanitizer
/// read it; outside, the only way to get a usable value back is a
/// [`SanitizationOutcome`](crate::SanitizationOutcome).
///
/// # Examples
///
/// ```
/// use octoguard::Tainted;
///
/// let comment = Tainted::new("<script>alert(1)</script>hi".to_string());
///
/// // Debug output shows it's tainted
/// println!("{:?}", comment);
///
/// // But there is no public accessor for the raw string:
/// // let raw: &String = comment.as_ref(); // Won't compile!
/// ```
// Do NOT remove Clone: FormData is cloned when a caller wants to validate and
// sanitize the same submission from separate threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Tainted<T> {
    // Must stay private. A public field lets callers skip the sanitizer.
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Borrows the raw value for validation or sanitization.
    ///
    /// Crate-private: only the rule functions in this crate read raw input.
    pub(crate) fn as_inner(&self) -> &T {
        &self.inner
    }
}

// No Deref, AsRef, Borrow or Into<T>: each would let raw input flow onward
// without passing through the rules.

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}
