//! Random password generation and one-way hashing.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::{Error, Result, Secret};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Special characters drawn by the generator.
pub const GENERATOR_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_-+={};:,.?";

/// Candidates drawn before rejection sampling gives up.
pub const MAX_GENERATION_ATTEMPTS: usize = 100_000;

/// Shortest length that can hold one character of each class.
const MIN_SATISFIABLE_LENGTH: usize = 4;

fn pool() -> Vec<u8> {
    [
        UPPERCASE,
        LOWERCASE,
        DIGITS,
        GENERATOR_SPECIAL_CHARACTERS.as_bytes(),
    ]
    .concat()
}

fn meets_composition(candidate: &[u8]) -> bool {
    let special = GENERATOR_SPECIAL_CHARACTERS.as_bytes();
    candidate.iter().any(|c| UPPERCASE.contains(c))
        && candidate.iter().any(|c| LOWERCASE.contains(c))
        && candidate.iter().any(|c| DIGITS.contains(c))
        && candidate.iter().any(|c| special.contains(c))
}

/// Generates a password of `length` characters using the thread-local RNG.
///
/// Every character is drawn uniformly from uppercase, lowercase, digits and
/// [`GENERATOR_SPECIAL_CHARACTERS`]. Whole candidates are redrawn until one
/// contains at least one character from each of the four sets.
///
/// # Errors
///
/// - [`Error::UnsatisfiableLength`] when `length < 4`.
/// - [`Error::GenerationExhausted`] after [`MAX_GENERATION_ATTEMPTS`]
///   rejected candidates; not reachable for lengths of 8 and up.
///
/// # Examples
///
/// ```
/// use octoguard::generate;
///
/// let password = generate(12).expect("12 is a satisfiable length");
/// assert_eq!(password.len(), 12);
/// assert!(password.chars().any(|c| c.is_ascii_uppercase()));
/// ```
pub fn generate(length: usize) -> Result<String> {
    generate_with(length, &mut rand::thread_rng())
}

/// Like [`generate`], drawing from the given random number generator.
pub fn generate_with<R: Rng>(length: usize, rng: &mut R) -> Result<String> {
    if length < MIN_SATISFIABLE_LENGTH {
        return Err(Error::UnsatisfiableLength { length });
    }

    let pool = pool();
    let mut candidate = vec![0u8; length];

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        for slot in candidate.iter_mut() {
            *slot = pool[rng.gen_range(0..pool.len())];
        }

        if meets_composition(&candidate) {
            tracing::debug!(length, attempts = attempt, "generated password");
            // Pool is ASCII, so every byte is a char.
            return Ok(candidate.iter().map(|&b| b as char).collect());
        }
    }

    tracing::warn!(
        length,
        attempts = MAX_GENERATION_ATTEMPTS,
        "password generation exhausted"
    );
    Err(Error::GenerationExhausted {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

/// SHA-256 of the password's UTF-8 bytes as 64 lowercase hex characters.
///
/// # Examples
///
/// ```
/// use octoguard::hash;
///
/// assert_eq!(
///     hash("abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
/// );
/// ```
pub fn hash(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// A freshly generated password and its digest.
///
/// The plaintext is kept in a [`Secret`] so the record can be logged or
/// debug-printed without leaking it.
#[derive(Debug)]
pub struct GeneratedPassword {
    value: Secret<String>,
    hash_hex: String,
}

impl GeneratedPassword {
    /// Pairs a plaintext with its digest.
    pub fn new(value: String) -> Self {
        let hash_hex = hash(&value);
        Self {
            value: Secret::new(value),
            hash_hex,
        }
    }

    /// The plaintext, still wrapped.
    pub fn value(&self) -> &Secret<String> {
        &self.value
    }

    /// Lowercase hex SHA-256 of the plaintext.
    pub fn hash_hex(&self) -> &str {
        &self.hash_hex
    }
}

/// Accepted length range for generated passwords.
///
/// The core generator takes any satisfiable length; this policy is the
/// boundary check applied before minting on behalf of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Shortest accepted length (inclusive)
    pub min_length: usize,
    /// Longest accepted length (inclusive)
    pub max_length: usize,
    /// Length used by [`mint_default`](Self::mint_default)
    pub default_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 16,
            default_length: 12,
        }
    }
}

impl PasswordPolicy {
    /// Checks `length` against the policy range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] outside `min_length..=max_length`.
    pub fn check(&self, length: usize) -> Result<()> {
        if (self.min_length..=self.max_length).contains(&length) {
            Ok(())
        } else {
            Err(Error::InvalidLength {
                length,
                min: self.min_length,
                max: self.max_length,
            })
        }
    }

    /// Checks the length, generates a password and hashes it.
    ///
    /// # Examples
    ///
    /// ```
    /// use octoguard::{hash, PasswordPolicy};
    ///
    /// let policy = PasswordPolicy::default();
    /// let minted = policy.mint(10).expect("10 is within 8..=16");
    ///
    /// assert_eq!(minted.value().expose_secret().len(), 10);
    /// assert_eq!(minted.hash_hex(), hash(minted.value().expose_secret()));
    /// assert!(policy.mint(20).is_err());
    /// ```
    pub fn mint(&self, length: usize) -> Result<GeneratedPassword> {
        self.check(length)?;
        let value = generate(length)?;
        Ok(GeneratedPassword::new(value))
    }

    /// Mints a password of `default_length`.
    pub fn mint_default(&self) -> Result<GeneratedPassword> {
        self.mint(self.default_length)
    }
}
