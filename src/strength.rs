//! Password strength scoring.

use std::fmt;

/// Characters that count toward the "special character" criterion.
pub const STRENGTH_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};:'\",.<>?/\\|";

const DEFAULT_COMMON_PASSWORDS: [&str; 6] =
    ["password", "123456", "qwerty", "admin", "letmein", "welcome"];

const DEFAULT_DICTIONARY_WORDS: [&str; 4] = ["apple", "computer", "dragon", "monkey"];

/// Strength band of an assessed password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    /// Common, dictionary-based, or meeting four criteria or fewer
    Weak,
    /// Neither weak nor strong
    Moderate,
    /// Six or more criteria including a special character
    Strong,
}

impl Rating {
    /// Display color for the band: red, amber or green.
    pub fn color_token(self) -> &'static str {
        match self {
            Rating::Weak => "#FF4444",
            Rating::Moderate => "#FF9800",
            Rating::Strong => "#00C853",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Weak => write!(f, "WEAK"),
            Rating::Moderate => write!(f, "MODERATE"),
            Rating::Strong => write!(f, "STRONG"),
        }
    }
}

/// Rating, score and feedback for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAssessment {
    rating: Rating,
    score: u8,
    feedback: Vec<String>,
}

impl PasswordAssessment {
    /// The strength band.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Display color of the band.
    pub fn color_token(&self) -> &'static str {
        self.rating.color_token()
    }

    /// Number of satisfied criteria, 0 to 7.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Ordered feedback lines.
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }
}

/// Criteria used by [`assess`].
///
/// The defaults hold the built-in lists of known-weak passwords and
/// dictionary words, and a 12-character length requirement. Entries are
/// compared case-insensitively, so they should be stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthPolicy {
    /// Minimum length for the length criterion
    pub min_length: usize,
    /// Passwords rejected on exact (case-insensitive) match
    pub common_passwords: Vec<String>,
    /// Words rejected when found anywhere in the password
    pub dictionary_words: Vec<String>,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self {
            min_length: 12,
            common_passwords: DEFAULT_COMMON_PASSWORDS.map(String::from).to_vec(),
            dictionary_words: DEFAULT_DICTIONARY_WORDS.map(String::from).to_vec(),
        }
    }
}

impl StrengthPolicy {
    /// Scores `password` against this policy.
    ///
    /// Seven criteria each add one point: minimum length, uppercase,
    /// lowercase, digit, special character, not a common password, no
    /// dictionary word. Bands are checked in order:
    ///
    /// 1. Common password, dictionary word, or score ≤ 4: **WEAK**, with a
    ///    line per unmet composition criterion followed by the
    ///    common/dictionary lines.
    /// 2. Score ≥ 6 with a special character: **STRONG**, with the single
    ///    line `+ Excellent security!`.
    /// 3. Otherwise **MODERATE**, with a line per unmet composition
    ///    criterion, plus a closing note when the special character is
    ///    missing.
    pub fn assess(&self, password: &str) -> PasswordAssessment {
        let length_ok = password.chars().count() >= self.min_length;
        let has_upper = password.chars().any(char::is_uppercase);
        let has_lower = password.chars().any(char::is_lowercase);
        let has_digit = password.chars().any(char::is_numeric);
        let has_special = password
            .chars()
            .any(|c| STRENGTH_SPECIAL_CHARACTERS.contains(c));

        let lowered = password.to_lowercase();
        let is_common = self.common_passwords.iter().any(|p| *p == lowered);
        let has_dict_word = self
            .dictionary_words
            .iter()
            .any(|word| lowered.contains(word.as_str()));

        let score = [
            length_ok,
            has_upper,
            has_lower,
            has_digit,
            has_special,
            !is_common,
            !has_dict_word,
        ]
        .into_iter()
        .filter(|met| *met)
        .count() as u8;

        let mut feedback = Vec::new();
        if !length_ok {
            feedback.push(format!("- Minimum {} characters", self.min_length));
        }
        if !has_upper {
            feedback.push("- Missing uppercase letter".to_string());
        }
        if !has_lower {
            feedback.push("- Missing lowercase letter".to_string());
        }
        if !has_digit {
            feedback.push("- Missing a number".to_string());
        }
        if !has_special {
            feedback.push("- Missing a special character".to_string());
        }

        let rating = if is_common || has_dict_word || score <= 4 {
            if is_common {
                feedback.push("- Common password detected".to_string());
            }
            if has_dict_word {
                feedback.push("- Dictionary word detected".to_string());
            }
            Rating::Weak
        } else if score >= 6 && has_special {
            feedback = vec!["+ Excellent security!".to_string()];
            Rating::Strong
        } else {
            if !has_special {
                feedback.push("- Note: Missing special characters".to_string());
            }
            Rating::Moderate
        };

        tracing::debug!(rating = %rating, score, "assessed password strength");

        PasswordAssessment {
            rating,
            score,
            feedback,
        }
    }
}

/// Scores `password` with the default [`StrengthPolicy`].
///
/// # Examples
///
/// ```
/// use octoguard::{assess, Rating};
///
/// let weak = assess("password");
/// assert_eq!(weak.rating(), Rating::Weak);
/// assert!(weak.feedback().iter().any(|line| line == "- Common password detected"));
///
/// let strong = assess("Tr0ub4dor&3Zz!");
/// assert_eq!(strong.rating(), Rating::Strong);
/// assert_eq!(strong.feedback(), ["+ Excellent security!"]);
/// ```
pub fn assess(password: &str) -> PasswordAssessment {
    StrengthPolicy::default().assess(password)
}
