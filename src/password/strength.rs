//! Password strength scoring.
//!
//! Grades a password against five independent criteria, one point each:
//! - Minimum length
//! - At least one lowercase letter
//! - At least one uppercase letter
//! - At least one digit
//! - At least one special character
//!
//! No criterion is required by any other; an empty password scores zero
//! rather than failing. The caller decides what score is good enough.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum length counted toward the strength score
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Number of independent scoring criteria
pub const CRITERIA_COUNT: u8 = 5;

/// Special characters counted toward the strength score by default.
///
/// The `©` is a known oddity, almost certainly a fat-fingered `@`, but every
/// signup client ships this exact set and they have to agree on what counts
/// as special. Keep it until the clients drop it; callers that want a
/// different set go through [`StrengthPolicy::with_special_chars`].
pub const DEFAULT_SPECIAL_CHARS: &str = "!©#$%^&*";

/// Errors from building a [`StrengthPolicy`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Special character set is empty")]
    EmptySpecialSet,

    #[error("Special character set contains alphanumeric character '{0}'")]
    AlphanumericSpecial(char),
}

/// Per-criterion breakdown of a graded password
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Number of criteria met, 0..=[`CRITERIA_COUNT`]
    pub score: u8,
    /// `score` as a fraction of [`CRITERIA_COUNT`], for progress gauges
    pub ratio: f64,
    /// Password has at least [`MIN_PASSWORD_LENGTH`] characters
    pub meets_length: bool,
    /// At least one ASCII lowercase letter
    pub has_lowercase: bool,
    /// At least one ASCII uppercase letter
    pub has_uppercase: bool,
    /// At least one ASCII digit
    pub has_digit: bool,
    /// At least one character from the policy's special set
    pub has_special: bool,
}

impl StrengthReport {
    /// Check if every criterion is met
    pub fn is_full(&self) -> bool {
        self.score == CRITERIA_COUNT
    }
}

/// Scoring policy for [`StrengthReport`]
///
/// Only the special-character set varies; the length threshold and the
/// other four criteria are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthPolicy {
    special_chars: String,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self {
            special_chars: DEFAULT_SPECIAL_CHARS.to_owned(),
        }
    }
}

impl StrengthPolicy {
    /// Creates a policy using [`DEFAULT_SPECIAL_CHARS`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy with a custom special-character set
    ///
    /// The set must be non-empty and must not contain letters or digits;
    /// an alphanumeric "special" would let a single character score two
    /// criteria at once.
    pub fn with_special_chars(special_chars: &str) -> Result<Self, PolicyError> {
        if special_chars.is_empty() {
            return Err(PolicyError::EmptySpecialSet);
        }

        if let Some(c) = special_chars.chars().find(char::is_ascii_alphanumeric) {
            return Err(PolicyError::AlphanumericSpecial(c));
        }

        debug!(
            "strength policy using custom special set of {} characters",
            special_chars.chars().count()
        );

        Ok(Self {
            special_chars: special_chars.to_owned(),
        })
    }

    /// Characters this policy counts as special
    pub fn special_chars(&self) -> &str {
        &self.special_chars
    }

    /// Grades a password against the five criteria
    ///
    /// Each criterion is judged on its own over the whole string with
    /// "contains at least one" semantics. Total over arbitrary strings;
    /// never fails.
    pub fn grade(&self, password: &str) -> StrengthReport {
        let meets_length = password.chars().count() >= MIN_PASSWORD_LENGTH;
        let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
        let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| self.special_chars.contains(c));

        let score = [meets_length, has_lowercase, has_uppercase, has_digit, has_special]
            .iter()
            .filter(|&&met| met)
            .count() as u8;

        // Derived numbers only; the password itself is never logged.
        trace!("password graded {}/{}", score, CRITERIA_COUNT);

        StrengthReport {
            score,
            ratio: f64::from(score) / f64::from(CRITERIA_COUNT),
            meets_length,
            has_lowercase,
            has_uppercase,
            has_digit,
            has_special,
        }
    }
}

/// Grades a password with the default policy
pub fn check_password_strength(password: &str) -> StrengthReport {
    StrengthPolicy::default().grade(password)
}
