//! Username validation.
//!
//! Checks a candidate username against two independent rules:
//! - Minimum length
//! - Allowed character set (ASCII letters, digits, underscore)
//!
//! Both rules are reported separately so the caller can show one pass/fail
//! indicator per rule while the user is still typing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum number of characters for a valid username
pub const MIN_USERNAME_LENGTH: usize = 5;

// Anchored and explicit: `\w` would also admit Unicode word characters.
static USERNAME_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]*$").expect("username format pattern must compile"));

/// Per-rule username validation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameCheck {
    /// Username has at least [`MIN_USERNAME_LENGTH`] characters
    pub length_valid: bool,
    /// Every character is an ASCII letter, digit, or underscore
    pub format_valid: bool,
}

impl UsernameCheck {
    /// Check if both rules are satisfied
    pub fn is_valid(&self) -> bool {
        self.length_valid && self.format_valid
    }
}

/// Validates a candidate username
///
/// The two rules are independent: a short username made of allowed
/// characters fails only the length rule. The empty string passes the
/// format rule (there is no offending character to point at) but not the
/// length rule. Total over arbitrary strings; never fails.
pub fn check_username(input: &str) -> UsernameCheck {
    UsernameCheck {
        length_valid: input.chars().count() >= MIN_USERNAME_LENGTH,
        format_valid: USERNAME_FORMAT.is_match(input),
    }
}
