//! Password validation module
//!
//! This module provides the password-side rules of the signup form:
//! - Strength scoring against five independent criteria
//! - Confirmation matching between the entry and re-entry fields

pub mod confirm;
pub mod strength;

// Re-export commonly used types
pub use confirm::passwords_mismatch;
pub use strength::{check_password_strength, PolicyError, StrengthPolicy, StrengthReport};
