//! Signup Credential Validation
//!
//! Pure validation rules for a signup form: username length and format checks,
//! password strength scoring, and password confirmation matching. Every
//! operation is total, synchronous, and side-effect free, so callers simply
//! re-run it on each text-change event and render the returned data however
//! they like. Rendering, input masking, and iconography belong to the
//! presentation layer, not here.

pub mod password;
pub mod username;

// Re-export commonly used types and functions
pub use password::confirm::passwords_mismatch;
pub use password::strength::{
    check_password_strength, PolicyError, StrengthPolicy, StrengthReport,
};
pub use username::{check_username, UsernameCheck};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
