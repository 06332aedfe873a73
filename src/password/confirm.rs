//! Password confirmation matching.

use log::trace;

/// Checks whether the entry and re-entry fields visibly disagree
///
/// Returns true only when both strings are non-empty and unequal; an empty
/// field on either side never raises the flag, so a half-completed form
/// stays quiet. Total; never fails.
pub fn passwords_mismatch(entry: &str, reentry: &str) -> bool {
    let mismatch = !entry.is_empty() && !reentry.is_empty() && entry != reentry;
    if mismatch {
        // Flag only; field contents are never logged.
        trace!("password confirmation does not match entry");
    }
    mismatch
}
