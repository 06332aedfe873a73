//! Integration tests driving the crate the way the signup form does:
//! every operation is recomputed from scratch on each text change.

use signup_validation::{
    check_password_strength, check_username, passwords_mismatch, StrengthPolicy,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Feed a string one keystroke at a time, revalidating after each one,
/// and return the intermediate prefixes.
fn keystrokes(input: &str) -> Vec<String> {
    input
        .char_indices()
        .map(|(i, c)| input[..i + c.len_utf8()].to_string())
        .collect()
}

#[test]
fn test_username_validation_while_typing() {
    init_logging();

    let mut length_flips = Vec::new();
    for prefix in keystrokes("my_user1") {
        let check = check_username(&prefix);
        // the allowed-set rule never fails for this input
        assert!(check.format_valid, "format should hold for {:?}", prefix);
        length_flips.push(check.length_valid);
    }

    // length rule flips exactly once, at the fifth character, and stays on
    assert_eq!(length_flips, [false, false, false, false, true, true, true, true]);
}

#[test]
fn test_username_format_recovers_after_deleting_bad_character() {
    init_logging();

    assert!(check_username("my_user").format_valid);
    // user types a dash, sees the failure, deletes it
    assert!(!check_username("my_user-").format_valid);
    assert!(check_username("my_user").format_valid);
}

#[test]
fn test_strength_score_never_decreases_while_typing_a_strong_password() {
    init_logging();

    let mut last_score = 0;
    for prefix in keystrokes("Abcdefg1!") {
        let report = check_password_strength(&prefix);
        assert!(
            report.score >= last_score,
            "score dropped from {} to {} at {:?}",
            last_score,
            report.score,
            prefix
        );
        last_score = report.score;
    }

    assert_eq!(last_score, 5);
}

#[test]
fn test_full_signup_flow() {
    init_logging();

    // username settles first
    let username = check_username("david_23");
    assert!(username.is_valid());

    // password entry reaches full strength
    let report = check_password_strength("Str0ng&Pass");
    assert!(report.is_full());
    assert_eq!(report.ratio, 1.0);

    // nothing is flagged while the confirmation field is still empty
    assert!(!passwords_mismatch("Str0ng&Pass", ""));

    // a partial re-entry disagrees, a complete one does not
    assert!(passwords_mismatch("Str0ng&Pass", "Str0ng"));
    assert!(!passwords_mismatch("Str0ng&Pass", "Str0ng&Pass"));
}

#[test]
fn test_custom_policy_accepts_at_sign() {
    init_logging();

    let policy = StrengthPolicy::with_special_chars("!@#$%^&*").expect("valid special set");
    assert!(policy.grade("Abcdefg1@").is_full());
}

#[test]
fn test_report_serializes_with_stable_field_names() {
    init_logging();

    let value = serde_json::to_value(check_password_strength("Abcdefg1!"))
        .expect("report should serialize");

    assert_eq!(value["score"], 5);
    assert_eq!(value["ratio"], 1.0);
    assert_eq!(value["meets_length"], true);
    assert_eq!(value["has_special"], true);
}

#[test]
fn test_operations_are_idempotent() {
    init_logging();

    for input in ["", "a", "abcde", "Abcdefg1!", "dav!d"] {
        assert_eq!(check_username(input), check_username(input));
        assert_eq!(check_password_strength(input), check_password_strength(input));
        assert_eq!(
            passwords_mismatch(input, "other"),
            passwords_mismatch(input, "other")
        );
    }
}
