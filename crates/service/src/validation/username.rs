use once_cell::sync::Lazy;
use regex::Regex;

use super::Verdict;

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 15;
const RESERVED_WORDS: [&str; 3] = ["admin", "root", "superuser"];

static CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("hardcoded regex compiles"));

/// Validate a username: length, charset, reserved words, boundary characters,
/// checked in that order with the first failure reported.
pub fn validate_username(username: &str) -> Verdict {
    let length = username.chars().count();
    if length < MIN_LENGTH || length > MAX_LENGTH {
        return Verdict::reject(format!(
            "Username must be between {MIN_LENGTH} and {MAX_LENGTH} characters."
        ));
    }

    if !CHARSET.is_match(username) {
        return Verdict::reject(
            "Username can only contain letters, numbers, dots, underscores, and hyphens.",
        );
    }

    if RESERVED_WORDS.contains(&username.to_lowercase().as_str()) {
        return Verdict::reject("This username is reserved and cannot be used.");
    }

    if username.starts_with(['.', '_', '-']) || username.ends_with(['.', '_', '-']) {
        return Verdict::reject("Username cannot start or end with a special character.");
    }

    Verdict::ok("Username is valid.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_usernames() {
        assert!(validate_username("validUser_123").valid);
        assert!(validate_username("a.b").valid);
        assert!(validate_username("abc").valid);
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        for name in ["", "us", "sixteen_chars_xx"] {
            let verdict = validate_username(name);
            assert!(!verdict.valid);
            assert_eq!(verdict.message, "Username must be between 3 and 15 characters.");
        }
    }

    #[test]
    fn rejects_invalid_characters() {
        let verdict = validate_username("invalid@user");
        assert_eq!(
            verdict.message,
            "Username can only contain letters, numbers, dots, underscores, and hyphens."
        );
        assert!(!validate_username("has space").valid);
    }

    #[test]
    fn rejects_reserved_words_case_insensitively() {
        for name in ["admin", "ADMIN", "Root", "SuperUser"] {
            let verdict = validate_username(name);
            assert_eq!(verdict.message, "This username is reserved and cannot be used.");
        }
    }

    #[test]
    fn rejects_boundary_special_characters() {
        for name in [".abc", "abc.", "_abc", "abc_", "-abc", "abc-"] {
            let verdict = validate_username(name);
            assert_eq!(
                verdict.message,
                "Username cannot start or end with a special character."
            );
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 8 characters but 16 bytes: the length check passes, so the
        // charset check reports the failure.
        let verdict = validate_username("приветик");
        assert_eq!(
            verdict.message,
            "Username can only contain letters, numbers, dots, underscores, and hyphens."
        );
    }

    #[test]
    fn checks_run_in_order() {
        // Too short and invalid charset: the length message wins.
        let verdict = validate_username("@!");
        assert_eq!(verdict.message, "Username must be between 3 and 15 characters.");
    }
}
