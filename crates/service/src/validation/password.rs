use super::Verdict;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 100;
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_+=[]{}|;:,.<>?";

/// Validate a password: length first (its own message), then a single
/// combined complexity check requiring a lowercase letter, an uppercase
/// letter, a digit and a special character anywhere in the string.
pub fn validate_password(password: &str) -> Verdict {
    let length = password.chars().count();
    if length < MIN_LENGTH || length > MAX_LENGTH {
        return Verdict::reject(format!(
            "Password must be between {MIN_LENGTH} and {MAX_LENGTH} characters."
        ));
    }

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARACTERS.contains(c));
    if !(has_lowercase && has_uppercase && has_digit && has_special) {
        return Verdict::reject(
            "Password must contain at least one uppercase letter, one lowercase letter, \
             one number, and one special character.",
        );
    }

    Verdict::ok("Password is valid.")
}
