//! User input validation: independent field validators composed into a
//! single pass/fail verdict.

pub mod email;
pub mod password;
pub mod username;

pub use email::validate_email;
pub use password::validate_password;
pub use username::validate_username;

use serde_json::Value;

pub const VALIDATED_MESSAGE: &str = "User data has been successfully validated.";
pub const INVALID_SHAPE_MESSAGE: &str =
    "Invalid input: username, email, and password must all be strings.";

/// Outcome of a validation check: a boolean plus a human-readable message.
/// A passing verdict carries a generic success message, a failing one the
/// specific reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { valid: true, message: message.into() }
    }

    pub fn reject(message: impl Into<String>) -> Self {
        Self { valid: false, message: message.into() }
    }
}

/// Validate a raw registration body: shape first, then username, email and
/// password in that fixed order, short-circuiting on the first failure and
/// returning its verdict verbatim.
pub fn validate_user(body: &Value) -> Verdict {
    let fields = (
        body.get("username").and_then(Value::as_str),
        body.get("email").and_then(Value::as_str),
        body.get("password").and_then(Value::as_str),
    );
    let (Some(username), Some(email), Some(password)) = fields else {
        return Verdict::reject(INVALID_SHAPE_MESSAGE);
    };

    let username_verdict = validate_username(username);
    if !username_verdict.valid {
        return username_verdict;
    }

    let email_verdict = validate_email(email);
    if !email_verdict.valid {
        return email_verdict;
    }

    let password_verdict = validate_password(password);
    if !password_verdict.valid {
        return password_verdict;
    }

    Verdict::ok(VALIDATED_MESSAGE)
}
