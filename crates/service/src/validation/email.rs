use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Verdict;

const MAX_LENGTH: usize = 254;

// One or more non-space-non-@ characters, a single @, and a domain part
// containing at least one dot.
static FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded regex compiles"));

/// Known disposable-mail and placeholder domains, rejected regardless of
/// format validity.
static PROHIBITED_DOMAINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "mailinator.com", "10minutemail.com", "guerrillamail.com", "yopmail.com",
        "dispostable.com", "trashmail.com", "tempmail.com", "getairmail.com",
        "mintemail.com", "maildrop.cc", "fakeinbox.com", "temp-mail.org",
        "emailondeck.com", "throwawaymail.com", "mailcatch.com", "mytrashmail.com",
        "getnada.com", "sharklasers.com", "spamgourmet.com", "spamexperts.com",
        "spamfree24.org", "mohmal.com", "mailnesia.com", "emkei.cz",
        "anonymbox.com", "maildrop.cf", "maildrop.ga", "maildrop.ml",
        "maildrop.tk", "example.com", "example.net", "example.org",
        "example.co", "example.xyz", "prohibited.com", "prohibited.net",
        "prohibited.org", "prohibited.co", "prohibited.xyz",
    ])
});

/// Validate an email address: emptiness, length, format, @-arity and the
/// domain deny-list, in that order.
pub fn validate_email(email: &str) -> Verdict {
    if email.is_empty() {
        return Verdict::reject("Email cannot be empty.");
    }

    if email.chars().count() > MAX_LENGTH {
        return Verdict::reject(format!("Email must not exceed {MAX_LENGTH} characters."));
    }

    if !FORMAT.is_match(email) {
        return Verdict::reject("Email format is invalid.");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Verdict::reject("Email format is invalid.");
    }

    let domain = parts[1].to_lowercase();
    if PROHIBITED_DOMAINS.contains(domain.as_str()) {
        return Verdict::reject("Email domain is not allowed.");
    }

    Verdict::ok("Email is valid.")
}
