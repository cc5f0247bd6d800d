use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Partial body for `PUT /api/voter/{id}`.
#[derive(Serialize, Debug)]
pub struct EmailUpdate<'a> {
    pub email: &'a str,
}

/// Same shape check the backend applies before accepting an address.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}
