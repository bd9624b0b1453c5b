use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name regex"));

pub fn check_email(email: &str) -> Option<FieldError> {
    if EMAIL_RE.is_match(email.trim()) {
        None
    } else {
        Some(FieldError::new("email", "Enter a valid email address."))
    }
}

/// Passwords are 4 to 10 alphanumeric characters.
pub fn check_password(password: &str) -> Option<FieldError> {
    let trimmed = password.trim();
    let ok = (4..=10).contains(&trimmed.chars().count())
        && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
    if ok {
        None
    } else {
        Some(FieldError::new(
            "password",
            "Please enter a password with only numbers and text, \
             at least 4 and at most 10 characters.",
        ))
    }
}

pub fn check_name(name: &str) -> Option<FieldError> {
    if !name.trim().is_empty() && NAME_RE.is_match(name) {
        None
    } else {
        Some(FieldError::new(
            "name",
            "Please enter a valid name with only text.",
        ))
    }
}

/// Collects field errors for the login form.
pub fn login_errors(email: &str, password: &str) -> Vec<FieldError> {
    [check_email(email), check_password(password)]
        .into_iter()
        .flatten()
        .collect()
}

/// Collects field errors for the signup form.
pub fn signup_errors(name: &str, email: &str, password: &str) -> Vec<FieldError> {
    [check_name(name), check_email(email), check_password(password)]
        .into_iter()
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_email() {
        assert!(check_email("recruiter@example.com").is_none());
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "plainaddress", "no@tld", "two@@example.com", "a b@example.com"] {
            assert!(check_email(email).is_some(), "accepted {email:?}");
        }
    }

    #[test]
    fn password_length_bounds() {
        assert!(check_password("abc").is_some());
        assert!(check_password("abcd").is_none());
        assert!(check_password("abcdefghij").is_none());
        assert!(check_password("abcdefghijk").is_some());
    }

    #[test]
    fn password_must_be_alphanumeric() {
        assert!(check_password("pass123").is_none());
        assert!(check_password("pass 123").is_some());
        assert!(check_password("pass-12").is_some());
    }

    #[test]
    fn name_allows_letters_and_spaces_only() {
        assert!(check_name("Jane Doe").is_none());
        assert!(check_name("Jane Doe 3rd").is_some());
        assert!(check_name("").is_some());
    }

    #[test]
    fn signup_collects_all_field_errors() {
        let errors = signup_errors("", "bad", "x");
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "password"]);
    }
}
