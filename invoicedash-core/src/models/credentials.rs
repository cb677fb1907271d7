//! Sign-in credential shape validation

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Minimum password length accepted at sign-in
const MIN_PASSWORD_LEN: usize = 6;

/// Pragmatic address check: one `@`, no whitespace, a dot in the domain
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex")
});

/// Email + password pair with a validated shape
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Validate credential shape.
    ///
    /// ```
    /// use invoicedash_core::models::Credentials;
    ///
    /// assert!(Credentials::parse("user@nextmail.com", "123456").is_ok());
    /// assert!(Credentials::parse("user@nextmail.com", "12345").is_err());
    /// assert!(Credentials::parse("not-an-email", "123456").is_err());
    /// ```
    pub fn parse(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must be a valid email address",
            });
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::TooShort {
                field: "password",
                min: MIN_PASSWORD_LEN,
            });
        }

        Ok(Self {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid() {
        let creds = Credentials::parse(" user@nextmail.com ", "123456").unwrap();
        assert_eq!(creds.email, "user@nextmail.com");
        assert_eq!(creds.password, "123456");
    }

    #[test]
    fn rejects_empty_email() {
        let err = Credentials::parse("", "123456").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "email" });
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["user", "user@", "@nextmail.com", "user@nextmail", "us er@mail.com"] {
            let err = Credentials::parse(email, "123456").unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "email", .. }),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_short_password() {
        let err = Credentials::parse("user@nextmail.com", "12345").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "password",
                min: 6
            }
        );
    }

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::parse("user@nextmail.com", "hunter22").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("hunter22"));
        assert!(debug.contains("<redacted>"));
    }
}
