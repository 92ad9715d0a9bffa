//! Login credentials type.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Email/password credentials for the identity provider.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use birthday_core::Credentials;
///
/// let creds = Credentials::new("alice@example.com", "hunter22").unwrap();
/// assert_eq!(creds.email(), "alice@example.com");
/// ```
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// The email is trimmed and must contain an `@` with text on both sides.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is malformed or the password is empty.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, Error> {
        let email = email.into().trim().to_string();
        let password = password.into();

        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(InvalidInputError::Email {
                    value: email,
                    reason: "expected name@domain".to_string(),
                }
                .into());
            }
        }

        if password.is_empty() {
            return Err(InvalidInputError::Other {
                message: "password cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self { email, password })
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
