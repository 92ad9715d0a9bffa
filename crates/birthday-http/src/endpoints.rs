//! Wire types for the identity service and error bodies.

use serde::{Deserialize, Serialize};

/// Identity Toolkit method for password sign-in.
pub const SIGN_IN_WITH_PASSWORD: &str = "v1/accounts:signInWithPassword";

/// Identity Toolkit method for account creation.
pub const SIGN_UP: &str = "v1/accounts:signUp";

/// Request body for signInWithPassword and signUp.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// Response from signInWithPassword and signUp.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    pub id_token: String,
}

/// Error body shapes seen from the API and the identity service.
///
/// The REST API answers with `{"message": ...}` or a problem document with a
/// `title`; the identity service nests `{"error": {"message": "EMAIL_EXISTS"}}`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<ErrorField>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorField {
    Code(String),
    Nested {
        #[serde(default)]
        message: Option<String>,
    },
}

impl ErrorBody {
    /// Split into (error code, human message).
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        let message = self.message.or(self.title);
        match self.error {
            Some(ErrorField::Code(code)) => (Some(code), message),
            Some(ErrorField::Nested { message: nested }) => {
                let message = message.or_else(|| nested.clone());
                (nested, message)
            }
            None => (None, message),
        }
    }
}
