//! Email/password identity provider over the Identity Toolkit REST API.

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use birthday_core::error::{AuthError, ServerError};
use birthday_core::traits::{IdentityProvider, User};
use birthday_core::{ApiUrl, Credentials, Error, IdToken, Result, UserId};

use crate::client::RestClient;
use crate::endpoints::{PasswordRequest, PasswordResponse, SIGN_IN_WITH_PASSWORD, SIGN_UP};

/// Default Identity Toolkit host.
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com";

/// Identity provider backed by the Identity Toolkit password endpoints.
///
/// Every request is authorized with the project's web API key.
#[derive(Clone)]
pub struct IdentityToolkit {
    base: ApiUrl,
    api_key: String,
    client: RestClient,
}

impl IdentityToolkit {
    /// Create a provider using the default Identity Toolkit host.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_base_url(ApiUrl::new(DEFAULT_IDENTITY_URL)?, api_key))
    }

    /// Create a provider against a custom host (emulators, tests).
    pub fn with_base_url(base: ApiUrl, api_key: impl Into<String>) -> Self {
        Self {
            base,
            api_key: api_key.into(),
            client: RestClient::new(None),
        }
    }

    /// Returns the identity host.
    pub fn base_url(&self) -> &ApiUrl {
        &self.base
    }

    async fn password_call(&self, method: &str, credentials: &Credentials) -> Result<User> {
        let url = format!("{}/{}", self.base, method);
        let request = PasswordRequest {
            email: credentials.email(),
            password: credentials.password(),
            return_secure_token: true,
        };

        let response: PasswordResponse = self
            .client
            .post_with_query(&url, &[("key", self.api_key.as_str())], &request)
            .await
            .map_err(auth_error)?;

        Ok(User {
            id: UserId::new(response.local_id),
            email: response
                .email
                .unwrap_or_else(|| credentials.email().to_string()),
            id_token: IdToken::new(response.id_token),
        })
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkit {
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    async fn sign_in(&self, credentials: &Credentials) -> Result<User> {
        debug!("Signing in");
        let user = self.password_call(SIGN_IN_WITH_PASSWORD, credentials).await?;
        info!(user = %user.id, "Signed in");
        Ok(user)
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    async fn register(&self, credentials: &Credentials) -> Result<User> {
        debug!("Registering account");
        let user = self.password_call(SIGN_UP, credentials).await?;
        info!(user = %user.id, "Account registered");
        Ok(user)
    }
}

/// Translate provider error codes into [`AuthError`]s.
fn auth_error(err: Error) -> Error {
    let Error::Server(ServerError { error, message, .. }) = &err else {
        return err;
    };
    // Codes may carry a detail suffix, e.g. "WEAK_PASSWORD : Password should be..."
    let code = match error.as_deref() {
        Some(c) => c.split(':').next().unwrap_or(c).trim().to_string(),
        None => return err,
    };
    let message = message.clone();

    match code.as_str() {
        "EMAIL_EXISTS" => AuthError::EmailTaken.into(),
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "USER_DISABLED" => {
            AuthError::InvalidCredentials(code).into()
        }
        _ => AuthError::Provider {
            message: message.unwrap_or(code),
        }
        .into(),
    }
}

impl fmt::Debug for IdentityToolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityToolkit")
            .field("base", &self.base)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
