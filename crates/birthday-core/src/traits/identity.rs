//! Identity provider trait.

use async_trait::async_trait;

use crate::tokens::IdToken;
use crate::types::UserId;
use crate::{Credentials, Result};

/// A user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Provider-issued user id.
    pub id: UserId,
    /// Email the user signed in with.
    pub email: String,
    /// Bearer token presented to the birthdays API.
    pub id_token: IdToken,
}

/// An external email/password identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate an existing account.
    async fn sign_in(&self, credentials: &Credentials) -> Result<User>;

    /// Create a new account.
    async fn register(&self, credentials: &Credentials) -> Result<User>;

    /// End the session on the provider side.
    ///
    /// Most password providers have nothing to revoke, so the default does
    /// nothing; local session state is cleared by the caller either way.
    async fn sign_out(&self, _user: &User) -> Result<()> {
        Ok(())
    }
}
