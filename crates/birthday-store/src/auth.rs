//! Optional authentication.
//!
//! [`Auth`] is either [`Auth::Enabled`] with an [`AuthAdapter`] around an
//! identity provider, or [`Auth::Disabled`]. The collection store works the
//! same in both cases; with auth disabled no user is attached to records.
//!
//! Sessions live in memory only and are gone after sign-out.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use birthday_core::traits::{IdentityProvider, User};
use birthday_core::{Credentials, Result, UserId};

/// Message shown after a successful registration.
pub const REGISTERED_MESSAGE: &str = "Account successfully registered!";

/// Where the adapter is in the sign-in flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    SignedOut,
    Authenticating,
    SignedIn,
    /// The last request failed; no user is signed in.
    Failed,
}

/// Observable authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    phase: AuthPhase,
    user: Option<User>,
    message: Option<String>,
}

impl AuthState {
    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True while a sign-in or registration is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Authenticating
    }

    /// Error or status message from the last request.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Tracks the session against an [`IdentityProvider`].
#[derive(Clone)]
pub struct AuthAdapter {
    inner: Arc<AuthInner>,
}

struct AuthInner {
    provider: Box<dyn IdentityProvider>,
    state: watch::Sender<AuthState>,
}

impl AuthAdapter {
    /// Create a signed-out adapter.
    pub fn new(provider: impl IdentityProvider + 'static) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            inner: Arc::new(AuthInner {
                provider: Box::new(provider),
                state,
            }),
        }
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.inner.state.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    /// Returns the signed-in user.
    pub fn current_user(&self) -> Option<User> {
        self.inner.state.borrow().user.clone()
    }

    /// Sign in with email and password.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<()> {
        self.start();
        match self.inner.provider.sign_in(credentials).await {
            Ok(user) => {
                info!(user = %user.id, "Session started");
                self.inner.state.send_modify(|s| {
                    s.phase = AuthPhase::SignedIn;
                    s.user = Some(user);
                    s.message = None;
                });
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Create an account.
    ///
    /// Registration does not sign the new user in; they sign in afterwards.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        self.start();
        match self.inner.provider.register(credentials).await {
            Ok(user) => {
                debug!(user = %user.id, "Registered; staying signed out");
                self.inner.state.send_modify(|s| {
                    s.phase = AuthPhase::SignedOut;
                    s.user = None;
                    s.message = Some(REGISTERED_MESSAGE.to_string());
                });
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Forget the current session.
    ///
    /// Local state is always cleared; a provider-side failure is only logged.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) {
        if let Some(user) = self.current_user() {
            if let Err(err) = self.inner.provider.sign_out(&user).await {
                warn!(error = %err, "Provider sign-out failed");
            }
            info!(user = %user.id, "Signed out");
        }
        self.inner.state.send_modify(|s| {
            s.phase = AuthPhase::SignedOut;
            s.user = None;
        });
    }

    fn start(&self) {
        self.inner
            .state
            .send_modify(|s| s.phase = AuthPhase::Authenticating);
    }

    fn fail(&self, err: birthday_core::Error) -> birthday_core::Error {
        warn!(error = %err, "Authentication failed");
        let message = err.to_string();
        self.inner.state.send_modify(|s| {
            s.phase = AuthPhase::Failed;
            s.user = None;
            s.message = Some(message);
        });
        err
    }
}

impl std::fmt::Debug for AuthAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("AuthAdapter")
            .field("phase", &state.phase)
            .field("user", &state.user.as_ref().map(|u| &u.id))
            .finish()
    }
}

/// Authentication capability: present or switched off.
#[derive(Debug, Clone, Default)]
pub enum Auth {
    Enabled(AuthAdapter),
    #[default]
    Disabled,
}

impl Auth {
    /// Returns the adapter when auth is enabled.
    pub fn adapter(&self) -> Option<&AuthAdapter> {
        match self {
            Auth::Enabled(adapter) => Some(adapter),
            Auth::Disabled => None,
        }
    }

    /// Id of the signed-in user; always `None` when disabled.
    pub fn owner(&self) -> Option<UserId> {
        self.adapter()
            .and_then(AuthAdapter::current_user)
            .map(|u| u.id)
    }
}
