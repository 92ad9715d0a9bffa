mod common;

use std::sync::atomic::Ordering;

use birthday_core::Credentials;
use birthday_store::auth::REGISTERED_MESSAGE;
use birthday_store::{Auth, AuthAdapter, AuthPhase};
use common::FakeIdentity;

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials::new(email, password).unwrap()
}

#[tokio::test]
async fn sign_in_sets_user() {
    let adapter = AuthAdapter::new(FakeIdentity::new("hunter22"));
    assert_eq!(adapter.state().phase(), AuthPhase::SignedOut);

    adapter
        .sign_in(&credentials("ann@example.com", "hunter22"))
        .await
        .unwrap();

    let state = adapter.state();
    assert_eq!(state.phase(), AuthPhase::SignedIn);
    assert_eq!(state.user().unwrap().email, "ann@example.com");
    assert_eq!(state.message(), None);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn wrong_password_fails_with_message() {
    let adapter = AuthAdapter::new(FakeIdentity::new("hunter22"));

    let err = adapter
        .sign_in(&credentials("ann@example.com", "nope"))
        .await
        .unwrap_err();

    let state = adapter.state();
    assert_eq!(state.phase(), AuthPhase::Failed);
    assert!(state.user().is_none());
    assert_eq!(state.message(), Some(err.to_string().as_str()));
}

#[tokio::test]
async fn register_does_not_sign_in() {
    let adapter = AuthAdapter::new(FakeIdentity::new("hunter22"));

    adapter
        .register(&credentials("new@example.com", "hunter22"))
        .await
        .unwrap();

    let state = adapter.state();
    assert_eq!(state.phase(), AuthPhase::SignedOut);
    assert!(state.user().is_none());
    assert_eq!(state.message(), Some(REGISTERED_MESSAGE));
}

#[tokio::test]
async fn register_taken_email_fails() {
    let adapter = AuthAdapter::new(FakeIdentity::new("hunter22"));

    let err = adapter
        .register(&credentials("taken@example.com", "hunter22"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "authentication error: email already registered");
    assert_eq!(adapter.state().phase(), AuthPhase::Failed);
}

#[tokio::test]
async fn sign_out_clears_session() {
    let adapter = AuthAdapter::new(FakeIdentity::new("hunter22"));
    adapter
        .sign_in(&credentials("ann@example.com", "hunter22"))
        .await
        .unwrap();
    let auth = Auth::Enabled(adapter.clone());
    assert!(auth.owner().is_some());

    let mut rx = adapter.subscribe();
    adapter.sign_out().await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().phase(), AuthPhase::SignedOut);
    assert!(auth.owner().is_none());
}

#[tokio::test]
async fn sign_out_reaches_provider_only_with_a_session() {
    let identity = std::sync::Arc::new(FakeIdentity::new("hunter22"));
    let adapter = AuthAdapter::new(SharedIdentity(identity.clone()));

    adapter.sign_out().await;
    assert_eq!(identity.sign_outs.load(Ordering::SeqCst), 0);

    adapter
        .sign_in(&credentials("ann@example.com", "hunter22"))
        .await
        .unwrap();
    adapter.sign_out().await;
    assert_eq!(identity.sign_outs.load(Ordering::SeqCst), 1);
}

#[test]
fn disabled_auth_has_no_owner() {
    let auth = Auth::default();
    assert!(auth.adapter().is_none());
    assert!(auth.owner().is_none());
}

struct SharedIdentity(std::sync::Arc<FakeIdentity>);

#[async_trait::async_trait]
impl birthday_core::IdentityProvider for SharedIdentity {
    async fn sign_in(&self, credentials: &Credentials) -> birthday_core::Result<birthday_core::User> {
        self.0.sign_in(credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> birthday_core::Result<birthday_core::User> {
        self.0.register(credentials).await
    }

    async fn sign_out(&self, user: &birthday_core::User) -> birthday_core::Result<()> {
        self.0.sign_out(user).await
    }
}
