//! View model and auth construction from command-line arguments.

use std::time::Duration;

use anyhow::{Context as _, Result, bail};
use tracing::debug;

use birthday_core::{ApiUrl, Credentials, ResourcePath};
use birthday_http::{HttpRemote, IdentityToolkit};
use birthday_store::{Auth, AuthAdapter, BirthdayViewModel, CollectionStore};

use crate::cli::ConnectionArgs;

/// Build a view model over the configured API.
///
/// When both email and password are given, the user is signed in first and
/// the API sees their ID token. The view model starts its initial fetch as
/// soon as it is returned.
pub async fn connect(args: &ConnectionArgs) -> Result<BirthdayViewModel<HttpRemote>> {
    let api = ApiUrl::new(&args.api_url).context("Invalid API URL")?;
    let resource = ResourcePath::new(&args.resource).context("Invalid resource path")?;

    let mut remote = HttpRemote::new(api, resource);
    if let Some(secs) = args.timeout_secs {
        remote = remote.with_timeout(Duration::from_secs(secs));
    }
    debug!(api = %remote.api(), resource = %remote.resource(), "Using birthdays API");

    let auth = auth_from(args)?;
    if let Some(credentials) = credentials_from(args)? {
        let Some(adapter) = auth.adapter() else {
            bail!("Signing in requires --auth-api-key");
        };
        adapter
            .sign_in(&credentials)
            .await
            .context("Failed to sign in")?;
        if let Some(user) = adapter.current_user() {
            remote = remote.with_id_token(user.id_token);
        }
    }

    Ok(BirthdayViewModel::new(CollectionStore::new(remote), auth))
}

/// Auth is enabled exactly when an API key is configured.
pub fn auth_from(args: &ConnectionArgs) -> Result<Auth> {
    let Some(key) = args.auth_api_key.as_deref() else {
        return Ok(Auth::Disabled);
    };

    let provider = match &args.auth_url {
        Some(url) => {
            let base = ApiUrl::new(url).context("Invalid auth URL")?;
            IdentityToolkit::with_base_url(base, key)
        }
        None => IdentityToolkit::new(key).context("Invalid identity service URL")?,
    };
    Ok(Auth::Enabled(AuthAdapter::new(provider)))
}

/// Credentials from `--email`/`--password`, if both are present.
pub fn credentials_from(args: &ConnectionArgs) -> Result<Option<Credentials>> {
    match (&args.email, &args.password) {
        (Some(email), Some(password)) => Ok(Some(
            Credentials::new(email, password).context("Invalid credentials")?,
        )),
        (None, None) => Ok(None),
        _ => bail!("--email and --password must be given together"),
    }
}
