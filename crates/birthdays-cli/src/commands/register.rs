//! Register command implementation.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use birthday_store::auth::REGISTERED_MESSAGE;

use crate::cli::ConnectionArgs;
use crate::context::{auth_from, credentials_from};
use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {}

pub async fn run(_args: RegisterArgs, connection: &ConnectionArgs) -> Result<()> {
    let auth = auth_from(connection)?;
    let adapter = auth
        .adapter()
        .context("Registration requires --auth-api-key")?;
    let credentials = credentials_from(connection)?
        .context("Registration requires --email and --password")?;

    eprintln!("{}", "Registering...".dimmed());

    adapter
        .register(&credentials)
        .await
        .context("Failed to register")?;

    output::success(REGISTERED_MESSAGE);
    output::field("Email", credentials.email());
    Ok(())
}
