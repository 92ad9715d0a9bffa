//! Get command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use birthday_core::BirthdayId;

use crate::cli::ConnectionArgs;
use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Record id
    pub id: i64,

    /// Pretty-print JSON output
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GetArgs, connection: &ConnectionArgs) -> Result<()> {
    let vm = context::connect(connection).await?;

    let birthday = vm
        .store()
        .get(BirthdayId::new(args.id))
        .await
        .with_context(|| format!("Failed to fetch birthday {}", args.id))?;

    if args.json {
        output::json_pretty(&birthday)?;
    } else {
        output::detail(&birthday);
    }

    Ok(())
}
