//! Update command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use birthday_core::BirthdayId;

use crate::cli::ConnectionArgs;
use crate::commands::RecordArgs;
use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Record id
    pub id: i64,

    #[command(flatten)]
    pub record: RecordArgs,
}

pub async fn run(args: UpdateArgs, connection: &ConnectionArgs) -> Result<()> {
    let vm = context::connect(connection).await?;

    vm.update(BirthdayId::new(args.id), args.record.into_birthday())
        .await
        .context("Update task failed")?
        .with_context(|| format!("Failed to update birthday {}", args.id))?;

    output::success(&format!("Updated birthday {}", args.id));
    Ok(())
}
