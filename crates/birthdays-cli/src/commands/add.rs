//! Add command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::commands::RecordArgs;
use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub record: RecordArgs,
}

pub async fn run(args: AddArgs, connection: &ConnectionArgs) -> Result<()> {
    let vm = context::connect(connection).await?;

    let birthday = args.record.into_birthday();
    let name = birthday.name.clone();

    vm.add(birthday)
        .await
        .context("Add task failed")?
        .context("Failed to add birthday")?;

    output::success(&format!("Added birthday for {}", name));
    Ok(())
}
