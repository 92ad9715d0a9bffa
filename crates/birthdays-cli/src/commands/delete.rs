//! Delete command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use birthday_core::BirthdayId;

use crate::cli::ConnectionArgs;
use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record id
    pub id: i64,
}

pub async fn run(args: DeleteArgs, connection: &ConnectionArgs) -> Result<()> {
    let vm = context::connect(connection).await?;

    vm.delete(BirthdayId::new(args.id))
        .await
        .context("Delete task failed")?
        .with_context(|| format!("Failed to delete birthday {}", args.id))?;

    output::success(&format!("Deleted birthday {}", args.id));
    Ok(())
}
