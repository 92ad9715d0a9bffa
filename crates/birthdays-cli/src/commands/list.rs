//! List command implementation.

use anyhow::{Context as _, Result, bail};
use clap::Args;
use colored::Colorize;

use birthday_store::{FilterField, SortField};

use crate::cli::ConnectionArgs;
use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Sort by name, birth-year or age
    #[arg(long)]
    pub sort: Option<SortField>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Keep names starting with this prefix (case-insensitive)
    #[arg(long, conflicts_with = "filter_age")]
    pub filter_name: Option<String>,

    /// Keep records with exactly this age
    #[arg(long)]
    pub filter_age: Option<String>,

    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, connection: &ConnectionArgs) -> Result<()> {
    let vm = context::connect(connection).await?;

    let mut updates = vm.subscribe();
    updates
        .wait_for(|state| !state.is_loading())
        .await
        .context("Store closed before the list arrived")?;
    if let Some(message) = vm.error_message() {
        bail!("Failed to list birthdays: {}", message);
    }

    if let Some(prefix) = &args.filter_name {
        vm.filter(FilterField::Name, prefix);
    } else if let Some(age) = &args.filter_age {
        vm.filter(FilterField::Age, age);
    }
    if let Some(field) = args.sort {
        vm.sort(field, !args.desc);
    }

    let birthdays = vm.birthdays();
    if birthdays.is_empty() {
        eprintln!("{}", "No birthdays found.".dimmed());
        return Ok(());
    }

    for birthday in &birthdays {
        if args.json {
            output::json(birthday)?;
        } else {
            output::row(birthday);
        }
    }

    Ok(())
}
