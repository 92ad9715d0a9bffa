//! Subcommand implementations.

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod register;
pub mod update;

use anyhow::Result;
use clap::Args;

use birthday_core::Birthday;

use crate::cli::{Commands, ConnectionArgs};

pub async fn handle(command: Commands, connection: &ConnectionArgs) -> Result<()> {
    match command {
        Commands::List(args) => list::run(args, connection).await,
        Commands::Get(args) => get::run(args, connection).await,
        Commands::Add(args) => add::run(args, connection).await,
        Commands::Update(args) => update::run(args, connection).await,
        Commands::Delete(args) => delete::run(args, connection).await,
        Commands::Register(args) => register::run(args, connection).await,
    }
}

/// Fields of a birthday as given on the command line.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Person's name
    #[arg(long)]
    pub name: String,

    /// Birth year
    #[arg(long)]
    pub year: i32,

    /// Birth month (1-12)
    #[arg(long)]
    pub month: u32,

    /// Day of month (1-31)
    #[arg(long)]
    pub day: u32,

    /// Free-form remarks
    #[arg(long)]
    pub remarks: Option<String>,

    /// Picture URL
    #[arg(long)]
    pub picture_url: Option<String>,
}

impl RecordArgs {
    pub fn into_birthday(self) -> Birthday {
        let mut birthday = Birthday::new(self.name, self.year, self.month, self.day);
        if let Some(remarks) = self.remarks {
            birthday = birthday.with_remarks(remarks);
        }
        if let Some(url) = self.picture_url {
            birthday = birthday.with_picture_url(url);
        }
        birthday
    }
}
