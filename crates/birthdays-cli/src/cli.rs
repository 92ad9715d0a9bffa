//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::{add, delete, get, list, register, update};

/// Command-line client for a remote birthday list.
#[derive(Parser, Debug)]
#[command(name = "birthdays")]
#[command(author, version = env!("BIRTHDAYS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the API lives and who is talking to it.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// REST API base URL
    #[arg(
        long,
        env = "BIRTHDAYS_API_URL",
        default_value = "https://birthdaysrest.azurewebsites.net/api",
        global = true
    )]
    pub api_url: String,

    /// Collection path under the API base
    #[arg(long, env = "BIRTHDAYS_RESOURCE", default_value = "birthdays", global = true)]
    pub resource: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Identity service API key; authentication is off without one
    #[arg(long, env = "BIRTHDAYS_AUTH_API_KEY", hide_env_values = true, global = true)]
    pub auth_api_key: Option<String>,

    /// Identity service base URL
    #[arg(long, global = true)]
    pub auth_url: Option<String>,

    /// Account email
    #[arg(long, env = "BIRTHDAYS_EMAIL", global = true)]
    pub email: Option<String>,

    /// Account password
    #[arg(long, env = "BIRTHDAYS_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List birthdays with computed ages
    List(list::ListArgs),

    /// Show a single birthday
    Get(get::GetArgs),

    /// Add a birthday
    Add(add::AddArgs),

    /// Replace a birthday
    Update(update::UpdateArgs),

    /// Delete a birthday
    Delete(delete::DeleteArgs),

    /// Create an account with --email and --password
    Register(register::RegisterArgs),
}
