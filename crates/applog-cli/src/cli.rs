use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "applog")]
#[command(about = "Append error and action records to daily JSON log files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory for error logs
    #[arg(long, global = true, value_name = "DIR", env = "LOGGER_FOLDER_PATH")]
    pub error_dir: Option<PathBuf>,

    /// Directory for create-action logs
    #[arg(long, global = true, value_name = "DIR", env = "CREATED_SUCCESS_FOLDER_PATH")]
    pub created_dir: Option<PathBuf>,

    /// Directory for update-action logs
    #[arg(long, global = true, value_name = "DIR", env = "UPDATED_SUCCESS_FOLDER_PATH")]
    pub updated_dir: Option<PathBuf>,

    /// Directory for delete-action logs
    #[arg(long, global = true, value_name = "DIR", env = "DELETED_SUCCESS_FOLDER_PATH")]
    pub deleted_dir: Option<PathBuf>,

    /// Disable ANSI colors on the console line
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an error
    Error(ErrorArgs),
    /// Record a successful creation
    Created(ActionArgs),
    /// Record a successful update
    Updated(ActionArgs),
    /// Record a successful deletion
    Deleted(ActionArgs),
    /// Print the records of one day's log file
    Show(ShowArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ErrorArgs {
    #[arg(long)]
    pub message: String,
    #[arg(long, default_value = "")]
    pub details: String,
}

#[derive(Args)]
pub struct ActionArgs {
    /// Name of the entity the action applied to
    #[arg(long)]
    pub entity: String,
    /// Entity attributes as a JSON value
    #[arg(long, default_value = "{}")]
    pub attributes: String,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(value_enum)]
    pub log: LogKind,
    /// Day to read, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogKind {
    Error,
    Create,
    Update,
    Delete,
}

impl Cli {
    /// Flag and environment values, keyed by environment variable name
    pub fn setting(&self, name: &str) -> Option<String> {
        let dir = match name {
            "LOGGER_FOLDER_PATH" => &self.error_dir,
            "CREATED_SUCCESS_FOLDER_PATH" => &self.created_dir,
            "UPDATED_SUCCESS_FOLDER_PATH" => &self.updated_dir,
            "DELETED_SUCCESS_FOLDER_PATH" => &self.deleted_dir,
            _ => return None,
        };
        dir.as_ref().map(|d| d.to_string_lossy().into_owned())
    }
}
