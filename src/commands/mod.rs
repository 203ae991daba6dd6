pub mod analytics;
pub mod checkoff;
pub mod create;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod sample;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create a new habit")]
    Create(create::CreateArgs),
    #[command(about = "Check off a habit for the current period")]
    Checkoff(checkoff::CheckoffArgs),
    #[command(about = "Delete a habit and its check-off history")]
    Delete(delete::DeleteArgs),
    #[command(about = "List habits")]
    List(list::ListArgs),
    #[command(about = "Quick status overview of all habits")]
    Status,
    #[command(about = "Streak analytics dashboard")]
    Analytics,
    #[command(about = "Populate the database with sample habits")]
    Sample,
    #[command(about = "Export habits and check-offs")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Create(args) => create::cmd(args),
            Commands::Checkoff(args) => checkoff::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Analytics => analytics::cmd(),
            Commands::Sample => sample::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Init(args) => init::cmd(args),
        }
    }
}
