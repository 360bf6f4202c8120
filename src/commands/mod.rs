pub mod ai;
pub mod init;
pub mod task;
pub mod types;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage academic tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage custom task types")]
    Types(types::TypesArgs),
    #[command(about = "Ask the AI study assistant")]
    Ai(ai::AiArgs),
    #[command(about = "Run the reminder watcher")]
    Watch(watch::WatchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Types(args) => types::cmd(args),
            Commands::Ai(args) => ai::cmd(args).await,
            Commands::Watch(args) => watch::cmd(args).await,
        }
    }
}
