pub mod check;
pub mod init;
pub mod launch;
pub mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Check for a new build, install it, and launch the client")]
    Run,
    #[command(about = "Settings initialization")]
    Init(init::InitArgs),
    #[command(about = "Report whether a newer build is available")]
    Check,
    #[command(about = "Launch the installed client without updating")]
    Launch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        // Bare invocation behaves like `run`: this is a launcher first.
        match cli.command.unwrap_or(Commands::Run) {
            Commands::Run => run::cmd().await,
            Commands::Init(args) => init::cmd(args),
            Commands::Check => check::cmd().await,
            Commands::Launch => launch::cmd(),
        }
    }
}
