use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{GetCommand, InitCommand, InspectCommand};

/**
    NDI source descriptor tool.
*/
#[derive(Parser)]
#[command(name = "ndi-cli")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the resolved URL, readiness and all options of a descriptor.
    Inspect(InspectCommand),
    /// Read one option the way a media player would.
    Get(GetCommand),
    /// Write a descriptor with default preferences.
    Init(InitCommand),
}

impl Cli {
    pub fn init_logging(&self) {
        let default = if self.verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Inspect(cmd) => cmd.run(),
            Command::Get(cmd) => cmd.run(),
            Command::Init(cmd) => cmd.run(),
        }
    }
}
