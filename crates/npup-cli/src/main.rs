use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

mod command_flows;
mod completion;
mod core_flows;
mod dispatch;
mod render;


#[derive(Parser, Debug)]
#[command(name = "npup")]
#[command(about = "npm distribution manager for Node.js install roots", long_about = None)]
struct Cli {
    /// Install root (defaults to NPUP_ROOT, then npup.toml, then the executable directory)
    #[arg(long)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download and install an npm release (the latest one when VERSION is omitted)
    Install {
        version: Option<String>,

        /// Release mirror to download from: github or taobao
        #[arg(long)]
        mirror: Option<String>,

        /// Skip the update confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Remove the installed npm distribution from the root
    Uninstall,
    /// Compare the latest released npm version against the local install
    Check,
    /// Print the resolved install root and layout paths
    Doctor,
    /// Print the npup version
    Version,
    /// Generate a shell completion script
    Completions { shell: Shell },
}

fn main() -> Result<()> {
    dispatch::run_cli(Cli::parse())
}
