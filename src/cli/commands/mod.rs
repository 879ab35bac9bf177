mod install;
mod pm;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::packages::PackageManagerId;

#[derive(Parser)]
#[command(name = "npmx")]
#[command(about = "Copy-ready install commands for your package manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip confirmation prompts (non-interactive mode)
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the install command for a package
    Install {
        #[command(flatten)]
        target: PackageArgs,

        /// Version to pin (overrides a version given as package@version)
        #[arg(long)]
        version: Option<String>,
    },

    /// Print the command that runs a package without installing it
    Exec {
        #[command(flatten)]
        target: PackageArgs,
    },

    /// Manage the preferred package manager
    Pm {
        #[command(subcommand)]
        action: PmAction,
    },
}

#[derive(Args)]
pub struct PackageArgs {
    /// Package name, optionally with a version (e.g. vue@3.4.0)
    pub package: String,

    /// Package manager to use instead of the saved preference
    #[arg(long, value_enum)]
    pub pm: Option<PackageManagerId>,

    /// JSR metadata for the package, as a JSON file path or inline JSON
    #[arg(long, value_name = "PATH_OR_JSON")]
    pub jsr_info: Option<String>,

    /// Print one command part per line
    #[arg(long)]
    pub parts: bool,
}

#[derive(Subcommand)]
pub enum PmAction {
    /// Show the preferred package manager
    Get,
    /// Set the preferred package manager
    Set {
        #[arg(value_enum)]
        id: PackageManagerId,
    },
    /// Pick the preferred package manager interactively
    Select,
    /// List known package managers
    List,
    /// Forget the preference (falls back to npm)
    Reset,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Install { target, version } => {
                install::install(target, version.as_deref()).await
            }
            Commands::Exec { target } => install::exec(target).await,
            Commands::Pm { action } => match action {
                PmAction::Get => pm::get().await,
                PmAction::Set { id } => pm::set(*id).await,
                PmAction::Select => pm::select().await,
                PmAction::List => pm::list().await,
                PmAction::Reset => pm::reset(self.yes).await,
            },
        }
    }
}
