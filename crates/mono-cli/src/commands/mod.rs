mod add;
mod init;
mod publish;
mod run;
mod status;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use mono_core::{BumpType, ChangeType, PrereleaseTrack};
use mono_project::Language;
use tracing::debug;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Write a mono.yml and create changeset directories
    Init(InitArgs),
    /// Manage changeset files
    #[command(subcommand)]
    Changeset(ChangesetCommand),
    /// Show pending changesets and the versions they would release
    Status(StatusArgs),
    /// Release every package with pending changesets
    Publish(PublishArgs),
    /// Run a shell command in every package, dependencies first
    Run(RunArgs),
    /// Run the test command in every package, dependencies first
    Test,
}

#[derive(Subcommand)]
pub(crate) enum ChangesetCommand {
    /// Add a new changeset
    Add(AddArgs),
}

#[derive(Args)]
pub(crate) struct InitArgs {
    #[arg(long, value_enum)]
    pub language: Language,

    /// Directory holding one package per subdirectory; makes this a monorepo
    #[arg(long)]
    pub packages_dir: Option<PathBuf>,

    /// Repository URL used for commit links in changelogs
    #[arg(long)]
    pub repo: Option<String>,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    /// Target package (required in a monorepo)
    #[arg(long, short)]
    pub package: Option<String>,

    #[arg(long, short, value_enum)]
    pub bump: BumpType,

    #[arg(long = "type", short = 't', value_enum)]
    pub change_type: ChangeType,

    #[arg(long, short)]
    pub message: String,
}

#[derive(Args)]
pub(crate) struct StatusArgs {
    /// Project versions onto a prerelease track
    #[arg(long, value_enum)]
    pub prerelease: Option<PrereleaseTrack>,
}

#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Only release these packages (and their dependents)
    #[arg(long = "package", short)]
    pub packages: Vec<String>,

    #[arg(long, value_enum)]
    pub prerelease: Option<PrereleaseTrack>,

    /// Show the release plan without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Commit and tag, but do not push
    #[arg(long)]
    pub no_push: bool,
}

#[derive(Args)]
pub(crate) struct RunArgs {
    /// Command and arguments, joined with spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path) -> Result<()> {
        debug!(start = %start_path.display(), "resolving project");
        match self {
            Self::Init(args) => init::run(args, start_path),
            Self::Changeset(ChangesetCommand::Add(args)) => add::run(args, start_path),
            Self::Status(args) => status::run(&args, start_path),
            Self::Publish(args) => publish::run(args, start_path),
            Self::Run(args) => run::run(&args, start_path),
            Self::Test => run::test(start_path),
        }
    }
}
