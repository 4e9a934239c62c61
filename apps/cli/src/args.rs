use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Synchronize resource files with Crowdin", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a source file to the project, updating it if it already exists
    Upload(FileArgs),
    /// Build the translation packages on the server
    Export(BranchArgs),
    /// Download every translation next to the resources of a source file
    Download(FileArgs),
    /// Upload, export and download in one go
    Sync(SyncArgs),
}

#[derive(Args)]
pub struct BranchArgs {
    /// Version branch; falls back to CROWDIN_BRANCH
    #[arg(short, long)]
    pub branch: Option<String>,
}

#[derive(Args)]
pub struct FileArgs {
    /// Source file, e.g. app/src/main/res/values/strings.xml
    pub file: PathBuf,

    #[command(flatten)]
    pub branch: BranchArgs,
}

#[derive(Args)]
pub struct SyncArgs {
    #[command(flatten)]
    pub target: FileArgs,

    /// Skip the server-side export
    #[arg(long)]
    pub no_export: bool,

    /// Skip downloading the translation archive
    #[arg(long)]
    pub no_download: bool,
}
