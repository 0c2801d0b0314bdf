use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "delta",
    about = "Delta — edit scripts between two snapshots of an ordered collection",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the records that turn FROM into TO
    Diff(DiffArgs),
    /// Replay the records onto FROM and check the result equals TO
    Verify(DiffArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct DiffArgs {
    /// JSON snapshot of the old collection
    pub from: PathBuf,
    /// JSON snapshot of the new collection
    pub to: PathBuf,
    /// Treat snapshots as lists of sections holding items
    #[arg(long)]
    pub sections: bool,
    /// Never collapse an emptied or filled list into a reload
    #[arg(long)]
    pub no_reload: bool,
    /// Also reload matched sections whose content changed
    #[arg(long)]
    pub section_changes: bool,
    /// Field holding each object's identifier
    #[arg(long)]
    pub id_field: Option<String>,
    /// Field holding each section's items
    #[arg(long)]
    pub items_field: Option<String>,
}
