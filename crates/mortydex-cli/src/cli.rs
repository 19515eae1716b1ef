//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mortydex_core::types::DEFAULT_API_URL;

use crate::commands::{
    clear::ClearArgs, create::CreateArgs, edit::EditArgs, list::ListArgs, remove::RemoveArgs,
    show::ShowArgs,
};

/// Browse Rick and Morty characters, with local create, edit and delete.
#[derive(Parser, Debug)]
#[command(name = "mortydex")]
#[command(author, version = env!("MORTYDEX_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Character catalog base URL
    #[arg(long, global = true, env = "MORTYDEX_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Directory holding locally created characters
    #[arg(long, global = true, env = "MORTYDEX_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List local and remote characters
    List(ListArgs),

    /// Show a single character
    Show(ShowArgs),

    /// Create a local character
    Create(CreateArgs),

    /// Edit a local character
    Edit(EditArgs),

    /// Remove a character from the local view
    Remove(RemoveArgs),

    /// Delete every locally created character
    Clear(ClearArgs),
}
