//! Clear command implementation.

use anyhow::{Context, Result};
use clap::Args;

use mortydex_core::RecordStore;

use super::confirm;
use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: ClearArgs, config: &Config) -> Result<()> {
    if !args.force && !confirm("This will delete every locally created character. Continue?")? {
        eprintln!("Aborted.");
        return Ok(());
    }

    config
        .store()
        .clear()
        .context("Failed to clear local characters")?;

    output::success("Local characters cleared");

    Ok(())
}
