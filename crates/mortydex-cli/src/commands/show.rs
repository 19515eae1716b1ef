//! Show command implementation.

use anyhow::{Context, Result};
use clap::Args;

use mortydex_core::{CharacterSource, RecordStore};

use crate::config::Config;
use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Character id
    pub id: i64,

    /// Print the character as pretty-printed JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ShowArgs, config: &Config) -> Result<()> {
    let local = config
        .store()
        .find_all(None)
        .context("Failed to read local characters")?
        .into_iter()
        .find(|c| c.id == args.id);

    let character = match local {
        Some(character) => character,
        None => config
            .source()
            .get(args.id)
            .await
            .with_context(|| format!("Character {} not found", args.id))?,
    };

    if args.json {
        output::json_pretty(&character)?;
    } else {
        output::character_detail(&character);
    }

    Ok(())
}
