//! Remove command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::debug;

use mortydex_core::{CharacterFilter, DetailEditor};

use super::confirm;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Character id
    pub id: i64,

    /// Name filter used to find the character in the list
    #[arg(long)]
    pub filter: Option<String>,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: RemoveArgs, config: &Config) -> Result<()> {
    let list = config.list();
    list.search(args.filter.clone().map(CharacterFilter::by_name))
        .await
        .context("Failed to fetch characters")?;

    let character = list
        .state()
        .find(args.id)
        .cloned()
        .with_context(|| format!("Character {} is not in the list", args.id))?;

    let remote = character.is_remote_sourced();
    let question = format!("Remove character {} ({})?", character.id, character.name);

    let mut editor = DetailEditor::open(character);
    editor.request_removal();

    let confirmed = args.force || confirm(&question)?;
    match editor.confirm_removal(confirmed)? {
        Some(outcome) => {
            list.apply_outcome(outcome)
                .await
                .context("Failed to remove character")?;
            if remote {
                debug!(id = args.id, "Removed character belongs to the remote catalog");
                eprintln!(
                    "{}",
                    "This character comes from the remote catalog and will show up again in later searches."
                        .dimmed()
                );
            }
        }
        None => {
            debug!(id = args.id, "Removal declined");
            eprintln!("Aborted.");
        }
    }

    Ok(())
}
