//! Edit command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use mortydex_core::{CharacterFilter, DetailEditor};

use super::create::FieldArgs;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Character id
    pub id: i64,

    /// Name filter used to find the character in the list
    #[arg(long)]
    pub filter: Option<String>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

pub async fn run(args: EditArgs, config: &Config) -> Result<()> {
    if args.fields.is_empty() {
        bail!("Nothing to change. Pass at least one field, e.g. --name.");
    }

    let list = config.list();
    list.search(args.filter.clone().map(CharacterFilter::by_name))
        .await
        .context("Failed to fetch characters")?;

    let character = list
        .state()
        .find(args.id)
        .cloned()
        .with_context(|| format!("Character {} is not in the list", args.id))?;

    let mut editor = DetailEditor::open(character);
    if editor.is_locked() {
        bail!(
            "Character {} comes from the remote catalog and cannot be edited; it can only be removed",
            args.id
        );
    }

    args.fields.apply(&mut editor)?;
    let outcome = editor.save().context("Character not saved")?;

    list.apply_outcome(outcome)
        .await
        .context("Failed to update character")?;

    Ok(())
}
