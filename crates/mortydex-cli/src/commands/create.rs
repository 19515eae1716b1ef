//! Create command implementation.

use anyhow::{Context, Result};
use clap::Args;

use mortydex_core::{Character, DetailEditor, Field};

use crate::config::Config;
use crate::output;

/// Editable character fields as command-line flags.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Character name
    #[arg(long)]
    pub name: Option<String>,

    /// Alive, Dead or unknown
    #[arg(long)]
    pub status: Option<String>,

    /// Species, e.g. Human
    #[arg(long)]
    pub species: Option<String>,

    /// Sub-species or variant
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Female, Male, Genderless or unknown
    #[arg(long)]
    pub gender: Option<String>,

    /// Origin place name
    #[arg(long)]
    pub origin: Option<String>,

    /// Last known location name
    #[arg(long)]
    pub location: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

impl FieldArgs {
    fn values(&self) -> [(Field, Option<&String>); 8] {
        [
            (Field::Name, self.name.as_ref()),
            (Field::Status, self.status.as_ref()),
            (Field::Species, self.species.as_ref()),
            (Field::Type, self.kind.as_ref()),
            (Field::Gender, self.gender.as_ref()),
            (Field::OriginName, self.origin.as_ref()),
            (Field::LocationName, self.location.as_ref()),
            (Field::Image, self.image.as_ref()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|(_, v)| v.is_none())
    }

    /// Set every given flag on the editor.
    pub fn apply(&self, editor: &mut DetailEditor) -> Result<()> {
        for (field, value) in self.values() {
            if let Some(value) = value {
                editor
                    .set(field, value.as_str())
                    .with_context(|| format!("Invalid {}", field))?;
            }
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,
}

pub async fn run(args: CreateArgs, config: &Config) -> Result<()> {
    let mut editor = DetailEditor::open(Character::draft(Character::next_local_id()));
    args.fields.apply(&mut editor)?;

    let outcome = editor.save().context("Character not saved")?;

    let list = config.list();
    let created = list
        .apply_create(outcome)
        .await
        .context("Failed to create character")?;

    if let Some(character) = created {
        output::field("ID", &character.id.to_string());
        output::field("Created", &character.created);
    }

    Ok(())
}
