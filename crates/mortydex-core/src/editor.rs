//! Single-character detail editor.
//!
//! A [`DetailEditor`] holds one editing session. The session ends with
//! exactly one [`DetailOutcome`]: dismissed, saved with a validated edit, or
//! removed after a second confirmation step. Characters from the remote
//! catalog are locked: their fields cannot change, they can only be removed.

use std::fmt;

use tracing::debug;

use crate::error::ValidationError;
use crate::types::Character;

/// Editable character fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Status,
    Species,
    Type,
    Gender,
    OriginName,
    LocationName,
    Image,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Status,
        Field::Species,
        Field::Type,
        Field::Gender,
        Field::OriginName,
        Field::LocationName,
        Field::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Status => "status",
            Field::Species => "species",
            Field::Type => "type",
            Field::Gender => "gender",
            Field::OriginName => "origin",
            Field::LocationName => "location",
            Field::Image => "image",
        }
    }

    fn value_of(self, character: &Character) -> &str {
        match self {
            Field::Name => &character.name,
            Field::Status => character.status.as_str(),
            Field::Species => &character.species,
            Field::Type => &character.kind,
            Field::Gender => character.gender.as_str(),
            Field::OriginName => &character.origin.name,
            Field::LocationName => &character.location.name,
            Field::Image => &character.image,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an editing session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    /// Closed without saving.
    Dismissed,
    /// Saved a validated edit.
    Saved(Character),
    /// Removal confirmed.
    Removed(Character),
}

impl DetailOutcome {
    /// Whether the session ended in a removal.
    pub fn remove(&self) -> bool {
        matches!(self, DetailOutcome::Removed(_))
    }

    /// The character carried by the outcome, if any.
    pub fn edited_character(&self) -> Option<&Character> {
        match self {
            DetailOutcome::Dismissed => None,
            DetailOutcome::Saved(c) | DetailOutcome::Removed(c) => Some(c),
        }
    }
}

/// One editing session over a single character.
#[derive(Debug, Clone)]
pub struct DetailEditor {
    draft: Character,
    locked: bool,
    confirming_removal: bool,
}

impl DetailEditor {
    pub fn open(character: Character) -> Self {
        let locked = character.is_remote_sourced();
        Self {
            draft: character,
            locked,
            confirming_removal: false,
        }
    }

    /// Remote-sourced characters are read-only apart from removal.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_confirming_removal(&self) -> bool {
        self.confirming_removal
    }

    pub fn character(&self) -> &Character {
        &self.draft
    }

    /// Set one field from its textual form. Status and gender must parse.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> crate::Result<()> {
        if self.locked {
            return Err(ValidationError::Locked { id: self.draft.id }.into());
        }
        let value = value.into();
        let draft = &mut self.draft;
        match field {
            Field::Name => draft.name = value,
            Field::Species => draft.species = value,
            Field::Type => draft.kind = value,
            Field::OriginName => draft.origin.name = value,
            Field::LocationName => draft.location.name = value,
            Field::Image => draft.image = value,
            Field::Status => draft.status = value.parse()?,
            Field::Gender => draft.gender = value.parse()?,
        }
        Ok(())
    }

    /// Fields that are currently empty.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.value_of(&self.draft).is_empty())
            .collect()
    }

    /// Save the edit. The session stays open when validation fails.
    pub fn save(&self) -> Result<DetailOutcome, ValidationError> {
        if self.confirming_removal {
            return Err(ValidationError::ConfirmationPending);
        }
        if self.locked {
            return Err(ValidationError::Locked { id: self.draft.id });
        }
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        debug!(id = self.draft.id, "Saving character edit");
        Ok(DetailOutcome::Saved(self.draft.clone()))
    }

    /// Close without saving.
    pub fn dismiss(&self) -> Result<DetailOutcome, ValidationError> {
        if self.confirming_removal {
            return Err(ValidationError::ConfirmationPending);
        }
        Ok(DetailOutcome::Dismissed)
    }

    /// Ask for removal. Nothing is removed until [`confirm_removal`] answers
    /// yes.
    ///
    /// [`confirm_removal`]: DetailEditor::confirm_removal
    pub fn request_removal(&mut self) {
        self.confirming_removal = true;
    }

    /// Answer the removal prompt. `false` returns to the editor with no
    /// outcome.
    pub fn confirm_removal(
        &mut self,
        confirmed: bool,
    ) -> Result<Option<DetailOutcome>, ValidationError> {
        if !self.confirming_removal {
            return Err(ValidationError::NoPendingConfirmation);
        }
        self.confirming_removal = false;
        if confirmed {
            debug!(id = self.draft.id, "Removal confirmed");
            Ok(Some(DetailOutcome::Removed(self.draft.clone())))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::types::{Gender, Status};

    fn complete_draft() -> DetailEditor {
        let mut editor = DetailEditor::open(Character::draft(1_700_000_000_000));
        editor.set(Field::Name, "Zeta").unwrap();
        editor.set(Field::Status, "Alive").unwrap();
        editor.set(Field::Species, "Alien").unwrap();
        editor.set(Field::Type, "Shapeshifter").unwrap();
        editor.set(Field::Gender, "Female").unwrap();
        editor.set(Field::OriginName, "Zeta Reticuli").unwrap();
        editor.set(Field::LocationName, "Earth").unwrap();
        editor.set(Field::Image, "https://example.org/zeta.png").unwrap();
        editor
    }

    fn remote_character() -> Character {
        let mut rick = Character::draft(1);
        rick.name = "Rick Sanchez".to_string();
        rick.episode = vec!["https://rickandmortyapi.com/api/episode/1".to_string()];
        rick
    }

    #[test]
    fn save_returns_edited_character() {
        let editor = complete_draft();
        let outcome = editor.save().unwrap();

        assert!(!outcome.remove());
        let saved = outcome.edited_character().unwrap();
        assert_eq!(saved.name, "Zeta");
        assert_eq!(saved.status, Status::Alive);
        assert_eq!(saved.gender, Gender::Female);
        assert_eq!(saved.kind, "Shapeshifter");
    }

    #[test]
    fn save_rejects_empty_fields() {
        let mut editor = complete_draft();
        editor.set(Field::Species, "").unwrap();
        editor.set(Field::Image, "").unwrap();

        assert_eq!(
            editor.save(),
            Err(ValidationError::MissingFields(vec![Field::Species, Field::Image]))
        );
        // still open and editable
        editor.set(Field::Species, "Alien").unwrap();
        editor.set(Field::Image, "zeta.png").unwrap();
        assert!(editor.save().is_ok());
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        let mut editor = complete_draft();
        editor.set(Field::Type, " ").unwrap();

        assert!(editor.missing_fields().is_empty());
        assert_eq!(editor.save().unwrap().edited_character().unwrap().kind, " ");
    }

    #[test]
    fn blank_draft_misses_free_text_fields() {
        let editor = DetailEditor::open(Character::draft(5));
        assert_eq!(
            editor.missing_fields(),
            vec![
                Field::Name,
                Field::Species,
                Field::Type,
                Field::OriginName,
                Field::LocationName,
                Field::Image,
            ]
        );
    }

    #[test]
    fn invalid_status_is_rejected() {
        let mut editor = complete_draft();
        let err = editor.set(Field::Status, "Undead").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(editor.character().status, Status::Alive);
    }

    #[test]
    fn remote_character_is_locked() {
        let mut editor = DetailEditor::open(remote_character());
        assert!(editor.is_locked());

        let err = editor.set(Field::Name, "Evil Rick").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::Locked { id: 1 })
        ));
        assert_eq!(editor.save(), Err(ValidationError::Locked { id: 1 }));
        assert_eq!(editor.dismiss(), Ok(DetailOutcome::Dismissed));
    }

    #[test]
    fn locked_character_can_still_be_removed() {
        let mut editor = DetailEditor::open(remote_character());
        editor.request_removal();
        let outcome = editor.confirm_removal(true).unwrap().unwrap();

        assert!(outcome.remove());
        assert_eq!(outcome.edited_character().unwrap().id, 1);
    }

    #[test]
    fn no_outcome_while_confirmation_pending() {
        let mut editor = complete_draft();
        editor.request_removal();

        assert!(editor.is_confirming_removal());
        assert_eq!(editor.save(), Err(ValidationError::ConfirmationPending));
        assert_eq!(editor.dismiss(), Err(ValidationError::ConfirmationPending));
    }

    #[test]
    fn declined_removal_returns_to_editor() {
        let mut editor = complete_draft();
        editor.request_removal();

        assert_eq!(editor.confirm_removal(false), Ok(None));
        assert!(!editor.is_confirming_removal());
        assert!(matches!(editor.save(), Ok(DetailOutcome::Saved(_))));
    }

    #[test]
    fn confirm_without_request_is_rejected() {
        let mut editor = complete_draft();
        assert_eq!(
            editor.confirm_removal(true),
            Err(ValidationError::NoPendingConfirmation)
        );
    }

    #[test]
    fn dismissed_carries_nothing() {
        let outcome = complete_draft().dismiss().unwrap();
        assert!(!outcome.remove());
        assert!(outcome.edited_character().is_none());
    }
}
