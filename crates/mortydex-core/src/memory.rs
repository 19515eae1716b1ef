//! In-memory record store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::Result;
use crate::traits::RecordStore;
use crate::types::{Character, CharacterFilter};

/// A [`RecordStore`] that keeps characters in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    characters: RwLock<Vec<Character>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with characters, kept as given.
    pub fn with_characters(characters: Vec<Character>) -> Self {
        Self {
            characters: RwLock::new(characters),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Character>> {
        self.characters.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Character>> {
        self.characters.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl RecordStore for MemoryStore {
    fn insert(&self, mut character: Character) -> Result<Character> {
        character.created = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        debug!(id = character.id, "Stored character in memory");
        self.write().push(character.clone());
        Ok(character)
    }

    fn find_all(&self, filter: Option<&CharacterFilter>) -> Result<Vec<Character>> {
        Ok(self
            .read()
            .iter()
            .filter(|c| filter.is_none_or(|f| f.matches(c)))
            .cloned()
            .collect())
    }

    fn update_by_id(&self, character: &Character) -> Result<()> {
        let mut characters = self.write();
        if let Some(slot) = characters.iter_mut().find(|c| c.id == character.id) {
            *slot = character.clone();
        }
        Ok(())
    }

    fn delete_by_id(&self, id: i64) -> Result<()> {
        self.write().retain(|c| c.id != id);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.write().clear();
        Ok(())
    }
}
