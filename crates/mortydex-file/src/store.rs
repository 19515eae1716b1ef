//! Filesystem storage for locally authored characters.
//!
//! All characters live in one named slot: a JSON array in `<root>/<slot>.json`.
//! Every mutation is a read-modify-write of the whole array under an
//! exclusive lock on `<root>/<slot>.lock`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use fs2::FileExt;
use tracing::{debug, instrument};

use mortydex_core::Result;
use mortydex_core::error::{Error, StorageError};
use mortydex_core::traits::RecordStore;
use mortydex_core::types::{Character, CharacterFilter};

/// Slot name used when none is given.
pub const DEFAULT_SLOT: &str = "custom_characters";

/// File-backed [`RecordStore`].
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    slot: String,
}

impl FileStore {
    /// Create a store in `root` using [`DEFAULT_SLOT`].
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_slot(root, DEFAULT_SLOT)
    }

    /// Create a store in `root` using a named slot.
    pub fn with_slot(root: impl AsRef<Path>, slot: impl Into<String>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            slot: slot.into(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the JSON slot.
    pub fn slot_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.slot))
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join(format!("{}.lock", self.slot))
    }

    fn map_io(&self, err: std::io::Error) -> Error {
        StorageError::Io {
            slot: self.slot.clone(),
            message: err.to_string(),
        }
        .into()
    }

    fn corrupt(&self, err: serde_json::Error) -> Error {
        StorageError::Corrupt {
            slot: self.slot.clone(),
            message: err.to_string(),
        }
        .into()
    }

    /// Take the exclusive slot lock. Released when the file is dropped.
    fn lock(&self) -> Result<File> {
        fs::create_dir_all(&self.root).map_err(|e| self.map_io(e))?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(|e| self.map_io(e))?;

        lock_file.lock_exclusive().map_err(|e| self.map_io(e))?;
        Ok(lock_file)
    }

    /// Read the slot. An absent slot is an empty list.
    fn read_all(&self) -> Result<Vec<Character>> {
        let path = self.slot_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| self.map_io(e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| self.corrupt(e))
    }

    /// Replace the slot contents atomically.
    fn write_all(&self, characters: &[Character]) -> Result<()> {
        let path = self.slot_path();
        let content = serde_json::to_string_pretty(characters).map_err(|e| self.corrupt(e))?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(|e| self.map_io(e))?;
        fs::rename(&temp_path, &path).map_err(|e| self.map_io(e))?;

        Ok(())
    }

    /// Read-modify-write under the slot lock. The slot is only rewritten
    /// when `f` reports a change.
    fn modify(&self, f: impl FnOnce(&mut Vec<Character>) -> bool) -> Result<bool> {
        let lock_file = self.lock()?;
        let mut characters = self.read_all()?;
        let changed = f(&mut characters);
        if changed {
            self.write_all(&characters)?;
        }
        lock_file.unlock().map_err(|e| self.map_io(e))?;
        Ok(changed)
    }
}

impl RecordStore for FileStore {
    #[instrument(skip(self, character), fields(id = character.id))]
    fn insert(&self, mut character: Character) -> Result<Character> {
        character.created = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let stored = character.clone();
        self.modify(|characters| {
            characters.push(character);
            true
        })?;

        debug!(slot = %self.slot, "Stored character");
        Ok(stored)
    }

    fn find_all(&self, filter: Option<&CharacterFilter>) -> Result<Vec<Character>> {
        let mut characters = self.read_all()?;
        if let Some(filter) = filter {
            characters.retain(|c| filter.matches(c));
        }
        Ok(characters)
    }

    #[instrument(skip(self, character), fields(id = character.id))]
    fn update_by_id(&self, character: &Character) -> Result<()> {
        let updated = self.modify(|characters| {
            match characters.iter_mut().find(|c| c.id == character.id) {
                Some(slot) => {
                    *slot = character.clone();
                    true
                }
                None => false,
            }
        })?;

        debug!(updated, "Updated character");
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_by_id(&self, id: i64) -> Result<()> {
        let removed = self.modify(|characters| {
            let before = characters.len();
            characters.retain(|c| c.id != id);
            characters.len() != before
        })?;

        debug!(removed, "Deleted character");
        Ok(())
    }

    #[instrument(skip(self))]
    fn clear(&self) -> Result<()> {
        let lock_file = self.lock()?;
        let path = self.slot_path();

        if path.exists() {
            fs::remove_file(&path).map_err(|e| self.map_io(e))?;
            debug!(slot = %self.slot, "Cleared slot");
        }

        lock_file.unlock().map_err(|e| self.map_io(e))?;
        Ok(())
    }
}
