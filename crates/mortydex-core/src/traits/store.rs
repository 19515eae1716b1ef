//! Local record store trait.

use crate::Result;
use crate::types::{Character, CharacterFilter};

/// Durable store for user-authored characters.
///
/// The store is the only writer of local records. Lookups by id that find
/// nothing are not errors: updates and deletes of absent ids do nothing.
pub trait RecordStore: Send + Sync {
    /// Append a character, stamping its `created` time. Returns the stored
    /// value.
    fn insert(&self, character: Character) -> Result<Character>;

    /// All stored characters matching the filter's name, in insertion order.
    fn find_all(&self, filter: Option<&CharacterFilter>) -> Result<Vec<Character>>;

    /// Replace the stored character with the same id.
    fn update_by_id(&self, character: &Character) -> Result<()>;

    /// Remove the stored character with the given id.
    fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Remove every stored character.
    fn clear(&self) -> Result<()>;
}
