//! Catalog endpoint paths and wire types.

use serde::Deserialize;

use mortydex_core::Character;

/// Paged, filterable character collection.
pub(crate) const CHARACTERS: &str = "character/";

/// Path of a single character.
pub(crate) fn character_path(id: i64) -> String {
    format!("character/{}", id)
}

/// Path of several characters, fetched in one request.
pub(crate) fn characters_path(ids: &[i64]) -> String {
    let ids = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("character/{}", ids)
}

/// Error body, e.g. `{"error": "There is nothing here"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: Option<String>,
}

/// The multi-id endpoint answers a bare object when given one id.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    Many(Vec<Character>),
    One(Box<Character>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<Character> {
        match self {
            OneOrMany::Many(characters) => characters,
            OneOrMany::One(character) => vec![*character],
        }
    }
}
