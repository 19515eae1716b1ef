//! Character search filter.

use serde::{Deserialize, Serialize};

use super::Character;

/// Filter passed to both the remote catalog and the local store.
///
/// The remote catalog receives every non-empty field as a query parameter.
/// The local store only looks at `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl CharacterFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Query parameters for the remote catalog, with absent and empty
    /// values stripped.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", &self.name),
            ("status", &self.status),
            ("species", &self.species),
            ("type", &self.kind),
            ("gender", &self.gender),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }

    /// Local store match: case-insensitive substring on the name.
    pub fn matches(&self, character: &Character) -> bool {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => character
                .name
                .to_lowercase()
                .contains(&name.to_lowercase()),
            _ => true,
        }
    }
}
