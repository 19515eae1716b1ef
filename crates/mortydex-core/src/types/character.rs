//! Character record.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// Life status of a character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Alive,
    Dead,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alive" => Ok(Status::Alive),
            "dead" => Ok(Status::Dead),
            "unknown" => Ok(Status::Unknown),
            _ => Err(InvalidInputError::Status {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

/// Gender of a character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Genderless,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Genderless => "Genderless",
            Gender::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            "genderless" => Ok(Gender::Genderless),
            "unknown" => Ok(Gender::Unknown),
            _ => Err(InvalidInputError::Gender {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

/// A named place with an external reference.
///
/// The `url` is carried along but never dereferenced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub url: String,
}

impl Place {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

/// One catalog entry, either fetched from the remote catalog or authored
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub species: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub origin: Place,
    #[serde(default)]
    pub location: Place,
    #[serde(default)]
    pub image: String,
    /// Episode references. Non-empty means the character came from the
    /// remote catalog.
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    /// ISO 8601 creation time.
    #[serde(default)]
    pub created: String,
}

impl Character {
    /// A blank character for the create flow.
    pub fn draft(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
            status: Status::Unknown,
            species: String::new(),
            kind: String::new(),
            gender: Gender::Unknown,
            origin: Place::default(),
            location: Place::default(),
            image: String::new(),
            episode: Vec::new(),
            url: String::new(),
            created: String::new(),
        }
    }

    /// Id for a locally created character: the current time in milliseconds.
    ///
    /// Remote ids are small sequential integers, so collisions do not happen
    /// in practice, but uniqueness is not guaranteed.
    pub fn next_local_id() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Returns true if the character originates from the remote catalog.
    pub fn is_remote_sourced(&self) -> bool {
        !self.episode.is_empty()
    }
}
