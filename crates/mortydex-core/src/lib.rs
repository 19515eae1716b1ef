//! mortydex-core - Core types, traits and list aggregation.
//!
//! Characters come from two places: a remote catalog reached through a
//! [`CharacterSource`], and user-authored entries kept by a [`RecordStore`].
//! [`CharacterList`] merges both into one paginated view, and
//! [`DetailEditor`] runs a single create/edit/delete session whose
//! [`DetailOutcome`] is fed back into the list.

pub mod editor;
pub mod error;
pub mod list;
pub mod memory;
pub mod notice;
pub mod traits;
pub mod types;

pub use editor::{DetailEditor, DetailOutcome, Field};
pub use error::Error;
pub use list::{CharacterList, Cursor, ListState};
pub use memory::MemoryStore;
pub use notice::{Notice, Notifier, NullNotifier, RecordingNotifier};
pub use traits::{CharacterSource, RecordStore};
pub use types::{ApiUrl, Character, CharacterFilter, Gender, Page, PageInfo, Place, Status};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
