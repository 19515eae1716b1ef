//! Seams between the list aggregator and its collaborators.

mod source;
mod store;

pub use source::CharacterSource;
pub use store::RecordStore;
