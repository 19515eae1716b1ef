//! mortydex-file - Local character store persisted as a JSON file.

mod store;

pub use store::{DEFAULT_SLOT, FileStore};
