//! mortydex-http - Character source backed by the REST catalog.

mod client;
mod endpoints;
mod source;

pub use client::ApiClient;
pub use source::HttpSource;
