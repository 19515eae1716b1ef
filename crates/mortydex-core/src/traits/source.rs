//! Remote character catalog trait.

use async_trait::async_trait;

use crate::Result;
use crate::types::{Character, CharacterFilter, Page};

/// A read-only, paginated character catalog.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Query one page of characters.
    ///
    /// `page` of `None` means the first page. Fails with
    /// [`Error::NotFound`](crate::Error::NotFound) when the filter matches
    /// nothing, and with a transport or protocol error otherwise.
    async fn query(&self, filter: Option<&CharacterFilter>, page: Option<u32>) -> Result<Page>;

    /// Fetch a single character by id.
    async fn get(&self, id: i64) -> Result<Character>;

    /// Fetch several characters by id, in one request.
    async fn get_many(&self, ids: &[i64]) -> Result<Vec<Character>>;
}
