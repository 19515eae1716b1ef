//! Paged catalog response.

use serde::{Deserialize, Serialize};

use super::Character;

/// Pagination metadata of a catalog page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of matching characters in the catalog.
    pub count: u64,
    /// Total number of pages in the catalog.
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of catalog results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub info: PageInfo,
    pub results: Vec<Character>,
}
