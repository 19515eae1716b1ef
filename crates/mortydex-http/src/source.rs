//! HTTP-backed character source.

use async_trait::async_trait;
use tracing::{debug, instrument};

use mortydex_core::traits::CharacterSource;
use mortydex_core::{ApiUrl, Character, CharacterFilter, Page, Result};

use crate::client::ApiClient;
use crate::endpoints::{CHARACTERS, OneOrMany, character_path, characters_path};

/// The REST character catalog.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: ApiClient,
}

impl HttpSource {
    /// Create a source for the catalog at `api`.
    pub fn new(api: ApiUrl) -> Self {
        Self {
            client: ApiClient::new(api),
        }
    }

    /// The public catalog.
    pub fn public() -> Self {
        Self::new(ApiUrl::public())
    }

    pub fn api(&self) -> &ApiUrl {
        self.client.api()
    }
}

/// Query parameters: non-empty filter fields, then the page if given.
fn query_params(filter: Option<&CharacterFilter>, page: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = filter
        .map(|f| {
            f.query_pairs()
                .into_iter()
                .map(|(k, v)| (k, v.to_string()))
                .collect()
        })
        .unwrap_or_default();
    if let Some(page) = page {
        params.push(("page", page.to_string()));
    }
    params
}

#[async_trait]
impl CharacterSource for HttpSource {
    #[instrument(skip(self))]
    async fn query(&self, filter: Option<&CharacterFilter>, page: Option<u32>) -> Result<Page> {
        let params = query_params(filter, page);
        let result: Page = self.client.get(CHARACTERS, &params).await?;
        debug!(
            count = result.info.count,
            pages = result.info.pages,
            results = result.results.len(),
            "Fetched character page"
        );
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i64) -> Result<Character> {
        self.client.get(&character_path(id), &[] as &[(&str, &str)]).await
    }

    #[instrument(skip(self))]
    async fn get_many(&self, ids: &[i64]) -> Result<Vec<Character>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let found: OneOrMany = self
            .client
            .get(&characters_path(ids), &[] as &[(&str, &str)])
            .await?;
        Ok(found.into_vec())
    }
}
