//! HTTP client for the character catalog.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use mortydex_core::error::{Error, ProtocolError, TransportError};
use mortydex_core::{ApiUrl, Result};

use crate::endpoints::ApiErrorResponse;

fn map_reqwest(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        TransportError::Timeout.into()
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
        .into()
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
        .into()
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
        .into()
    }
}

/// HTTP client bound to one catalog base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl ApiClient {
    /// Create a new client for the given catalog.
    pub fn new(api: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("mortydex/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, api }
    }

    /// Returns the catalog URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// GET a path below the base URL with query parameters.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get<Q, R>(&self, path: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint_url(path);
        debug!(%url, "GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }

    /// Decode a success body, or turn the status into an error.
    ///
    /// 404 is reported as [`Error::NotFound`]; the catalog uses it for
    /// filters that match nothing as well as for unknown ids.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            return response.json::<R>().await.map_err(map_reqwest);
        }

        let message = match response.json::<ApiErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => None,
        };

        if status == StatusCode::NOT_FOUND {
            Err(Error::not_found(
                message.unwrap_or_else(|| "There is nothing here".to_string()),
            ))
        } else {
            Err(Error::Protocol(ProtocolError::new(status.as_u16(), message)))
        }
    }
}
