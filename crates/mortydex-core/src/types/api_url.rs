//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Base URL of the public character catalog.
pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api";

/// Base URL of a character catalog: HTTPS, or plain HTTP on a loopback host.
///
/// ```
/// use mortydex_core::ApiUrl;
///
/// let api = ApiUrl::new("https://rickandmortyapi.com/api/").unwrap();
/// assert_eq!(api.endpoint_url("character/"),
///            "https://rickandmortyapi.com/api/character/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Parse and check a catalog base URL.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let reject = |reason: &str| -> Error {
            InvalidInputError::ApiUrl {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let url = Url::parse(s).map_err(|e| reject(&e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(reject("must be an absolute URL"));
        }

        match (url.scheme(), url.host_str()) {
            (_, None) => Err(reject("must have a host")),
            ("https", Some(_)) => Ok(Self(url)),
            ("http", Some(host)) if is_loopback(host) => Ok(Self(url)),
            _ => Err(reject("must use HTTPS (HTTP allowed only for localhost)")),
        }
    }

    /// The public catalog at [`DEFAULT_API_URL`].
    pub fn public() -> Self {
        Self(Url::parse(DEFAULT_API_URL).expect("default API URL is valid"))
    }

    /// Join `path` onto the base with exactly one slash between them.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}

fn is_loopback(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "[::1]")
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self::public()
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ApiUrl {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ApiUrl> for String {
    fn from(api: ApiUrl) -> Self {
        api.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_catalog() {
        let api = ApiUrl::public();
        assert_eq!(api.host(), Some("rickandmortyapi.com"));
        assert_eq!(
            api.endpoint_url("character/"),
            "https://rickandmortyapi.com/api/character/"
        );
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(api.endpoint_url("character/7"), "http://127.0.0.1:8080/character/7");
    }

    #[test]
    fn trailing_slash_does_not_double() {
        let api = ApiUrl::new("https://example.org/api/").unwrap();
        assert_eq!(api.endpoint_url("/character/"), "https://example.org/api/character/");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://rickandmortyapi.com/api").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/character").is_err());
    }

    #[test]
    fn invalid_scheme() {
        assert!(ApiUrl::new("file:///tmp/characters").is_err());
    }

    #[test]
    fn serde_checks_the_url() {
        let api: ApiUrl = serde_json::from_str("\"https://example.org/api\"").unwrap();
        assert_eq!(serde_json::to_string(&api).unwrap(), "\"https://example.org/api\"");
        assert!(serde_json::from_str::<ApiUrl>("\"http://example.org\"").is_err());
    }
}
