// Search API HTTP client
//
// Wraps `reqwest::Client` with base-URL normalization, query encoding and
// status/body handling. One request per call: no retries, no caching.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::SearchResponse;
use crate::transport::TransportConfig;

const SEARCH_PATH: &str = "search.php";

/// HTTP client for the TheCocktailDB search endpoint.
pub struct CocktailClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CocktailClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `base_url` is the API root that `search.php` hangs off
    /// (e.g. `https://www.thecocktaildb.com/api/json/v1/1/`). A missing
    /// trailing slash is added so the last path segment survives joining.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url: normalize_base(base_url),
        }
    }

    /// The API root URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}search.php?s={name}` with `name` as a single query
    /// parameter.
    ///
    /// The query is `application/x-www-form-urlencoded`: reserved characters
    /// are percent-escaped and a space is written as `+`, which the API reads
    /// the same as `%20`.
    pub fn search_url(&self, name: &str) -> Result<Url, Error> {
        let mut url = self.base_url.join(SEARCH_PATH)?;
        url.query_pairs_mut().clear().append_pair("s", name);
        Ok(url)
    }

    /// Search drinks by name.
    ///
    /// Any non-success status is an error; the body is only decoded on 2xx.
    pub async fn search(&self, name: &str) -> Result<SearchResponse, Error> {
        let url = self.search_url(name)?;
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
