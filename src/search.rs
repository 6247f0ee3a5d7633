use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};
use url::Url;

use crate::{
    config::{mask_key, Config},
    error::{Error, Result, ServerError},
    models::{ResultItem, SearchRequest, SearchResult},
};

/// Issues one GIF search per call. Holds no state between calls beyond the
/// reusable HTTP client.
pub struct SearchClient {
    client: Client,
    api_key: String,
    api_url: Url,
}

#[derive(Debug, Deserialize)]
struct GiphyResponse {
    /// Missing or `null` reads as no results.
    #[serde(default)]
    data: Option<Vec<Option<GiphyItem>>>,
}

#[derive(Debug, Deserialize)]
struct GiphyItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().build().map_err(client_build_error)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        })
    }

    pub fn request_url(&self, request: &SearchRequest) -> String {
        build_url(&self.api_url, &self.api_key, &request.query, request.limit)
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult> {
        info!("Searching for: {} with limit {}", request.query, request.limit);
        debug!(
            "GET {}",
            build_url(&self.api_url, &mask_key(&self.api_key), &request.query, request.limit)
        );

        let response = self
            .client
            .get(self.request_url(request))
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status();
        if !status.is_success() {
            debug!("GIPHY API error: {:?}", status);
            return Err(ServerError::from_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            )
            .into());
        }

        // Consumes the response; the connection is released here or on any
        // earlier return when `response` drops.
        let body = response.bytes().await.map_err(Error::Io)?;
        let items = decode_items(&body)?;
        debug!("Decoded {} entries for '{}'", items.len(), request.query);

        Ok(SearchResult::new(request.query.clone(), items))
    }
}

/// Building the client fails only on local setup (TLS backend, proxy
/// settings), before any request is attempted.
fn client_build_error(err: reqwest::Error) -> Error {
    Error::Config(format!("failed to initialize HTTP client: {}", err))
}

/// Appends the percent-encoded `api_key`, `q` and `limit` parameters to `base`.
pub fn build_url(base: &Url, api_key: &str, query: &str, limit: u32) -> String {
    let separator = if base.query().is_some() { '&' } else { '?' };

    format!(
        "{}{}api_key={}&q={}&limit={}",
        base,
        separator,
        urlencoding::encode(api_key),
        urlencoding::encode(query),
        limit
    )
}

/// Decodes a search response body. `null` entries in `data` are kept as
/// `None` so callers can tell where they sat in the array.
pub fn decode_items(body: &[u8]) -> Result<Vec<Option<ResultItem>>> {
    let response: GiphyResponse = serde_json::from_slice(body)?;

    let items: Vec<Option<ResultItem>> = response
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|entry| {
            entry.map(|item| ResultItem {
                title: item.title,
                url: item.url,
            })
        })
        .collect();

    let nulls = items.iter().filter(|item| item.is_none()).count();
    if nulls > 0 {
        debug!("Response contains {} null entries", nulls);
    }

    Ok(items)
}
