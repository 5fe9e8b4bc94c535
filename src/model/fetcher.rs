use crate::error::{Error, Result};
use crate::model::ModelCache;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Public static host serving the Base64-encoded model files, one per
/// league code.
pub const DEFAULT_BASE_URL: &str =
    "https://gist.githubusercontent.com/gimel-apps/021ae619f96b26b38c3539097f485122/raw";

/// Fetches league model blobs over HTTP and memoizes the decoded bytes
/// per league code.
///
/// The cache lives inside the fetcher instance, so tests can construct
/// isolated fetchers and assert on cache contents directly. Two concurrent
/// calls for the same uncached code both hit the network and both write the
/// cache (last write wins); callers needing single-flight semantics must
/// add their own deduplication layer.
pub struct ModelFetcher {
    client: reqwest::Client,
    base_url: String,
    cache: RwLock<ModelCache>,
}

impl ModelFetcher {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Builds a fetcher against a non-default host, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            cache: RwLock::new(ModelCache::new()),
        }
    }

    /// Returns the decoded model bytes for `league_code`, fetching and
    /// decoding on first use.
    ///
    /// The league code is not validated against a known set; an unknown
    /// code simply yields a non-success status from the host. On any
    /// failure the cache is left unchanged, so a later call retries from
    /// scratch.
    pub async fn get(&self, league_code: &str) -> Result<Arc<[u8]>> {
        if let Some(bytes) = self.cache.read().await.get(league_code) {
            tracing::debug!("Returning cached model for {}", league_code);
            return Ok(bytes);
        }

        let url = model_url(&self.base_url, league_code);
        tracing::info!("Fetching model for {} from {}", league_code, url);

        let response = self.client.get(&url).send().await.map_err(|e| Error::Request {
            league_code: league_code.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                league_code: league_code.to_string(),
                status,
            });
        }

        let base64_text = response.text().await.map_err(|e| Error::Request {
            league_code: league_code.to_string(),
            source: e,
        })?;

        // The static host may append a trailing newline to the raw file.
        let bytes = STANDARD
            .decode(base64_text.trim())
            .map_err(|e| Error::Decode {
                league_code: league_code.to_string(),
                source: e,
            })?;

        tracing::info!("Decoded {} byte model for {}", bytes.len(), league_code);

        let bytes: Arc<[u8]> = bytes.into();
        self.cache
            .write()
            .await
            .insert(league_code.to_string(), bytes.clone());

        Ok(bytes)
    }

    /// Whether a decoded model is already held for `league_code`.
    pub async fn is_cached(&self, league_code: &str) -> bool {
        self.cache.read().await.contains(league_code)
    }

    /// Number of league codes currently cached.
    pub async fn cached_count(&self) -> usize {
        self.cache.read().await.len()
    }
}

impl Default for ModelFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn model_url(base_url: &str, league_code: &str) -> String {
    format!("{}/model_{}.txt", base_url, league_code)
}
