//! Configuration structures and defaults for the fetcher.

use crate::fetch::BearerAuth;
use crate::http::HttpClientConfig;
use crate::progress::StyleOptions;

/// Configuration structure for the fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// HTTP client options.
    pub http: HttpClientConfig,
    /// The credential sent to the API host.
    pub auth: BearerAuth,
    /// Number of maximum concurrent fetches in a batch.
    pub concurrent_fetches: usize,
    /// Progress bar style options for batches.
    pub style_options: StyleOptions,
}

impl FetcherConfig {
    pub const DEFAULT_CONCURRENT_FETCHES: usize = 32;
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            http: HttpClientConfig::default(),
            auth: BearerAuth::default(),
            concurrent_fetches: Self::DEFAULT_CONCURRENT_FETCHES,
            style_options: StyleOptions::default(),
        }
    }
}
