//! Builder pattern implementation for creating Fetcher instances.
//!
//! # Examples
//!
//! ```rust
//! use filefetch::fetcher::FetcherBuilder;
//!
//! # fn example() -> Result<(), filefetch::Error> {
//! let fetcher = FetcherBuilder::new()
//!     .concurrent_fetches(8)
//!     .auth_host("api.github.com")
//!     .token_var("GITHUB_TOKEN")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::error::Result;
use crate::fetch::BearerAuth;
use crate::http::create_http_client;
use crate::progress::StyleOptions;

use reqwest::Proxy;

/// A builder used to create a [`Fetcher`].
///
/// ```rust
/// # fn main() -> Result<(), filefetch::Error> {
/// use filefetch::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().concurrent_fetches(4).build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = FetcherBuilder::default();
        builder.config.style_options = StyleOptions::hidden();
        builder
    }

    /// Route HTTP(S) requests through a proxy.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.http.proxy = Some(proxy);
        self
    }

    /// Set the host that receives the bearer token.
    ///
    /// Include the port when it is not the scheme's default.
    pub fn auth_host(mut self, host: &str) -> Self {
        self.config.auth = BearerAuth::new(host, self.config.auth.token_var());
        self
    }

    /// Set the environment variable the bearer token is read from.
    pub fn token_var(mut self, var: &str) -> Self {
        self.config.auth = BearerAuth::new(self.config.auth.host(), var);
        self
    }

    /// Set the number of concurrent fetches in a batch.
    ///
    /// Zero is treated as one.
    pub fn concurrent_fetches(mut self, concurrent_fetches: usize) -> Self {
        self.config.concurrent_fetches = concurrent_fetches.max(1);
        self
    }

    /// Set the progress bar style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Create the [`Fetcher`] with the specified options.
    ///
    /// Fails if the HTTP client cannot be built, for instance when the TLS
    /// backend cannot be initialized.
    pub fn build(self) -> Result<Fetcher> {
        let client = create_http_client(self.config.http.clone())?;
        Ok(Fetcher::new(self.config, client))
    }
}
