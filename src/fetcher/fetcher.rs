//! Core fetcher implementation with the scheme dispatch.
//!
//! # Examples
//!
//! ## Single Fetch
//!
//! ```rust,no_run
//! use filefetch::fetcher::FetcherBuilder;
//! use reqwest::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::hidden().build()?;
//! let url = Url::parse("https://deno.land/std@0.69.0/fs/mod.ts")?;
//! let metadata = fetcher.fetch(&url, "/tmp/mod.ts").await?;
//! assert!(metadata.is_remote());
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch Fetch
//!
//! ```rust,no_run
//! use filefetch::fetch::FetchTarget;
//! use filefetch::fetcher::FetcherBuilder;
//! use std::convert::TryFrom;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new().concurrent_fetches(4).build()?;
//! let targets = vec![
//!     FetchTarget::try_from(("https://example.com/a.ts", "a.ts"))?,
//!     FetchTarget::try_from(("file:///etc/hostname", "hostname"))?,
//! ];
//! for result in fetcher.fetch_all(&targets).await {
//!     match result {
//!         Ok(metadata) => println!("fetched {}", metadata.url()),
//!         Err(e) => println!("failed: {}", e),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use super::config::FetcherConfig;
use crate::error::Result;
use crate::fetch::{local, remote, BearerAuth, FetchTarget, Metadata, Scheme};
use crate::progress::{ProgressDisplay, StyleOptions};

use futures::stream::{self, StreamExt};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::convert::TryFrom;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Fetches `file:`, `http:` and `https:` URLs to local paths.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// # fn main() -> Result<(), filefetch::Error> {
/// use filefetch::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Fetcher {
    config: FetcherConfig,
    client: ClientWithMiddleware,
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    pub(crate) fn new(config: FetcherConfig, client: ClientWithMiddleware) -> Self {
        Self { config, client }
    }

    /// Gets the number of concurrent fetches in a batch.
    pub fn concurrent_fetches(&self) -> usize {
        self.config.concurrent_fetches
    }

    /// Gets the credential configuration.
    pub fn auth(&self) -> &BearerAuth {
        &self.config.auth
    }

    /// Gets the progress bar style options.
    pub fn style_options(&self) -> &StyleOptions {
        &self.config.style_options
    }

    /// Fetches `url` and writes it to `destination`.
    ///
    /// `file:` URLs are copied, `http:` and `https:` URLs are downloaded, and
    /// any other scheme fails with `unsupported protocol ("<url>")`. The
    /// destination is overwritten; its parent directory must exist.
    pub async fn fetch(&self, url: &Url, destination: impl AsRef<Path>) -> Result<Metadata> {
        let display = ProgressDisplay::hidden();
        self.fetch_with(url, destination.as_ref(), &display).await
    }

    /// Fetches every target, at most `concurrent_fetches` at a time.
    ///
    /// Returns one result per target, in the order of `targets`. A failed
    /// target does not stop the others.
    pub async fn fetch_all(&self, targets: &[FetchTarget]) -> Vec<Result<Metadata>> {
        let progress = ProgressDisplay::new(self.config.style_options.clone(), targets.len());
        let display = &progress;

        let results = stream::iter(targets)
            .map(|t| async move {
                let result = self.fetch_with(t.url(), t.destination(), display).await;
                display.increment_main();
                result
            })
            .buffered(self.config.concurrent_fetches)
            .collect::<Vec<_>>()
            .await;

        progress.finish();
        results
    }

    async fn fetch_with(
        &self,
        url: &Url,
        destination: &Path,
        display: &ProgressDisplay,
    ) -> Result<Metadata> {
        let scheme = Scheme::try_from(url)?;
        debug!("Fetching {} ({}) into {:?}", url, scheme, destination);

        match scheme {
            Scheme::File => local::copy_local(url, destination).await,
            Scheme::Http | Scheme::Https => {
                let pb = display.create_child_progress();
                let result = remote::download_remote(
                    &self.client,
                    &self.config.auth,
                    url,
                    destination,
                    &pb,
                )
                .await;
                display.finish_child(pb);
                result
            }
        }
    }
}
