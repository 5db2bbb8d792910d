//! Fetcher module containing the configured [`Fetcher`], its builder and
//! configuration.
//!
//! - `fetcher` - the [`Fetcher`] with the scheme dispatch and batch fetching
//! - `builder` - [`FetcherBuilder`] for configuring a fetcher
//! - `config` - [`FetcherConfig`] and its defaults
//!
//! # Examples
//!
//! ```rust,no_run
//! use filefetch::fetcher::FetcherBuilder;
//! use reqwest::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::hidden().build()?;
//! let url = Url::parse("file:///etc/hosts")?;
//! let metadata = fetcher.fetch(&url, "/tmp/hosts").await?;
//! assert!(metadata.headers().is_none());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;

pub use builder::FetcherBuilder;
pub use config::FetcherConfig;
pub use fetcher::Fetcher;
