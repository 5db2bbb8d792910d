//! Fetch module containing the retrieval strategies.
//!
//! A fetch maps the scheme of a URL to one of two strategies and normalizes
//! both into [`Metadata`]:
//!
//! - [`local`] - copies `file:` URLs from the local filesystem
//! - [`remote`] - downloads `http:` and `https:` URLs
//!
//! The remaining modules hold the types shared by both strategies:
//!
//! - [`scheme`] - the closed set of supported [`Scheme`]s
//! - [`target`] - [`FetchTarget`], a URL paired with its destination
//! - [`metadata`] - [`Metadata`], the result of a successful fetch
//! - [`auth`] - [`BearerAuth`], the credential sent to the API host
//!
//! # Examples
//!
//! ```rust,no_run
//! use reqwest::Url;
//!
//! # async fn example() -> Result<(), filefetch::Error> {
//! let url = Url::parse("https://deno.land/std@0.69.0/path/mod.ts").unwrap();
//! let metadata = filefetch::fetch(&url, "mod.ts").await?;
//!
//! println!("{}", metadata.url());
//! if let Some(kind) = metadata.header("content-type") {
//!     println!("content-type: {}", kind);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod local;
pub mod metadata;
pub mod remote;
pub mod scheme;
pub mod target;

pub use auth::BearerAuth;
pub use metadata::{Headers, Metadata};
pub use scheme::Scheme;
pub use target::FetchTarget;

use crate::error::Result;
use crate::fetcher::FetcherBuilder;

use reqwest::Url;
use std::path::Path;

/// Fetches `url` into `destination` with a default, silent [`Fetcher`].
///
/// Builds a new HTTP client on every call; keep a [`Fetcher`] around when
/// fetching more than once.
///
/// [`Fetcher`]: crate::fetcher::Fetcher
pub async fn fetch(url: &Url, destination: impl AsRef<Path>) -> Result<Metadata> {
    FetcherBuilder::hidden()
        .build()?
        .fetch(url, destination)
        .await
}
