//! filefetch fetches a resource identified by a URL, either a local `file:`
//! URL or an `http:`/`https:` URL, writes it to a destination path and
//! reports where it came from.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use filefetch::{fetch, Error};
//! use reqwest::Url;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let url = Url::parse("https://deno.land/std@0.69.0/path/mod.ts").unwrap();
//! let metadata = fetch(&url, "mod.ts").await?;
//! println!("fetched {} ({:?})", metadata.url(), metadata.header("content-type"));
//! # Ok(())
//! # }
//! ```
//!
//! Remote requests to `api.github.com` carry `Authorization: bearer <token>`
//! when the `GITHUB_TOKEN` environment variable is set and non-empty. Both
//! the host and the variable can be changed with [`FetcherBuilder`].
//!
//! # Module Organization
//!
//! - [`fetch`](mod@fetch) - The retrieval strategies, [`Metadata`] and [`FetchTarget`]
//! - [`fetcher`] - The configured [`Fetcher`] and its [`FetcherBuilder`]
//! - [`error`] - The [`Error`] enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bars for batch fetches

pub mod error;
pub mod fetch;
pub mod fetcher;
pub mod http;
pub mod progress;

pub use error::{Error, Result};
pub use fetch::{fetch, BearerAuth, FetchTarget, Headers, Metadata, Scheme};
pub use fetcher::{Fetcher, FetcherBuilder};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{ProgressBarOpts, StyleOptions};
