//! HTTP client setup and middleware configuration.
//!
//! Remote fetches go through a reqwest client wrapped in
//! [`reqwest_middleware`], with [`TracingMiddleware`] emitting a span per
//! request. Failed requests are never retried.
//!
//! # Examples
//!
//! ```rust
//! use filefetch::http::{create_http_client, HttpClientConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Client with Proxy
//!
//! ```rust,no_run
//! use filefetch::http::{create_http_client, HttpClientConfig};
//! use reqwest::Proxy;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     proxy: Some(Proxy::all("http://proxy.example.com:8080")?),
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::Proxy;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
}

/// Creates an HTTP client with the tracing middleware.
///
/// The client sends no default headers, so requests only carry what the
/// caller attaches.
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder();

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_create_http_client_default() {
        let client = create_http_client(HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_http_client_with_proxy() {
        let config = HttpClientConfig {
            proxy: Some(Proxy::http("http://127.0.0.1:3128").unwrap()),
        };
        assert!(create_http_client(config).is_ok());
    }
}
