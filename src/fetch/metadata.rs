//! The result of a successful fetch.

use reqwest::Url;
use std::collections::HashMap;

/// Response headers captured from a remote fetch, keyed by header name.
pub type Headers = HashMap<String, String>;

/// Describes where a fetched file came from.
///
/// Local copies never carry headers and remote downloads always do, so the
/// only way to build a value is through [`Metadata::local`] or
/// [`Metadata::remote`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    url: String,
    headers: Option<Headers>,
}

impl Metadata {
    /// Metadata for a file copied from the local filesystem.
    pub fn local(url: &Url) -> Self {
        Self {
            url: url.as_str().to_string(),
            headers: None,
        }
    }

    /// Metadata for a file downloaded over HTTP(S).
    pub fn remote(url: &Url, headers: Headers) -> Self {
        Self {
            url: url.as_str().to_string(),
            headers: Some(headers),
        }
    }

    /// The URL the file was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The response headers, `None` for local copies.
    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    /// Look up a single response header by its (lowercase) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|h| h.get(name))
            .map(String::as_str)
    }

    /// Whether the file was downloaded rather than copied.
    pub fn is_remote(&self) -> bool {
        self.headers.is_some()
    }

    /// Consume the metadata, returning the URL and headers.
    pub fn into_parts(self) -> (String, Option<Headers>) {
        (self.url, self.headers)
    }
}
