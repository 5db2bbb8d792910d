//! Downloading `http:` and `https:` URLs.

use super::auth::BearerAuth;
use super::metadata::{Headers, Metadata};
use crate::error::{Error, Result};

use futures::StreamExt;
use hyper::ext::ReasonPhrase;
use indicatif::ProgressBar;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Response, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::collections::hash_map::Entry;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Downloads `url` into `destination` and returns its response headers.
///
/// The whole body is held in memory and written in one go once it has been
/// received; `pb` advances as chunks arrive. A non-success status fails with
/// [`Error::Fetch`] carrying the status text, before any body is read.
pub async fn download_remote(
    client: &ClientWithMiddleware,
    auth: &BearerAuth,
    url: &Url,
    destination: &Path,
    pb: &ProgressBar,
) -> Result<Metadata> {
    let mut request_headers = HeaderMap::new();
    if let Some(value) = auth.authorization(url)? {
        request_headers.insert(AUTHORIZATION, value);
    }

    debug!("Fetching {}", url);
    let res = client
        .get(url.clone())
        .headers(request_headers)
        .send()
        .await?;

    let status = res.status();
    debug!("{} answered {}", url, status);
    if !status.is_success() {
        return Err(Error::fetch(status_text(&res)));
    }

    let headers = capture_headers(res.headers());
    if let Some(len) = res.content_length() {
        pb.set_length(len);
    }

    debug!("Retrieving chunks...");
    let mut body = Vec::new();
    let mut stream = res.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        pb.inc(chunk.len() as u64);
        body.extend_from_slice(&chunk);
    }

    debug!("Writing {} bytes to {:?}", body.len(), destination);
    fs::write(destination, &body).await?;

    Ok(Metadata::remote(url, headers))
}

/// The reason phrase the server sent, or the canonical one for the status.
///
/// hyper only records the phrase when it differs from the canonical one.
fn status_text(res: &Response) -> String {
    match res.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => {
            let status = res.status();
            status
                .canonical_reason()
                .unwrap_or_else(|| status.as_str())
                .to_owned()
        }
    }
}

/// Copies every response header into a fresh map.
///
/// Repeated headers are joined with `", "`, the way a fetch `Headers`
/// object presents them.
pub(crate) fn capture_headers(map: &HeaderMap) -> Headers {
    let mut headers = Headers::with_capacity(map.keys_len());
    for (name, value) in map {
        let value = String::from_utf8_lossy(value.as_bytes());
        match headers.entry(name.as_str().to_owned()) {
            Entry::Occupied(mut e) => {
                let joined = e.get_mut();
                joined.push_str(", ");
                joined.push_str(&value);
            }
            Entry::Vacant(e) => {
                e.insert(value.into_owned());
            }
        }
    }
    headers
}
