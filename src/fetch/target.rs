//! Fetch targets.
//!
//! A [`FetchTarget`] pairs the URL to retrieve with the path the retrieved
//! bytes are written to.
//!
//! # Examples
//!
//! ```rust
//! use filefetch::fetch::FetchTarget;
//! use reqwest::Url;
//! use std::convert::TryFrom;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Explicit destination.
//! let target = FetchTarget::try_from(("https://example.com/mod.ts", "out/mod.ts"))?;
//! assert_eq!(target.destination(), Path::new("out/mod.ts"));
//!
//! // Destination derived from the URL.
//! let url = Url::parse("https://example.com/files/archive%20v1.zip")?;
//! let target = FetchTarget::in_directory(&url, "downloads")?;
//! assert_eq!(target.destination(), Path::new("downloads/archive v1.zip"));
//! # Ok(())
//! # }
//! ```

use crate::error::Error;

use percent_encoding::percent_decode_str;
use reqwest::Url;
use std::convert::TryFrom;
use std::path::{Path, PathBuf};

/// A URL to fetch and the path to write it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    url: Url,
    destination: PathBuf,
}

impl FetchTarget {
    /// Creates a new [`FetchTarget`].
    pub fn new(url: &Url, destination: impl Into<PathBuf>) -> Self {
        Self {
            url: url.clone(),
            destination: destination.into(),
        }
    }

    /// Creates a [`FetchTarget`] writing into `directory`, named after the
    /// last segment of the URL path.
    pub fn in_directory(url: &Url, directory: impl AsRef<Path>) -> Result<Self, Error> {
        let filename = file_name(url)?;
        Ok(Self::new(url, directory.as_ref().join(filename)))
    }

    /// The URL to fetch.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The path the fetched bytes are written to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

fn file_name(url: &Url) -> Result<String, Error> {
    let segment = url
        .path_segments()
        .ok_or_else(|| {
            Error::InvalidUrl(format!("The url \"{}\" does not contain a valid path", url))
        })?
        .next_back()
        .unwrap_or_default();

    let filename = percent_decode_str(segment).decode_utf8().map_err(|_| {
        Error::InvalidUrl(format!(
            "The url \"{}\" does not contain a UTF-8 filename",
            url
        ))
    })?;

    if filename.is_empty() || filename == "." || filename == ".." || filename.contains('/') {
        return Err(Error::InvalidUrl(format!(
            "The url \"{}\" does not contain a filename",
            url
        )));
    }
    Ok(filename.into_owned())
}

impl<P: Into<PathBuf>> TryFrom<(&str, P)> for FetchTarget {
    type Error = Error;

    fn try_from((url, destination): (&str, P)) -> Result<Self, Self::Error> {
        let url = Url::parse(url).map_err(|e| {
            Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e))
        })?;
        Ok(FetchTarget::new(&url, destination))
    }
}
