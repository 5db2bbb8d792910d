//! URL scheme selection.

use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;
use std::fmt;

/// The URL schemes a fetch knows how to retrieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `file:`, copied from the local filesystem.
    File,
    /// `http:`, downloaded.
    Http,
    /// `https:`, downloaded.
    Https,
}

impl Scheme {
    /// Whether this scheme is retrieved over the network.
    pub fn is_remote(self) -> bool {
        match self {
            Scheme::File => false,
            Scheme::Http | Scheme::Https => true,
        }
    }

    /// The scheme as it appears in a URL, without the trailing colon.
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::File => "file",
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&Url> for Scheme {
    type Error = Error;

    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        match url.scheme() {
            "file" => Ok(Scheme::File),
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            _ => Err(Error::fetch(format!("unsupported protocol (\"{}\")", url))),
        }
    }
}
