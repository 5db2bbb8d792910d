//! Bearer token injection for a single API host.

use crate::error::{Error, Result};

use reqwest::header::HeaderValue;
use reqwest::Url;
use std::env;
use tracing::debug;

/// Sends `Authorization: bearer <token>` to one host, reading the token from
/// an environment variable.
///
/// The variable is read on every request to that host, so a token exported
/// after the fetcher was built is still picked up. Every other host receives
/// no credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerAuth {
    host: String,
    token_var: String,
}

impl Default for BearerAuth {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.into(),
            token_var: Self::DEFAULT_TOKEN_VAR.into(),
        }
    }
}

impl BearerAuth {
    /// The host that receives the token unless configured otherwise.
    pub const DEFAULT_HOST: &'static str = "api.github.com";
    /// The environment variable holding the token unless configured otherwise.
    pub const DEFAULT_TOKEN_VAR: &'static str = "GITHUB_TOKEN";

    /// Creates a new [`BearerAuth`].
    ///
    /// `host` is compared against the URL authority, so a non-default port
    /// must be included (`localhost:8080`).
    pub fn new(host: impl Into<String>, token_var: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token_var: token_var.into(),
        }
    }

    /// The host that receives the token.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The environment variable holding the token.
    pub fn token_var(&self) -> &str {
        &self.token_var
    }

    /// Whether `url` points at the API host.
    pub fn applies_to(&self, url: &Url) -> bool {
        match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port) == self.host,
            (Some(host), None) => host == self.host,
            (None, _) => false,
        }
    }

    /// The `Authorization` value to send to `url`, if any.
    ///
    /// An unset or empty variable means no credential.
    pub fn authorization(&self, url: &Url) -> Result<Option<HeaderValue>> {
        if !self.applies_to(url) {
            return Ok(None);
        }

        let token = match env::var(&self.token_var) {
            Ok(token) if !token.is_empty() => token,
            _ => {
                debug!("No token in {}, sending no credential", self.token_var);
                return Ok(None);
            }
        };

        let mut value = HeaderValue::from_str(&format!("bearer {}", token)).map_err(|_| {
            Error::fetch(format!(
                "{} contains characters that are not allowed in a header",
                self.token_var
            ))
        })?;
        value.set_sensitive(true);

        debug!("Attaching bearer token from {} for {}", self.token_var, self.host);
        Ok(Some(value))
    }
}
