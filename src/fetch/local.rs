//! Copying `file:` URLs from the local filesystem.

use super::metadata::Metadata;
use crate::error::{Error, Result};

use reqwest::Url;
use std::path::Path;
use tokio::fs;
use tracing::{debug, trace};

/// Copies the file behind a `file:` URL to `destination`.
///
/// The destination is overwritten if it already exists. Fails with
/// [`Error::Fetch`] when the source does not exist or cannot be checked.
pub async fn copy_local(url: &Url, destination: &Path) -> Result<Metadata> {
    let path = url.to_file_path().map_err(|_| {
        Error::InvalidUrl(format!(
            "The url \"{}\" does not point to a local path",
            url
        ))
    })?;

    match fs::try_exists(&path).await {
        Ok(true) => trace!("Found {:?} on the local system", path),
        Ok(false) => {
            return Err(Error::fetch(format!(
                "{} does not exist on the local system.",
                path.display()
            )))
        }
        Err(e) => {
            return Err(Error::fetch_with_source(
                format!("{} is not valid.", path.display()),
                e,
            ))
        }
    }

    debug!("Copying {:?} to {:?}", path, destination);
    let size = fs::copy(&path, destination).await?;
    debug!("Copied {} bytes", size);

    Ok(Metadata::local(url))
}
