use reqwest::StatusCode;
use url::Url;

use crate::error::{Error, Result};

/// Helper function to format HTTP request/response context for logging and
/// error reporting
pub(crate) fn format_http_context<U: AsRef<str>>(
    status: Option<StatusCode>,
    method: &str,
    url: U,
) -> String {
    if let Some(status) = status {
        format!("{} {} {}", status.as_u16(), method, url.as_ref())
    } else {
        format!("{} {}", method, url.as_ref())
    }
}

/// Appends `path` to `base`, refusing anything that could escape the base.
pub(crate) fn join_url(base: &Url, path: &str) -> Result<Url> {
    if path.contains("://") || path.contains("..") {
        return Err(Error::InvalidPath(path.to_string()));
    }

    // Remove leading slash to avoid double slashes
    let path = path.trim_start_matches('/');
    Ok(base.join(path)?)
}
