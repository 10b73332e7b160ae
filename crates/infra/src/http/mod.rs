//! Shared HTTP client for outbound collaborator calls

mod client;

use paneboard_domain::{PaneboardError, Result};
use url::Url;

pub use client::{HttpClient, HttpClientBuilder};

/// `base` with `segments` appended as percent-encoded path segments.
pub fn endpoint<I>(base: &str, segments: I) -> Result<Url>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut url = Url::parse(base)
        .map_err(|e| PaneboardError::Config(format!("Invalid API base URL {base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| PaneboardError::Config(format!("API base URL cannot have a path: {base}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
