//! Resolver error taxonomy.

use thiserror::Error;

/// Failure of a single resolution call.
///
/// Nothing is retried internally and no stale or default value is ever
/// substituted; the caller decides whether to surface, retry, or give up.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Transport failure (connect, timeout, protocol) talking to the site.
    #[error("GET {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The fetched markup contains no image URL with the configured prefix.
    #[error("no page image matching `{prefix}` found at {url}")]
    NoMatch { url: String, prefix: String },

    /// Volume index outside the configured table.
    #[error("volume index {index} out of range: table has {len} volumes")]
    VolumeOutOfRange { index: usize, len: usize },
}
