//! Volume range resolution against the live comic site.
//!
//! The resolver owns an immutable configuration (site layout plus volume
//! table) and exposes the operations the presentation layer needs: the
//! newest page number, a volume's resolved range label, and per-page image
//! URLs. Calls are blocking and re-fetch on every invocation; run them under
//! `spawn_blocking` when used from async code.

mod error;
mod extract;

pub use error::ResolveError;

use crate::config::{ComicConfig, VolumeEntry};
use crate::{fetch, page};

#[derive(Debug, Clone)]
pub struct VolumeResolver {
    cfg: ComicConfig,
}

impl VolumeResolver {
    pub fn new(cfg: ComicConfig) -> Self {
        Self { cfg }
    }

    /// The configured volume table, oldest first.
    pub fn volumes(&self) -> &[VolumeEntry] {
        &self.cfg.volumes
    }

    /// Fetches the homepage and returns the newest published page number.
    pub fn fetch_latest_page_number(&self) -> Result<u32, ResolveError> {
        let url = &self.cfg.site.homepage_url;
        let source = fetch::page_source(url, &self.cfg.http).map_err(|source| {
            ResolveError::Fetch {
                url: url.clone(),
                source,
            }
        })?;
        extract::latest_page_in_source(&source, &self.cfg.site.image_prefix).ok_or_else(|| {
            ResolveError::NoMatch {
                url: url.clone(),
                prefix: self.cfg.site.image_prefix.clone(),
            }
        })
    }

    /// Resolves the display range for the volume at `index`: the stored
    /// range label, a hyphen, and the live newest page number.
    ///
    /// The index is validated before any network I/O. The concatenation is
    /// literal: a table entry that already reads "1-500" resolves to
    /// "1-500-472". Display quirks are the table's responsibility.
    pub fn resolve_latest_volume_range(&self, index: usize) -> Result<String, ResolveError> {
        let len = self.cfg.volumes.len();
        let entry = self
            .cfg
            .volumes
            .get(index)
            .ok_or(ResolveError::VolumeOutOfRange { index, len })?;
        let end = self.fetch_latest_page_number()?;
        if end < entry.start_page {
            tracing::warn!(
                "site reports page {} below volume {} start {}",
                end,
                index,
                entry.start_page
            );
        }
        Ok(format!("{}-{}", entry.range, end))
    }

    /// Absolute image URL for `page`, per the configured site layout.
    pub fn image_url(&self, page: u32) -> Result<String, url::ParseError> {
        page::image_url(&self.cfg.site, page)
    }
}
