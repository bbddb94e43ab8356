//! Page-number extraction from raw homepage markup.
//!
//! The homepage is not parsed structurally: the contract is "image prefix,
//! a run of zeros, a digit run", matched left to right with the first hit
//! winning (the site lists the newest page first). Kept behind this module
//! so a structured parser could replace it without touching callers.

use regex::Regex;

/// Returns the page number of the first image reference in `source` whose
/// URL is `prefix` followed by at least one leading zero and a digit run.
/// Leading zeros are stripped from the result.
pub(crate) fn latest_page_in_source(source: &str, prefix: &str) -> Option<u32> {
    let pattern = format!("{}0+([0-9]+)", regex::escape(prefix));
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(source)?;
    caps.get(1)?.as_str().parse().ok()
}
