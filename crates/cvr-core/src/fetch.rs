//! HTTP page fetching over libcurl.
//!
//! One blocking GET per call, no request headers, body decoded as text
//! regardless of its declared encoding. Runs in the current thread; call
//! from `spawn_blocking` if used from async code.

use std::time::Duration;

use crate::config::HttpConfig;

/// Fetch `url` with a plain GET and return the response body as text.
///
/// Follows redirects. A non-2xx response yields an empty body rather than an
/// error: downstream pattern scans then report "no match" instead of a
/// transport failure.
pub fn page_source(url: &str, http: &HttpConfig) -> Result<String, curl::Error> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(http.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(http.request_timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        tracing::warn!("GET {} returned HTTP {}; treating body as empty", url, code);
        return Ok(String::new());
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
