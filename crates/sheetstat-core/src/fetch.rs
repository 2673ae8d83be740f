//! HTTP fetching of listing files.
//!
//! Uses the curl crate (libcurl) to GET a listing CSV and parse it.
//! Runs in the current thread; call from `spawn_blocking` if used from
//! async code.

use crate::listing::{parse_listing, ListingMap};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Error from a single listing fetch. `Url` and `Client` correspond to
/// the "Internal Error" class (the request never completed normally);
/// `Http` is the "Remote Request failed" class for non-2xx responses.
#[derive(Debug)]
pub enum FetchError {
    /// Base URL and listing path do not form a valid URL.
    Url(url::ParseError),
    /// curl could not be configured, or the transfer failed
    /// (DNS, connect, timeout).
    Client(curl::Error),
    /// Response had a non-2xx status.
    Http { code: u32, url: String },
    /// A fetch task could not be joined.
    Task(tokio::task::JoinError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Url(e) => write!(f, "Internal Error: invalid URL: {}", e),
            FetchError::Client(e) => write!(f, "Internal Error: {}", e),
            FetchError::Http { code, url } => {
                write!(f, "Remote Request failed with HTTP {} for {}", code, url)
            }
            FetchError::Task(e) => write!(f, "Internal Error: fetch task failed: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Url(e) => Some(e),
            FetchError::Client(e) => Some(e),
            FetchError::Task(e) => Some(e),
            FetchError::Http { .. } => None,
        }
    }
}

/// GETs `listing_path` relative to `base_url` and parses the body as a
/// listing. Non-2xx responses and transport failures map to [`FetchError`];
/// malformed rows inside a 2xx body are dropped by the parser, never
/// surfaced as errors.
pub fn fetch_listing(
    base_url: &str,
    listing_path: &str,
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<ListingMap, FetchError> {
    let base = Url::parse(base_url).map_err(FetchError::Url)?;
    let url = base.join(listing_path).map_err(FetchError::Url)?;
    let body = http_get_text(url.as_str(), connect_timeout, request_timeout)?;
    Ok(parse_listing(&body))
}

/// GET a small text resource, collecting the whole body in memory.
fn http_get_text(
    url: &str,
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(FetchError::Client)?;
    easy.follow_location(true).map_err(FetchError::Client)?;
    easy.connect_timeout(connect_timeout)
        .map_err(FetchError::Client)?;
    easy.timeout(request_timeout).map_err(FetchError::Client)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(FetchError::Client)?;
        tracing::debug!("GET {}", url);
        transfer.perform().map_err(FetchError::Client)?;
    }

    let code = easy.response_code().map_err(FetchError::Client)? as u32;
    if code < 200 || code >= 300 {
        tracing::warn!("GET {} returned HTTP {}", url, code);
        return Err(FetchError::Http {
            code,
            url: url.to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}
