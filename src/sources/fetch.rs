//! Reading category data from disk or over HTTP.

use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use super::{LoadError, parse_records};
use crate::state::PackageRecord;

/// Shared HTTP client with connection pooling for data file requests.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("pkgshelf/{}", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
        .expect("Failed to create HTTP client")
});

/// What: Fetch and parse a data file over HTTP.
///
/// Inputs:
/// - `url`: Absolute `http(s)` URL of the JSON file
///
/// Output:
/// - Parsed records, or the first failure.
///
/// # Errors
/// - `LoadError::Http` when the request cannot be sent or the body cannot be read
/// - `LoadError::Status` for non-success responses
/// - `LoadError::Parse` when the body is not a JSON array
pub async fn fetch_url(url: &str) -> Result<Vec<PackageRecord>, LoadError> {
    tracing::debug!(url, "fetching package data");
    let resp = HTTP_CLIENT.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            code: status.as_u16(),
        });
    }
    let body = resp.text().await?;
    parse_records(&body)
}

/// What: Read and parse a data file from disk.
///
/// Inputs:
/// - `path`: File path
///
/// Output:
/// - Parsed records, or the first failure.
///
/// # Errors
/// - `LoadError::Io` when the file cannot be read
/// - `LoadError::Parse` when the content is not a JSON array
///
/// Details:
/// - The read runs on the blocking pool so the event loop stays responsive.
pub async fn read_file(path: PathBuf) -> Result<Vec<PackageRecord>, LoadError> {
    tracing::debug!(path = %path.display(), "reading package data");
    let body = tokio::task::spawn_blocking(move || std::fs::read_to_string(path))
        .await
        .map_err(|e| LoadError::Io(std::io::Error::other(e)))??;
    parse_records(&body)
}
