//! Category data loading: where the JSON lives and how it is read.

mod error;
mod fetch;
mod parse;

use std::fmt;
use std::path::PathBuf;

pub use error::LoadError;
pub use fetch::{fetch_url, read_file};
pub use parse::parse_records;

use crate::state::PackageRecord;

/// Location of a category data file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Local JSON file.
    File(PathBuf),
    /// Remote JSON file.
    Url(String),
}

impl DataSource {
    /// What: Interpret a path-or-URL string.
    ///
    /// Inputs:
    /// - `s`: `http://`/`https://` URL or filesystem path
    ///
    /// Output:
    /// - `Url` for HTTP(S) prefixes, `File` otherwise.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        let lower = t.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(t.to_string())
        } else {
            Self::File(PathBuf::from(t))
        }
    }

    /// What: Location of a category file under a base path or URL.
    ///
    /// Inputs:
    /// - `base`: Directory or URL prefix holding `<slug>.json` files
    /// - `slug`: Category slug
    ///
    /// Output:
    /// - Source pointing at `<base>/<slug>.json`.
    pub fn for_category(base: &str, slug: &str) -> Self {
        let joined = format!("{}/{slug}.json", base.trim_end_matches('/'));
        Self::parse(&joined)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => f.write_str(u),
        }
    }
}

/// What: Load all package records from a source.
///
/// Inputs:
/// - `source`: File or URL
///
/// Output:
/// - Records in file order or the load failure.
///
/// # Errors
/// - Any [`LoadError`] from reading, fetching or parsing.
pub async fn load(source: DataSource) -> Result<Vec<PackageRecord>, LoadError> {
    match source {
        DataSource::File(path) => read_file(path).await,
        DataSource::Url(url) => fetch_url(&url).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Path-or-URL classification
    ///
    /// - Input: https URL, upper-case HTTP URL, relative path
    /// - Output: Url, Url, File
    fn classifies_sources() {
        assert_eq!(
            DataSource::parse("https://example.org/data/stan.json"),
            DataSource::Url("https://example.org/data/stan.json".into())
        );
        assert!(matches!(DataSource::parse("HTTP://x/y.json"), DataSource::Url(_)));
        assert_eq!(
            DataSource::parse("../data/categories/stan.json"),
            DataSource::File(PathBuf::from("../data/categories/stan.json"))
        );
    }

    #[test]
    /// What: Category file location under a base
    ///
    /// - Input: Base with and without trailing slash
    /// - Output: `<base>/<slug>.json`
    fn category_location() {
        assert_eq!(
            DataSource::for_category("https://site.org/data/categories/", "shiny"),
            DataSource::Url("https://site.org/data/categories/shiny.json".into())
        );
        assert_eq!(
            DataSource::for_category("data", "stan").to_string(),
            "data/stan.json"
        );
    }
}
