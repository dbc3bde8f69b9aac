use serde_json::Value;

use super::LoadError;
use crate::state::PackageRecord;

/// What: Parse a category data file.
///
/// Inputs:
/// - `body`: JSON text
///
/// Output:
/// - `Ok(records)` in file order; `Err(LoadError::Parse)` when the text is not
///   JSON or the top level is not an array.
///
/// Details:
/// - Entries that are not objects or lack a usable `package_name` are skipped
///   with a warning; the rest of the file still loads.
/// - A leading UTF-8 byte order mark is ignored.
/// - Numbers outside the `f64` range are kept as text while parsing, so an
///   oversized `score` only drops to `N/A` instead of failing the file.
pub fn parse_records(body: &str) -> Result<Vec<PackageRecord>, LoadError> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);
    let Value::Array(entries) = serde_json::from_str::<Value>(body)? else {
        return Err(LoadError::Parse("expected a JSON array".to_string()));
    };
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<PackageRecord>(entry) {
            Ok(rec) => records.push(rec),
            Err(err) => tracing::warn!(index, error = %err, "skipping malformed package record"),
        }
    }
    Ok(records)
}
