//! Command-line page generation.

use std::path::Path;

use crate::pages::{categories, generate_pages};

/// What: Generate all category pages.
///
/// Inputs:
/// - `out_dir`: Directory receiving the `.qmd` files
/// - `data_base`: Data file location as seen from the published pages
///
/// Output:
/// - Exit code: `0` on success, `1` when any page could not be written.
///
/// Details:
/// - Prints one `Created <file>` line per page, like the site's build scripts expect.
pub fn handle_generate(out_dir: &Path, data_base: &str) -> i32 {
    tracing::info!(dir = %out_dir.display(), data_base, "Page generation requested from CLI");
    match generate_pages(out_dir, categories::all(), data_base) {
        Ok(paths) => {
            for p in &paths {
                println!("Created {}", p.display());
            }
            0
        }
        Err(e) => {
            eprintln!("Page generation failed: {e}");
            tracing::error!(error = %e, "page generation failed");
            1
        }
    }
}
