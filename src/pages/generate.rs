use std::path::{Path, PathBuf};

use super::categories::Category;
use super::template::render_page;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Write one `.qmd` page per category.
///
/// Inputs:
/// - `out_dir`: Output directory (created when missing)
/// - `categories`: Categories to render
/// - `data_base`: Data file location as seen from the published pages
///
/// Output:
/// - Paths of the written files in category order.
///
/// # Errors
/// - Returns `Err` when the directory cannot be created or a page cannot be written.
///
/// Details:
/// - Existing pages are overwritten.
pub fn generate_pages(
    out_dir: &Path,
    categories: &[Category],
    data_base: &str,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| format!("cannot create {}: {e}", out_dir.display()))?;
    let mut written = Vec::with_capacity(categories.len());
    for category in categories {
        let path = out_dir.join(category.page_file_name());
        std::fs::write(&path, render_page(category, data_base))
            .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), category = category.slug, "created page");
        written.push(path);
    }
    Ok(written)
}
