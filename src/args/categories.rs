//! Command-line category listing.

use crate::pages::categories;

/// What: Print every known category with its title and data file.
///
/// Inputs:
/// - `data_base`: Data file base used to show each category's data location
///
/// Output:
/// - Exit code `0`.
pub fn handle_list_categories(data_base: &str) -> i32 {
    tracing::info!("Category list requested from CLI");
    let width = categories::all()
        .iter()
        .map(|c| c.slug.len())
        .max()
        .unwrap_or(0);
    for c in categories::all() {
        println!("{:<width$}  {}  ({})", c.slug, c.title, c.data_path(data_base));
    }
    0
}
