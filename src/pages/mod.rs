//! Static category pages embedding the client-side package browser.

pub mod categories;
pub mod generate;
pub mod template;

pub use categories::{Category, DEFAULT_DATA_BASE};
pub use generate::generate_pages;
pub use template::render_page;
