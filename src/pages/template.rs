//! Quarto page template for a category.

use super::categories::Category;
use crate::ui::html::{SEARCH_PLACEHOLDER, escape_html};

/// Client-side widget; the data URL placeholder is substituted per page.
const WIDGET_SCRIPT: &str = include_str!("../../assets/package-browser.js");
const DATA_URL_PLACEHOLDER: &str = "__PKGSHELF_DATA_URL__";

// Indented to sit under `text: |` in the front matter.
const HEADER_STYLE: &str = concat!(
    "        <style>\n",
    "        .letter-btn { background: none; border: none; color: #666; cursor: pointer; font-weight: 500; padding: 0 4px; font-size: 0.9rem; }\n",
    "        .letter-btn:hover { color: #333; }\n",
    "        .letter-btn.active { color: #000; font-weight: 700; }\n",
    "        #package-search { width: 100%; max-width: 400px; padding: 8px 12px; border: 1px solid #ccc; border-radius: 4px; font-size: 1rem; margin-bottom: 1em; }\n",
    "        </style>",
);

/// Quote a value for a double-quoted YAML scalar.
fn yaml_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Quote a value for a single-quoted JavaScript string literal.
fn js_quote(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('<', "\\x3c")
        .replace('\n', "\\n")
}

/// What: Render the `.qmd` page for one category.
///
/// Inputs:
/// - `category`: Category to render
/// - `data_base`: Directory or URL prefix of the data files, as seen from the
///   published page
///
/// Output:
/// - Page text: YAML front matter with title and style header, then a raw HTML
///   block with the search box, alphabet row, package container and widget
///   script.
pub fn render_page(category: &Category, data_base: &str) -> String {
    let script = WIDGET_SCRIPT.replace(
        DATA_URL_PLACEHOLDER,
        &js_quote(&category.data_path(data_base)),
    );
    format!(
        "---\n\
         title: {title}\n\
         format:\n  \
           html:\n    \
             include-in-header:\n      \
               text: |\n\
         {HEADER_STYLE}\n\
         ---\n\
         \n\
         ```{{=html}}\n\
         <input type=\"text\" id=\"package-search\" placeholder=\"{SEARCH_PLACEHOLDER}\" />\n\
         <div id=\"alphabet-filter\" style=\"margin: 0.5em 0;\"></div>\n\
         <div id=\"category-packages\">Loading packages...</div>\n\
         \n\
         <script data-category=\"{slug}\">\n\
         {script}\
         </script>\n\
         ```\n",
        title = yaml_quote(category.title),
        slug = escape_html(category.slug),
    )
}
