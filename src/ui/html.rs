//! HTML markup surface matching the category page widget.

use std::fmt::Write as _;

use super::RenderTarget;
use crate::state::{Card, LetterControl, Status};

/// Placeholder text of the search box.
pub const SEARCH_PLACEHOLDER: &str = "Search packages...";

/// What: Escape text for use in HTML element content or quoted attributes.
///
/// Inputs:
/// - `s`: Raw text
///
/// Output:
/// - Text with `&`, `<`, `>`, `"` and `'` replaced by entities.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for each browser region, replaced wholesale on every render.
#[derive(Clone, Debug, Default)]
pub struct HtmlSurface {
    input: String,
    letters: String,
    status: Option<Status>,
    cards: String,
}

impl HtmlSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the search input.
    pub fn input_html(&self) -> &str {
        &self.input
    }

    /// Markup of the 26 letter buttons.
    pub fn letters_html(&self) -> &str {
        &self.letters
    }

    /// Markup of the card list without the count line.
    pub fn cards_html(&self) -> &str {
        &self.cards
    }

    /// What: Markup of the package container.
    ///
    /// Output:
    /// - Loading text, the error paragraph, or the count paragraph followed by
    ///   the card list.
    pub fn container_html(&self) -> String {
        match &self.status {
            None | Some(Status::Loading) => Status::Loading.to_string(),
            Some(Status::Failed) => format!("<p>{}</p>", Status::Failed),
            Some(found @ Status::Found(_)) => format!(
                "<p class=\"results-count\">{found}</p><div class=\"package-list\">{}</div>",
                self.cards
            ),
        }
    }

    /// What: Full widget fragment.
    ///
    /// Output:
    /// - Search input, alphabet row and package container as one HTML string.
    pub fn document(&self) -> String {
        format!(
            "{}\n<div id=\"alphabet-filter\" style=\"margin: 0.5em 0;\">{}</div>\n<div id=\"category-packages\">{}</div>\n",
            self.input,
            self.letters,
            self.container_html()
        )
    }
}

impl RenderTarget for HtmlSurface {
    fn show_status(&mut self, status: &Status) {
        self.status = Some(status.clone());
    }

    fn show_cards(&mut self, cards: &[Card]) {
        self.cards.clear();
        for card in cards {
            let _ = write!(
                self.cards,
                "<div class=\"package-card\"><div class=\"package-header\">\
                 <h3 class=\"package-title\"><a href=\"{}\" target=\"_blank\">{}</a></h3>\
                 <span class=\"package-score\">{}</span></div>\
                 <p class=\"package-description\">{}</p></div>",
                escape_html(&card.href),
                escape_html(&card.name),
                escape_html(&card.score),
                escape_html(&card.description),
            );
        }
    }

    fn show_letters(&mut self, letters: &[LetterControl]) {
        self.letters.clear();
        for ctl in letters {
            let class = if ctl.active {
                "letter-btn active"
            } else {
                "letter-btn"
            };
            let _ = write!(
                self.letters,
                "<button type=\"button\" class=\"{class}\" data-letter=\"{l}\">{l}</button>",
                l = ctl.letter
            );
        }
    }

    fn show_input(&mut self, text: &str) {
        self.input = format!(
            "<input type=\"text\" id=\"package-search\" placeholder=\"{SEARCH_PLACEHOLDER}\" value=\"{}\" />",
            escape_html(text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::PackageBrowser;
    use crate::state::{Letter, PackageRecord};

    #[test]
    /// What: Escaping covers markup-significant characters
    ///
    /// - Input: String with tags, quotes and ampersand
    /// - Output: All replaced by entities
    fn escape_html_replaces_specials() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    /// What: Card markup carries name, link, score and description
    ///
    /// - Input: Ready browser with one full and one bare record
    /// - Output: Count paragraph and both cards with placeholders for the bare one
    fn cards_render_with_defaults() {
        let b = PackageBrowser::with_packages(
            HtmlSurface::new(),
            vec![
                PackageRecord::named("dplyr")
                    .with_score(9.5)
                    .with_url("https://dplyr.tidyverse.org")
                    .with_title("Data manipulation"),
                PackageRecord::named("sf"),
            ],
        );
        let html = b.target().container_html();
        assert!(html.starts_with("<p class=\"results-count\">Found 2 packages</p>"));
        assert!(html.contains(
            "<a href=\"https://dplyr.tidyverse.org\" target=\"_blank\">dplyr</a>"
        ));
        assert!(html.contains("<span class=\"package-score\">9.5</span>"));
        assert!(html.contains("<a href=\"#\" target=\"_blank\">sf</a>"));
        assert!(html.contains("<span class=\"package-score\">N/A</span>"));
        assert!(html.contains("<p class=\"package-description\">No description</p>"));
    }

    #[test]
    /// What: Exactly one letter button carries the active class
    ///
    /// - Input: Toggle G
    /// - Output: 26 buttons, one with `letter-btn active` for G
    fn active_letter_marked_once() {
        let mut b = PackageBrowser::with_packages(HtmlSurface::new(), Vec::new());
        b.toggle_letter(Letter::new('g').expect("letter"));
        let letters = b.target().letters_html();
        assert_eq!(letters.matches("<button").count(), 26);
        assert_eq!(letters.matches("letter-btn active").count(), 1);
        assert!(letters.contains("class=\"letter-btn active\" data-letter=\"G\""));
    }

    #[test]
    /// What: Error and loading containers
    ///
    /// - Input: Fresh surface, then failed status
    /// - Output: Loading text, then error paragraph
    fn loading_and_error_containers() {
        let mut s = HtmlSurface::new();
        assert_eq!(s.container_html(), "Loading packages...");
        s.show_status(&Status::Failed);
        assert_eq!(s.container_html(), "<p>Error loading packages.</p>");
    }

    #[test]
    /// What: Search input value is escaped
    ///
    /// - Input: Query containing a quote
    /// - Output: Value attribute uses an entity
    fn input_value_is_escaped() {
        let mut b = PackageBrowser::with_packages(HtmlSurface::new(), Vec::new());
        b.set_query("a\"b");
        assert!(b.target().input_html().contains("value=\"a&quot;b\""));
        assert!(b.target().document().contains("id=\"category-packages\""));
    }
}
