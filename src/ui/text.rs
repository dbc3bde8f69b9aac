//! Plain text surface used by the headless `--print` mode.

use std::fmt::Write as _;

use super::RenderTarget;
use crate::state::{Card, Letter, LetterControl, Status};

/// Line-oriented rendering of the browser.
#[derive(Clone, Debug, Default)]
pub struct TextSurface {
    query: String,
    letter: Option<Letter>,
    status: String,
    body: String,
}

impl TextSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Render everything as one block of text.
    ///
    /// Output:
    /// - Filter line, status line, then one indented block per card.
    pub fn document(&self) -> String {
        let letter = self
            .letter
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        format!(
            "query: {} | letter: {letter}\n{}\n{}",
            self.query, self.status, self.body
        )
    }
}

impl RenderTarget for TextSurface {
    fn show_status(&mut self, status: &Status) {
        self.status = status.to_string();
    }

    fn show_cards(&mut self, cards: &[Card]) {
        self.body.clear();
        for card in cards {
            let _ = writeln!(
                self.body,
                "\n{} [{}]\n  {}\n  {}",
                card.name, card.score, card.description, card.href
            );
        }
    }

    fn show_letters(&mut self, letters: &[LetterControl]) {
        self.letter = letters.iter().find(|c| c.active).map(|c| c.letter);
    }

    fn show_input(&mut self, text: &str) {
        text.clone_into(&mut self.query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::PackageBrowser;
    use crate::state::PackageRecord;

    #[test]
    /// What: Text document lists filters, count and cards
    ///
    /// - Input: Two records, letter G active
    /// - Output: Header names G; only ggplot2 printed with its description
    fn text_document_shows_filters_and_cards() {
        let mut b = PackageBrowser::with_packages(
            TextSurface::new(),
            vec![
                PackageRecord::named("dplyr").with_score(9.5),
                PackageRecord::named("ggplot2").with_title("Plotting"),
            ],
        );
        b.toggle_letter(Letter::new('G').expect("letter"));
        let doc = b.target().document();
        assert!(doc.starts_with("query:  | letter: G\nFound 1 packages\n"));
        assert!(doc.contains("ggplot2 [N/A]\n  Plotting\n  #"));
        assert!(!doc.contains("dplyr"));
    }
}
