//! Render targets for the package browser.
//!
//! A target is any surface that can show the four regions of the browser:
//! the search input, the letter row, the status line and the card list.
//! [`html::HtmlSurface`] produces the markup used on the category pages;
//! [`terminal::TerminalSurface`] backs the interactive terminal browser.

pub mod html;
pub mod terminal;
pub mod text;

use crate::state::{Card, LetterControl, Status};

pub use html::HtmlSurface;
pub use terminal::TerminalSurface;

/// Surface the browser draws on.
pub trait RenderTarget {
    /// Replace the count/status line.
    fn show_status(&mut self, status: &Status);
    /// Replace the card list.
    fn show_cards(&mut self, cards: &[Card]);
    /// Replace the letter toggle row.
    fn show_letters(&mut self, letters: &[LetterControl]);
    /// Reflect the search input text.
    fn show_input(&mut self, text: &str);
}
