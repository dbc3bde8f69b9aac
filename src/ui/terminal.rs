//! Terminal surface and ratatui drawing for the interactive browser.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::RenderTarget;
use crate::state::{Card, Focus, LetterControl, Status};

/// Last view pushed by the browser, kept for the next frame.
#[derive(Clone, Debug, Default)]
pub struct TerminalSurface {
    /// Search text as typed.
    pub input: String,
    /// Letter row state.
    pub letters: Vec<LetterControl>,
    /// Count or load status.
    pub status: Option<Status>,
    /// Cards to list.
    pub cards: Vec<Card>,
}

impl RenderTarget for TerminalSurface {
    fn show_status(&mut self, status: &Status) {
        self.status = Some(status.clone());
    }

    fn show_cards(&mut self, cards: &[Card]) {
        cards.clone_into(&mut self.cards);
    }

    fn show_letters(&mut self, letters: &[LetterControl]) {
        letters.clone_into(&mut self.letters);
    }

    fn show_input(&mut self, text: &str) {
        text.clone_into(&mut self.input);
    }
}

/// Border style for a pane, brighter when focused.
fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// What: Draw the search input and place the caret.
///
/// Inputs:
/// - `f`: Frame
/// - `surface`: Current surface
/// - `focused`: Whether the search pane has focus
/// - `area`: Target rectangle
fn render_search(f: &mut Frame, surface: &TerminalSurface, focused: bool, area: Rect) {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::raw(surface.input.as_str()),
    ]);
    f.render_widget(
        Paragraph::new(line).block(pane_block("Search packages", focused)),
        area,
    );
    if focused {
        let offset = u16::try_from(2 + surface.input.width()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
    }
}

/// What: Draw the A-Z letter row.
///
/// Inputs:
/// - `f`: Frame
/// - `letters`: Controls from the surface
/// - `cursor`: Index of the letter under the cursor, used when focused
/// - `focused`: Whether the letter row has focus
/// - `area`: Target rectangle
///
/// Details:
/// - The active letter is drawn inverted; the cursor is underlined.
fn render_letters(
    f: &mut Frame,
    letters: &[LetterControl],
    cursor: usize,
    focused: bool,
    area: Rect,
) {
    let spans: Vec<Span> = letters
        .iter()
        .enumerate()
        .map(|(i, ctl)| {
            let mut style = if ctl.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if focused && i == cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            Span::styled(format!(" {} ", ctl.letter), style)
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(spans)).block(pane_block("Letter", focused)),
        area,
    );
}

/// Convert a card into a three-line list item.
fn card_item(card: &Card) -> ListItem<'_> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                card.name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", card.score),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", card.description),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("  {}", card.href),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

/// What: Draw the whole browser.
///
/// Inputs:
/// - `f`: Frame
/// - `surface`: View last pushed by the browser
/// - `focus`: Focused pane
/// - `cursor`: Letter cursor index
///
/// Output:
/// - Search pane, letter row, status line and card list stacked vertically.
pub fn draw(f: &mut Frame, surface: &TerminalSurface, focus: Focus, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(f.area());

    render_search(f, surface, focus == Focus::Search, chunks[0]);
    render_letters(
        f,
        &surface.letters,
        cursor,
        focus == Focus::Letters,
        chunks[1],
    );

    let status = surface.status.as_ref().unwrap_or(&Status::Loading);
    let status_style = match status {
        Status::Failed => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Status::Loading => Style::default().fg(Color::Yellow),
        Status::Found(_) => Style::default().fg(Color::Cyan),
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(status.to_string(), status_style))),
        chunks[2],
    );

    let items: Vec<ListItem> = surface.cards.iter().map(card_item).collect();
    f.render_widget(
        List::new(items).block(pane_block("Packages", false)),
        chunks[3],
    );
}
