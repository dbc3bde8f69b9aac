//! Key handling for the interactive browser.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::browser::PackageBrowser;
use crate::state::{Focus, Letter};
use crate::ui::TerminalSurface;

/// Interactive browser plus the terminal-only navigation state.
#[derive(Debug)]
pub struct Session {
    /// Browser drawing into the terminal surface.
    pub browser: PackageBrowser<TerminalSurface>,
    /// Pane receiving key input.
    pub focus: Focus,
    /// Index of the letter under the cursor in the letter row.
    pub letter_cursor: usize,
}

impl Session {
    /// Start a session in the loading state with the search pane focused.
    pub fn new() -> Self {
        Self {
            browser: PackageBrowser::new(TerminalSurface::default()),
            focus: Focus::Search,
            letter_cursor: 0,
        }
    }

    /// What: Apply one key press.
    ///
    /// Inputs:
    /// - `key`: Key event from the terminal
    ///
    /// Output:
    /// - `true` when the session should end.
    ///
    /// Details:
    /// - Esc and Ctrl+C quit; Tab/BackTab switch panes.
    /// - Search pane: characters and Backspace edit the query.
    /// - Letter row: Left/Right move, Enter/Space toggle the letter under the
    ///   cursor, a letter key toggles that letter directly.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return true;
        }
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Search => Focus::Letters,
                    Focus::Letters => Focus::Search,
                };
            }
            _ => match self.focus {
                Focus::Search => self.handle_search_key(key),
                Focus::Letters => self.handle_letter_key(key),
            },
        }
        false
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let mut input = self.browser.target().input.clone();
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                input.push(c);
            }
            KeyCode::Backspace => {
                if input.pop().is_none() {
                    return;
                }
            }
            _ => return,
        }
        self.browser.set_query(&input);
    }

    fn handle_letter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.letter_cursor = self.letter_cursor.saturating_sub(1),
            KeyCode::Right => self.letter_cursor = (self.letter_cursor + 1).min(25),
            KeyCode::Home => self.letter_cursor = 0,
            KeyCode::End => self.letter_cursor = 25,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(letter) = Letter::from_index(self.letter_cursor) {
                    self.browser.toggle_letter(letter);
                }
            }
            KeyCode::Char(c) => {
                if let Some(letter) = Letter::new(c) {
                    self.letter_cursor = letter.index();
                    self.browser.toggle_letter(letter);
                }
            }
            _ => {}
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PackageRecord, Status};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ready_session() -> Session {
        let mut s = Session::new();
        s.browser.finish_load(Ok(vec![
            PackageRecord::named("dplyr").with_score(9.5),
            PackageRecord::named("data.table").with_score(9.1),
            PackageRecord::named("ggplot2").with_title("Plotting"),
        ]));
        s
    }

    #[test]
    /// What: Typing edits the query and filters
    ///
    /// - Input: Type "da", then Backspace
    /// - Output: One match, then two ("d" matches dplyr and data.table)
    fn typing_filters_results() {
        let mut s = ready_session();
        s.handle_key(press(KeyCode::Char('d')));
        s.handle_key(press(KeyCode::Char('a')));
        assert_eq!(s.browser.target().status, Some(Status::Found(1)));
        s.handle_key(press(KeyCode::Backspace));
        assert_eq!(s.browser.target().input, "d");
        assert_eq!(s.browser.target().status, Some(Status::Found(2)));
    }

    #[test]
    /// What: Letter row navigation and toggling
    ///
    /// - Input: Tab, press G, press G again, Right and Enter
    /// - Output: G active, then none, then H active
    fn letter_row_toggles() {
        let mut s = ready_session();
        s.handle_key(press(KeyCode::Tab));
        assert_eq!(s.focus, Focus::Letters);
        s.handle_key(press(KeyCode::Char('g')));
        assert_eq!(s.browser.filter().active_letter, Letter::new('G'));
        assert_eq!(s.browser.target().status, Some(Status::Found(1)));
        s.handle_key(press(KeyCode::Char('g')));
        assert_eq!(s.browser.filter().active_letter, None);
        s.handle_key(press(KeyCode::Right));
        s.handle_key(press(KeyCode::Enter));
        assert_eq!(s.browser.filter().active_letter, Letter::new('H'));
        assert_eq!(s.browser.target().status, Some(Status::Found(0)));
    }

    #[test]
    /// What: Quit keys
    ///
    /// - Input: Esc, Ctrl+C, plain 'c'
    /// - Output: quit, quit, no quit
    fn quit_keys() {
        let mut s = Session::new();
        assert!(s.handle_key(press(KeyCode::Esc)));
        assert!(s.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!s.handle_key(press(KeyCode::Char('c'))));
    }
}
