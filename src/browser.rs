//! The package browser component.
//!
//! A [`PackageBrowser`] owns the loaded package list, the current filter state
//! and a render target. Every state change (load completion, query edit,
//! letter toggle) recomputes the filtered set and pushes a fresh view into the
//! target, so the target always reflects
//! `letter filter AND query filter` over the full list in load order.

use crate::logic::filter_packages;
use crate::sources::LoadError;
use crate::state::{
    BrowserView, Card, DISPLAY_LIMIT, FilterState, Letter, LetterControl, LoadState,
    PackageRecord, Status,
};
use crate::ui::RenderTarget;

/// Package list, filter state and the surface they are drawn on.
#[derive(Debug)]
pub struct PackageBrowser<T> {
    packages: Vec<PackageRecord>,
    filter: FilterState,
    input: String,
    state: LoadState,
    target: T,
}

impl<T: RenderTarget> PackageBrowser<T> {
    /// What: Create a browser waiting for its data.
    ///
    /// Inputs:
    /// - `target`: Surface to draw on
    ///
    /// Output:
    /// - Browser in the loading state; the target already shows the 26 letter
    ///   controls and the loading status.
    pub fn new(target: T) -> Self {
        let mut browser = Self {
            packages: Vec::new(),
            filter: FilterState::default(),
            input: String::new(),
            state: LoadState::Loading,
            target,
        };
        browser.render();
        browser
    }

    /// What: Create a browser with an already loaded list.
    ///
    /// Inputs:
    /// - `target`: Surface to draw on
    /// - `packages`: Full package list (may be empty)
    ///
    /// Output:
    /// - Ready browser showing the unfiltered list.
    pub fn with_packages(target: T, packages: Vec<PackageRecord>) -> Self {
        let mut browser = Self::new(target);
        browser.finish_load(Ok(packages));
        browser
    }

    /// What: Complete the one-time data load.
    ///
    /// Inputs:
    /// - `result`: Parsed package list or the load failure
    ///
    /// Output:
    /// - `true` if the result was applied; `false` if the browser already left
    ///   the loading state, in which case nothing changes.
    ///
    /// Details:
    /// - A failure keeps the package list empty and shows the error status;
    ///   filter operations keep working on the empty list afterwards.
    pub fn finish_load(&mut self, result: Result<Vec<PackageRecord>, LoadError>) -> bool {
        if self.state != LoadState::Loading {
            tracing::warn!("ignoring second load result; packages load once per browser");
            return false;
        }
        match result {
            Ok(packages) => {
                tracing::info!(count = packages.len(), "packages loaded");
                self.packages = packages;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load packages");
                self.state = LoadState::Failed(err.to_string());
            }
        }
        self.render();
        true
    }

    /// What: Handle a change of the search input.
    ///
    /// Inputs:
    /// - `text`: Full input text
    ///
    /// Output:
    /// - Updates the query and re-renders.
    pub fn set_query(&mut self, text: &str) {
        text.clone_into(&mut self.input);
        self.filter.set_query(text);
        tracing::debug!(query = %self.filter.query, "query changed");
        self.render();
    }

    /// What: Handle a click on a letter control.
    ///
    /// Inputs:
    /// - `letter`: Letter of the clicked control
    ///
    /// Output:
    /// - The active letter after the toggle; re-renders.
    pub fn toggle_letter(&mut self, letter: Letter) -> Option<Letter> {
        let active = self.filter.toggle_letter(letter);
        tracing::debug!(letter = %letter, active = ?active, "letter toggled");
        self.render();
        active
    }

    /// Every record matching the current filters, in load order, uncapped.
    pub fn filtered(&self) -> Vec<&PackageRecord> {
        filter_packages(&self.packages, &self.filter)
    }

    /// What: Compute the current view.
    ///
    /// Output:
    /// - Input text, 26 letter controls, status and at most [`DISPLAY_LIMIT`]
    ///   cards.
    ///
    /// Details:
    /// - The count in [`Status::Found`] is the size of the full filtered set,
    ///   even when only the first [`DISPLAY_LIMIT`] cards are included.
    pub fn view(&self) -> BrowserView {
        let letters = Letter::all()
            .map(|letter| LetterControl {
                letter,
                active: self.filter.active_letter == Some(letter),
            })
            .collect();
        let (status, cards) = match self.state {
            LoadState::Loading => (Status::Loading, Vec::new()),
            LoadState::Failed(_) => (Status::Failed, Vec::new()),
            LoadState::Ready => {
                let matches = self.filtered();
                let cards = matches
                    .iter()
                    .take(DISPLAY_LIMIT)
                    .map(|p| Card::from(*p))
                    .collect();
                (Status::Found(matches.len()), cards)
            }
        };
        BrowserView {
            input: self.input.clone(),
            letters,
            status,
            cards,
        }
    }

    /// Push the current view into the render target.
    pub fn render(&mut self) {
        let view = self.view();
        self.target.show_input(&view.input);
        self.target.show_letters(&view.letters);
        self.target.show_status(&view.status);
        self.target.show_cards(&view.cards);
    }

    /// Full package list as loaded.
    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    /// Current filter state.
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current load state.
    pub const fn load_state(&self) -> &LoadState {
        &self.state
    }

    /// Render target.
    pub const fn target(&self) -> &T {
        &self.target
    }

    /// Consume the browser, returning its render target.
    pub fn into_target(self) -> T {
        self.target
    }
}
