//! Core value types used by the package browser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

/// Description shown on a card whose record carries no `title`.
pub const NO_DESCRIPTION: &str = "No description";
/// Link target used when a record carries no `url`.
pub const NO_URL: &str = "#";
/// Score badge text used when a record has no numeric `score`.
pub const NO_SCORE: &str = "N/A";
/// Maximum number of cards rendered at once. The count line is not capped.
pub const DISPLAY_LIMIT: usize = 50;

/// One package entry from a category data file.
///
/// Optional fields are tolerant: values of the wrong JSON type (or empty
/// strings) are treated as absent instead of failing the whole record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PackageRecord {
    /// Package name; display identity and filter key.
    #[serde(deserialize_with = "required_name")]
    pub package_name: String,
    /// One-line description.
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    /// Link to the package home page or docs.
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    /// Ranking value, only kept when it is a finite JSON number.
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
}

impl PackageRecord {
    /// What: Build a record carrying only a name.
    ///
    /// Inputs:
    /// - `name`: Package name
    ///
    /// Output:
    /// - Record with every optional field unset.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            package_name: name.into(),
            title: None,
            url: None,
            score: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the link target.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the score.
    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

fn required_name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) if !s.is_empty() => Ok(s),
        _ => Err(D::Error::custom("package_name must be a non-empty string")),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_score<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// A single alphabet letter `A`-`Z` used by the first-letter filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// What: Build a letter from an ASCII alphabetic character.
    ///
    /// Inputs:
    /// - `c`: Character in `a-z` or `A-Z`
    ///
    /// Output:
    /// - `Some(Letter)` normalized to upper case; `None` for anything else.
    pub const fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Iterate the 26 letters in alphabetical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }

    /// Upper-case character for this letter.
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet (`A` = 0).
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Letter at `index` in the alphabet, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|i| *i < 26)
            .map(|i| Self(b'A' + i))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c).ok_or_else(|| format!("not a letter A-Z: {s:?}")),
            _ => Err(format!("expected a single letter A-Z, got {s:?}")),
        }
    }
}

/// Current query and first-letter filter of a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Lower-cased, trimmed search text. Empty means no text filter.
    pub query: String,
    /// Letter currently used as first-letter filter, if any.
    pub active_letter: Option<Letter>,
}

impl FilterState {
    /// What: Store a new search text.
    ///
    /// Inputs:
    /// - `raw`: Text as typed by the user
    ///
    /// Output:
    /// - Updates `query` with the trimmed, lower-cased text.
    pub fn set_query(&mut self, raw: &str) {
        self.query = crate::logic::normalize_query(raw);
    }

    /// What: Toggle the first-letter filter.
    ///
    /// Inputs:
    /// - `letter`: Letter whose control was activated
    ///
    /// Output:
    /// - The active letter after the toggle.
    ///
    /// Details:
    /// - Activating the already active letter clears the filter.
    pub fn toggle_letter(&mut self, letter: Letter) -> Option<Letter> {
        self.active_letter = if self.active_letter == Some(letter) {
            None
        } else {
            Some(letter)
        };
        self.active_letter
    }
}

/// Lifecycle of a browser's single data load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Load in flight; nothing to show yet.
    Loading,
    /// Packages available.
    Ready,
    /// Load failed; the message is kept for logs and diagnostics.
    Failed(String),
}

/// Status line shown above the cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Data not loaded yet.
    Loading,
    /// Size of the full filtered set.
    Found(usize),
    /// Data could not be loaded.
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading packages..."),
            Self::Found(n) => write!(f, "Found {n} packages"),
            Self::Failed => f.write_str("Error loading packages."),
        }
    }
}

/// Display-ready card for one package, with defaults already applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Package name shown as the link text.
    pub name: String,
    /// Link target (`#` when unknown).
    pub href: String,
    /// Score badge text (`N/A` when unknown).
    pub score: String,
    /// Description line (`No description` when unknown).
    pub description: String,
}

/// One of the 26 letter toggle controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterControl {
    /// Letter carried by the control.
    pub letter: Letter,
    /// Whether this control is the active filter.
    pub active: bool,
}

/// Which pane of the terminal browser receives key input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the search text.
    #[default]
    Search,
    /// Keys move over and toggle letter controls.
    Letters,
}

/// Everything a render target needs to draw the browser once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserView {
    /// Search input text as typed.
    pub input: String,
    /// Always 26 controls, `A` through `Z`.
    pub letters: Vec<LetterControl>,
    /// Count or load status.
    pub status: Status,
    /// At most [`DISPLAY_LIMIT`] cards in original list order.
    pub cards: Vec<Card>,
}
