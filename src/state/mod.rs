//! Browser state and display value types.

pub mod types;

pub use types::{
    BrowserView, Card, DISPLAY_LIMIT, FilterState, Focus, Letter, LetterControl, LoadState, NO_DESCRIPTION,
    NO_SCORE, NO_URL, PackageRecord, Status,
};
