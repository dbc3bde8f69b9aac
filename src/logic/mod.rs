//! Core non-UI logic: filtering and card formatting.

pub mod card;
pub mod filter;

pub use card::format_score;
pub use filter::{filter_packages, matches_letter, matches_query, normalize_query};
