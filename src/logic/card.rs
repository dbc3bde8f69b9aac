//! Conversion from package records to display cards.

use crate::state::{Card, NO_DESCRIPTION, NO_SCORE, NO_URL, PackageRecord};

/// What: Format a score badge.
///
/// Inputs:
/// - `score`: Optional numeric score
///
/// Output:
/// - One decimal place for finite numbers; `N/A` otherwise.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => format!("{s:.1}"),
        _ => NO_SCORE.to_string(),
    }
}

impl From<&PackageRecord> for Card {
    fn from(rec: &PackageRecord) -> Self {
        Self {
            name: rec.package_name.clone(),
            href: rec.url.clone().unwrap_or_else(|| NO_URL.to_string()),
            score: format_score(rec.score),
            description: rec
                .title
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Score formatting
    ///
    /// - Input: Whole, fractional, missing and non-finite scores
    /// - Output: One decimal place or `N/A`
    fn score_badge_text() {
        assert_eq!(format_score(Some(9.0)), "9.0");
        assert_eq!(format_score(Some(9.46)), "9.5");
        assert_eq!(format_score(Some(12.04)), "12.0");
        assert_eq!(format_score(None), "N/A");
        assert_eq!(format_score(Some(f64::NAN)), "N/A");
    }

    #[test]
    /// What: Defaults for a bare record
    ///
    /// - Input: Record with only a name
    /// - Output: `#` link, `N/A` score, `No description`
    fn bare_record_uses_placeholders() {
        let card = Card::from(&PackageRecord::named("sf"));
        assert_eq!(card.name, "sf");
        assert_eq!(card.href, "#");
        assert_eq!(card.score, "N/A");
        assert_eq!(card.description, "No description");
    }

    #[test]
    /// What: Present fields are carried over
    ///
    /// - Input: Record with title, url and score
    /// - Output: Card fields mirror the record
    fn full_record_is_carried_over() {
        let rec = PackageRecord::named("ggplot2")
            .with_title("Plotting")
            .with_url("https://ggplot2.tidyverse.org")
            .with_score(9.94);
        let card = Card::from(&rec);
        assert_eq!(card.href, "https://ggplot2.tidyverse.org");
        assert_eq!(card.score, "9.9");
        assert_eq!(card.description, "Plotting");
    }
}
