use crate::state::{FilterState, Letter, PackageRecord};

/// What: Normalize raw search input into a query.
///
/// Inputs:
/// - `raw`: Text as typed
///
/// Output:
/// - Trimmed, lower-cased text.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// What: Text filter predicate.
///
/// Inputs:
/// - `record`: Package to test
/// - `query`: Already normalized query
///
/// Output:
/// - `true` when `query` is empty or occurs in the lower-cased package name.
pub fn matches_query(record: &PackageRecord, query: &str) -> bool {
    query.is_empty() || record.package_name.to_lowercase().contains(query)
}

/// What: First-letter filter predicate.
///
/// Inputs:
/// - `record`: Package to test
/// - `letter`: Active letter, or `None` for no letter filter
///
/// Output:
/// - `true` when no letter is active or the upper-cased first character of the
///   name is exactly that letter.
///
/// Details:
/// - Characters whose upper case form is more than one character (e.g. `ß`)
///   never match a single letter.
pub fn matches_letter(record: &PackageRecord, letter: Option<Letter>) -> bool {
    letter.is_none_or(|l| {
        record
            .package_name
            .chars()
            .next()
            .is_some_and(|c| c.to_uppercase().eq(std::iter::once(l.as_char())))
    })
}

/// What: Apply the letter and query filters to a package list.
///
/// Inputs:
/// - `packages`: Full list in load order
/// - `filter`: Current filter state
///
/// Output:
/// - Every matching record, in the original relative order.
///
/// Details:
/// - Both predicates are independent; the result does not depend on the order
///   in which the filters were set. No truncation happens here.
pub fn filter_packages<'a>(
    packages: &'a [PackageRecord],
    filter: &FilterState,
) -> Vec<&'a PackageRecord> {
    packages
        .iter()
        .filter(|p| matches_letter(p, filter.active_letter))
        .filter(|p| matches_query(p, &filter.query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(list: &[&'a PackageRecord]) -> Vec<&'a str> {
        list.iter().map(|p| p.package_name.as_str()).collect()
    }

    fn sample() -> Vec<PackageRecord> {
        vec![
            PackageRecord::named("dplyr").with_score(9.5),
            PackageRecord::named("data.table").with_score(9.1),
            PackageRecord::named("ggplot2").with_title("Plotting"),
            PackageRecord::named("DBI"),
            PackageRecord::named("readr"),
        ]
    }

    #[test]
    /// What: Query matching is case-insensitive substring matching
    ///
    /// - Input: Mixed case query "DA" after normalization, and "b"
    /// - Output: Matches keep list order
    fn query_filter_preserves_order() {
        let list = sample();
        let mut f = FilterState::default();
        f.set_query("  DA ");
        assert_eq!(f.query, "da");
        assert_eq!(names(&filter_packages(&list, &f)), vec!["data.table"]);

        f.set_query("b");
        assert_eq!(names(&filter_packages(&list, &f)), vec!["data.table", "DBI"]);
    }

    #[test]
    /// What: Letter filter compares upper-cased first characters
    ///
    /// - Input: Letter D over lower and upper case names
    /// - Output: dplyr, data.table, DBI in original order
    fn letter_filter_is_case_insensitive() {
        let list = sample();
        let f = FilterState {
            query: String::new(),
            active_letter: Letter::new('d'),
        };
        assert_eq!(
            names(&filter_packages(&list, &f)),
            vec!["dplyr", "data.table", "DBI"]
        );
    }

    #[test]
    /// What: Empty filters pass everything through
    ///
    /// - Input: Default filter state
    /// - Output: Full list, same order
    fn empty_filters_match_all() {
        let list = sample();
        assert_eq!(filter_packages(&list, &FilterState::default()).len(), list.len());
    }

    #[test]
    /// What: Letter and query compose with AND
    ///
    /// - Input: Letter R with query "a", letter G with query "a"
    /// - Output: readr only; nothing for G
    fn letter_and_query_compose() {
        let list = sample();
        let mut f = FilterState::default();
        f.toggle_letter(Letter::new('r').expect("letter"));
        f.set_query("a");
        assert_eq!(names(&filter_packages(&list, &f)), vec!["readr"]);

        f.toggle_letter(Letter::new('g').expect("letter"));
        assert!(filter_packages(&list, &f).is_empty());
    }

    #[test]
    /// What: Multi-character upper case forms never match a letter
    ///
    /// - Input: Name starting with `ß` against letter S
    /// - Output: No match
    fn sharp_s_does_not_match_s() {
        let rec = PackageRecord::named("ßtest");
        assert!(!matches_letter(&rec, Letter::new('s')));
        assert!(matches_letter(&rec, None));
    }
}
