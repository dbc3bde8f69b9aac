//! End-to-end behavior of the package browser through its public API.

use pkgshelf::PackageBrowser;
use pkgshelf::sources::{LoadError, parse_records};
use pkgshelf::state::{DISPLAY_LIMIT, Letter, LoadState, PackageRecord, Status};
use pkgshelf::ui::HtmlSurface;
use pkgshelf::ui::text::TextSurface;

fn letter(c: char) -> Letter {
    Letter::new(c).expect("valid letter")
}

fn names(b: &PackageBrowser<TextSurface>) -> Vec<String> {
    b.view().cards.into_iter().map(|c| c.name).collect()
}

fn r_packages() -> Vec<PackageRecord> {
    vec![
        PackageRecord::named("dplyr").with_score(9.5),
        PackageRecord::named("data.table").with_score(9.1),
        PackageRecord::named("ggplot2").with_title("Plotting"),
    ]
}

#[test]
/// What: Query, letter and cleared query on the reference list
///
/// - Input: dplyr, data.table, ggplot2; query "da", then letter D, then empty query
/// - Output: [data.table], [data.table], [dplyr, data.table]
fn query_then_letter_then_clear() {
    let mut b = PackageBrowser::with_packages(TextSurface::new(), r_packages());

    b.set_query("da");
    assert_eq!(names(&b), vec!["data.table"]);
    assert_eq!(b.view().status, Status::Found(1));

    b.toggle_letter(letter('D'));
    assert_eq!(names(&b), vec!["data.table"]);
    assert_eq!(b.view().status, Status::Found(1));

    b.set_query("");
    assert_eq!(names(&b), vec!["dplyr", "data.table"]);
    assert_eq!(b.view().status, Status::Found(2));
}

#[test]
/// What: Record without score, title and url gets all placeholders
///
/// - Input: Data file entry with only a name
/// - Output: Card shows N/A, No description and links to #
fn bare_record_placeholders_in_markup() {
    let recs = parse_records(r#"[{"package_name":"ggplot2"}]"#).expect("valid");
    let b = PackageBrowser::with_packages(HtmlSurface::new(), recs);
    let card = &b.view().cards[0];
    assert_eq!(card.score, "N/A");
    assert_eq!(card.description, "No description");
    assert_eq!(card.href, "#");
    let html = b.target().cards_html();
    assert!(html.contains("<a href=\"#\" target=\"_blank\">ggplot2</a>"));
    assert!(html.contains("<span class=\"package-score\">N/A</span>"));
}

#[test]
/// What: Empty list is a valid, empty render
///
/// - Input: No packages, then a query and a letter
/// - Output: Count 0 and no cards each time
fn empty_list_renders_zero() {
    let mut b = PackageBrowser::with_packages(HtmlSurface::new(), Vec::new());
    assert_eq!(b.view().status, Status::Found(0));
    assert!(b.view().cards.is_empty());
    b.set_query("x");
    b.toggle_letter(letter('X'));
    assert_eq!(b.view().status, Status::Found(0));
    assert!(b.target().container_html().contains("Found 0 packages"));
    assert!(b.target().cards_html().is_empty());
}

#[test]
/// What: Failed load shows the error and tolerates later events
///
/// - Input: Parse failure, then query and letter toggles
/// - Output: Error markup, empty package list, status stays failed
fn failed_load_shows_error() {
    let mut b = PackageBrowser::new(HtmlSurface::new());
    let err = parse_records("not json").expect_err("invalid body");
    assert!(matches!(err, LoadError::Parse(_)));
    b.finish_load(Err(err));
    b.set_query("dplyr");
    b.toggle_letter(letter('D'));
    b.toggle_letter(letter('D'));
    assert!(b.packages().is_empty());
    assert!(matches!(b.load_state(), LoadState::Failed(_)));
    assert_eq!(b.target().container_html(), "<p>Error loading packages.</p>");
}

#[test]
/// What: Count is the full filtered size when more than the display limit match
///
/// - Input: 120 packages, 90 of them starting with "s"
/// - Output: Letter S shows count 90 with 50 cards, in list order
fn count_exceeds_display_limit() {
    let list: Vec<PackageRecord> = (0..120)
        .map(|i| {
            if i % 4 == 0 {
                PackageRecord::named(format!("tidy{i}"))
            } else {
                PackageRecord::named(format!("sp{i}"))
            }
        })
        .collect();
    let mut b = PackageBrowser::with_packages(HtmlSurface::new(), list);
    b.toggle_letter(letter('s'));
    let view = b.view();
    assert_eq!(view.status, Status::Found(90));
    assert_eq!(view.cards.len(), DISPLAY_LIMIT);
    assert_eq!(view.cards[0].name, "sp1");
    assert_eq!(view.cards[1].name, "sp2");
    assert_eq!(view.cards[2].name, "sp3");
    assert_eq!(view.cards[3].name, "sp5");
    assert_eq!(b.target().cards_html().matches("package-card").count(), DISPLAY_LIMIT);
    assert!(b.target().container_html().contains("Found 90 packages"));
}

#[test]
/// What: Letter toggle twice restores the unfiltered view
///
/// - Input: Toggle G twice
/// - Output: Same view as before the toggles, no active control
fn double_toggle_restores_view() {
    let mut b = PackageBrowser::with_packages(TextSurface::new(), r_packages());
    let before = b.view();
    b.toggle_letter(letter('G'));
    assert_eq!(names(&b), vec!["ggplot2"]);
    b.toggle_letter(letter('G'));
    assert_eq!(b.view(), before);
    assert!(b.view().letters.iter().all(|c| !c.active));
}

#[test]
/// What: Exactly one control active after switching letters
///
/// - Input: Toggle D then G
/// - Output: Only G active among 26 controls
fn switching_letters_keeps_one_active() {
    let mut b = PackageBrowser::with_packages(TextSurface::new(), r_packages());
    b.toggle_letter(letter('D'));
    b.toggle_letter(letter('G'));
    let view = b.view();
    assert_eq!(view.letters.len(), 26);
    let active: Vec<char> = view
        .letters
        .iter()
        .filter(|c| c.active)
        .map(|c| c.letter.as_char())
        .collect();
    assert_eq!(active, vec!['G']);
}
