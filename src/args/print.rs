//! Headless one-shot rendering of the package browser.

use crate::args::definition::OutputFormat;
use crate::browser::PackageBrowser;
use crate::sources::{self, DataSource};
use crate::state::{Letter, LoadState};
use crate::ui::{HtmlSurface, RenderTarget, text::TextSurface};

/// What: Load, filter and render a browser into a target.
///
/// Inputs:
/// - `target`: Render target
/// - `source`: Data location
/// - `query`: Optional search text
/// - `letter`: Optional first-letter filter
///
/// Output:
/// - The browser after the load and filter events were applied.
pub async fn run_once<T: RenderTarget>(
    target: T,
    source: DataSource,
    query: Option<&str>,
    letter: Option<Letter>,
) -> PackageBrowser<T> {
    let mut browser = PackageBrowser::new(target);
    browser.finish_load(sources::load(source).await);
    if let Some(q) = query {
        browser.set_query(q);
    }
    if let Some(l) = letter {
        browser.toggle_letter(l);
    }
    browser
}

/// What: Print the filtered view of a data file.
///
/// Inputs:
/// - `source`: Data location
/// - `query`: Optional search text
/// - `letter`: Optional first-letter filter
/// - `format`: Text or HTML output
///
/// Output:
/// - Exit code: `0` when the data loaded, `1` when the error view was printed.
pub async fn handle_print(
    source: DataSource,
    query: Option<&str>,
    letter: Option<Letter>,
    format: OutputFormat,
) -> i32 {
    tracing::info!(source = %source, ?format, "Print mode requested from CLI");
    let (doc, state) = match format {
        OutputFormat::Text => {
            let b = run_once(TextSurface::new(), source, query, letter).await;
            (b.target().document(), b.load_state().clone())
        }
        OutputFormat::Html => {
            let b = run_once(HtmlSurface::new(), source, query, letter).await;
            (b.target().document(), b.load_state().clone())
        }
    };
    print!("{doc}");
    match state {
        LoadState::Failed(msg) => {
            eprintln!("{msg}");
            1
        }
        LoadState::Ready | LoadState::Loading => 0,
    }
}
