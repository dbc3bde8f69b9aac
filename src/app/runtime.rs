use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use super::session::Session;
use super::terminal::{restore_terminal, setup_terminal};
use crate::sources::{self, DataSource, LoadError};
use crate::state::{Letter, PackageRecord};
use crate::ui::terminal::draw;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Spawn the blocking thread that forwards terminal events.
///
/// Inputs:
/// - `event_tx`: Channel receiving terminal events
/// - `cancelled`: Flag set by the runtime on exit
///
/// Details:
/// - Uses a 50ms poll timeout so the thread notices cancellation promptly.
fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                // No event or transient poll error: loop re-checks the flag
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// Sets the event thread's cancel flag when dropped, so every exit path of
/// the event loop stops the thread.
struct CancelOnDrop(Arc<AtomicBool>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// What: Spawn the one-time data load.
///
/// Inputs:
/// - `source`: Data location
/// - `load_tx`: Channel receiving the single load result
fn spawn_loader(
    source: DataSource,
    load_tx: mpsc::UnboundedSender<std::result::Result<Vec<PackageRecord>, LoadError>>,
) {
    tokio::spawn(async move {
        let result = sources::load(source).await;
        let _ = load_tx.send(result);
    });
}

/// What: Run the interactive terminal browser until the user quits.
///
/// Inputs:
/// - `source`: Data location
/// - `query`: Initial search text
/// - `letter`: Initial first-letter filter
///
/// Output:
/// - `Ok(())` on normal exit; `Err` if the terminal could not be set up or drawn.
///
/// Details:
/// - The terminal is restored on every exit path after setup succeeded.
pub async fn run(source: DataSource, query: Option<String>, letter: Option<Letter>) -> Result<()> {
    setup_terminal()?;
    let result = event_loop(source, query, letter).await;
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    result
}

async fn event_loop(
    source: DataSource,
    query: Option<String>,
    letter: Option<Letter>,
) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let mut session = Session::new();
    if let Some(q) = &query {
        session.browser.set_query(q);
    }
    if let Some(l) = letter {
        session.letter_cursor = l.index();
        session.browser.toggle_letter(l);
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (load_tx, mut load_rx) = mpsc::unbounded_channel();
    let cancelled = Arc::new(AtomicBool::new(false));

    tracing::info!(source = %source, "loading packages");
    spawn_loader(source, load_tx);
    spawn_event_thread(event_tx, Arc::clone(&cancelled));
    let _cancel_guard = CancelOnDrop(cancelled);

    loop {
        terminal.draw(|f| {
            draw(
                f,
                session.browser.target(),
                session.focus,
                session.letter_cursor,
            );
        })?;

        select! {
            Some(result) = load_rx.recv() => {
                session.browser.finish_load(result);
            }
            Some(ev) = event_rx.recv() => {
                if let CEvent::Key(key) = ev
                    && session.handle_key(key)
                {
                    break;
                }
            }
            else => break,
        }
    }

    tracing::info!("browser closed");
    Ok(())
}
