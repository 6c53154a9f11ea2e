//! newswire-tui — a paginated terminal viewer for a JSON news API.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  FetchMsg  ┌──────────┐  draw()  ┌──────────┐
//! │ fetch.rs │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (thread) │  (channel) │ (state)  │          │ (render) │
//! └──────────┘            └──────────┘          └──────────┘
//!                              ▲
//!                              │ handle_key_event()
//!                         ┌──────────┐
//!                         │ input.rs │
//!                         └──────────┘
//! ```
//!
//! * **`feed`** — the `Article` model and the image filter.
//! * **`fetch`** — the endpoint config, error taxonomy, and the one-shot
//!   background fetch thread.
//! * **`pager`** — fixed-size pagination over the filtered feed.
//! * **`app`** — owns all application state and the Loading/Ready/Error
//!   lifecycle.
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`main`** — wires everything together: read config, set up the
//!   terminal, and run the event loop.

mod app;
mod feed;
mod fetch;
mod input;
mod pager;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use fetch::NewsEndpoint;
use input::Action;

const DEFAULT_BASE_URL: &str = "https://api.currentsapi.services/v1";
const DEFAULT_LANGUAGE: &str = "hi";

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.  This prevents the common TUI bug where a panic leaves the
/// terminal in a broken state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.  Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();

    // -- read configuration --------------------------------------------------
    // The credential comes from the process boundary and is injected into
    // the endpoint; nothing below this point reads ambient state.
    let language = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LANGUAGE.into());
    let api_key = std::env::var("CURRENTS_API_KEY")
        .context("CURRENTS_API_KEY must be set to your news API key")?;
    let endpoint = NewsEndpoint::new(DEFAULT_BASE_URL, language, api_key);

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new();

    // -- start the first fetch -----------------------------------------------
    let mut rx = fetch::spawn(endpoint.clone(), app.begin_fetch());

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Drain any fetch results; stale generations are dropped by the app.
    //   2. Render the UI.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Process fetch results
        while let Ok(msg) = rx.try_recv() {
            app.apply_fetch(msg);
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if input::handle_key_event(&mut app, key) == Action::Refresh {
                    // New generation; any in-flight result from the old
                    // receiver would be stale and is discarded on arrival.
                    rx = fetch::spawn(endpoint.clone(), app.begin_fetch());
                }
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
