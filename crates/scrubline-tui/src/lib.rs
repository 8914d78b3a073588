//! scrubline-tui: Terminal UI for the slider/timeline widget
//!
//! This crate provides the rendering and input layer on top of
//! `scrubline-core`:
//! - Theme and per-frame layout shared by rendering and hit-testing
//! - Pointer normalization and the drag session plumbing
//! - The slider row, timeline panel, and tooltip widgets
//! - Snap-then-glide timeline scrolling
//! - A demo shell that mounts one widget and runs the event loop

pub mod app;
pub mod event;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod slider;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod timeline;
pub mod tooltip;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use scrubline_core;
pub use theme::Theme;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scrubline_core::SliderConfig;
use std::io::{self, stdout};
use std::time::Instant;

/// Frame tick rate in milliseconds (~30 Hz), fast enough for the
/// 100ms-floor animation cadence and the scroll glide.
const TICK_RATE_MS: u64 = 33;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the demo shell with one mounted widget.
///
/// Sets up the terminal, runs the event loop until quit, and restores
/// the terminal on exit.
pub async fn run_app(
    config: SliderConfig,
    theme: Theme,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, theme)?;
    let mut events = EventHandler::new(TICK_RATE_MS);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            app.render(area, frame.buffer_mut());
        })?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    app.handle_action(key_to_action(key));
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = input::normalize_mouse(mouse) {
                        app.handle_pointer(pointer);
                    }
                }
                Event::Tick => {
                    app.on_tick(Instant::now());
                }
                Event::Resize(_, _) => {
                    // Next draw recomputes the layout from the new area.
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
