// src/ui.rs

pub mod footer;
pub mod header;
pub mod quit_confirm;
pub mod sidebar;

use crate::app::{App, AppState};
use crate::key_handlers::{handle_quit_confirm_input, handle_viewing_input};
use crate::log_view::draw_log_view;
use crate::stream::StreamEvent;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use anyhow::Result;
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

/// Enum for different types of events.
enum Event {
    Input(CEvent),
    Tick,
}

/// One multiplexed occurrence picked up by the main loop.
enum LoopEvent {
    Input(CEvent),
    Tick,
    Stream(StreamEvent),
    StreamEnded,
}

/// Runs the terminal UI until the user quits.
pub async fn run_ui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Main loop of the application.
///
/// All mutation happens on this single task: terminal input, ticks, and
/// stream events are multiplexed through one `select!`, and each arm runs
/// to completion before the next event is taken. Appends therefore happen
/// strictly in delivery order.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Create a channel to communicate input events
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Spawn a task to read user input
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            // Poll for input with timeout
            let timeout = Duration::from_millis(100);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(event) = event::read() {
                    if tx.send(Event::Input(event)).await.is_err() {
                        return;
                    }
                }
            }

            // Send tick event every 250ms
            if last_tick.elapsed() >= Duration::from_millis(250) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        terminal.draw(|f| draw(f, &mut app))?;

        // The select only picks the next occurrence; all handling happens
        // below, once the borrows inside the select are released.
        let loop_event = tokio::select! {
            Some(event) = rx.recv() => match event {
                Event::Input(e) => LoopEvent::Input(e),
                Event::Tick => LoopEvent::Tick,
            },
            maybe_event = recv_stream_event(&mut app.stream_events) => match maybe_event {
                Some(event) => LoopEvent::Stream(event),
                None => LoopEvent::StreamEnded,
            },
            else => break,
        };

        match loop_event {
            LoopEvent::Input(CEvent::Key(key)) => match app.state {
                AppState::Viewing => handle_viewing_input(key, &mut app).await,
                AppState::QuitConfirm => handle_quit_confirm_input(key, &mut app),
                AppState::Quit => {}
            },
            LoopEvent::Input(_) => {}
            LoopEvent::Tick => {}
            LoopEvent::Stream(event) => app.handle_stream_event(event),
            // Reader task is gone; park the receiver so the select arm
            // stops firing.
            LoopEvent::StreamEnded => app.stream_events = None,
        }

        if app.state == AppState::Quit {
            break;
        }
    }

    Ok(())
}

/// Waits for the next stream event, or forever if no stream is attached.
async fn recv_stream_event(
    events: &mut Option<mpsc::UnboundedReceiver<StreamEvent>>,
) -> Option<StreamEvent> {
    match events.as_mut() {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Renders the UI components.
fn draw(f: &mut Frame<'_>, app: &mut App) {
    let area = f.area();

    // Sidebar takes a fixed-width column when open, nothing when closed.
    let (sidebar_area, main_area) = if app.sidebar.is_open() {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(app.sidebar.width()), Constraint::Min(0)].as_ref())
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(6), // Header
                Constraint::Min(1),    // Log region
                Constraint::Length(1), // Footer
            ]
            .as_ref(),
        )
        .split(main_area);

    header::draw_header(f, chunks[0]);
    draw_log_view(f, chunks[1], &mut app.log_view);
    footer::draw_footer(f, chunks[2], app);

    if let Some(sidebar_area) = sidebar_area {
        sidebar::draw_sidebar(f, sidebar_area, app);
    }

    if app.state == AppState::QuitConfirm {
        quit_confirm::draw_quit_confirm(f, area);
    }
}
