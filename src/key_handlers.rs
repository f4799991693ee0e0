use crate::app::{App, AppState};
use crate::config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::error;

pub async fn handle_viewing_input(key: KeyEvent, app: &mut App) {
    // Any key outside the sidebar toggle closes an open sidebar, matching
    // a click elsewhere on the page.
    if app.sidebar.is_open() && key.code != KeyCode::Char('s') {
        app.sidebar.close();
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.state = AppState::QuitConfirm;
        }
        KeyCode::Char('s') => {
            app.sidebar.toggle();
        }
        KeyCode::Char('r') => {
            let url = config::get_config().status_endpoint();
            // Failures are logged, never rendered.
            if let Err(e) = app.status_panel.refresh(&url).await {
                error!("status refresh failed: {}", e);
            }
        }
        KeyCode::Up => app.log_view.scroll_up(),
        KeyCode::Down => app.log_view.scroll_down(),
        KeyCode::PageUp => app.log_view.page_up(),
        KeyCode::PageDown => app.log_view.page_down(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.state = AppState::QuitConfirm;
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Viewing;
        }
        _ => {}
    }
}
