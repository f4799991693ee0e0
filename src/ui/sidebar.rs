use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

const SIDEBAR_WIDTH: u16 = 32;

/// Collapsible side panel: either open at a fixed width or fully closed.
#[derive(Debug, Default)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn width(&self) -> u16 {
        if self.open {
            SIDEBAR_WIDTH
        } else {
            0
        }
    }
}

pub fn draw_sidebar(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("wstail")
        .style(Style::default().fg(Color::LightYellow).bg(Color::Black));

    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(7), Constraint::Min(1)].as_ref())
        .split(area);

    // Key bindings
    let keys = [
        ("s", "toggle sidebar"),
        ("r", "refresh status"),
        ("↑/↓", "scroll"),
        ("PgUp/PgDn", "page"),
        ("q", "quit"),
    ];
    let items: Vec<ListItem> = keys
        .iter()
        .map(|(key, action)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<10}", key),
                    Style::default()
                        .fg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let key_list = List::new(items).block(Block::default().title("Keys"));
    f.render_widget(key_list, chunks[0]);

    // Server status (refreshed with 'r')
    let mut status_text = if app.status_panel.content.is_empty() {
        "(no status)".to_string()
    } else {
        app.status_panel.content.clone()
    };
    if let Some(ts) = app.status_panel.last_refresh {
        status_text.push_str(&format!("\n\nupdated {}", ts.format("%H:%M:%S")));
    }
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::TOP).title("Server Status"))
        .wrap(Wrap { trim: true });
    f.render_widget(status, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_starts_closed() {
        let sidebar = Sidebar::new();
        assert!(!sidebar.is_open());
        assert_eq!(sidebar.width(), 0);
    }

    #[test]
    fn test_toggle_flips_between_two_states() {
        let mut sidebar = Sidebar::new();
        sidebar.toggle();
        assert!(sidebar.is_open());
        assert_eq!(sidebar.width(), SIDEBAR_WIDTH);
        sidebar.toggle();
        assert_eq!(sidebar.width(), 0);
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let mut sidebar = Sidebar::new();
        sidebar.open();
        sidebar.open();
        assert!(sidebar.is_open());
        sidebar.close();
        sidebar.close();
        assert!(!sidebar.is_open());
    }
}
