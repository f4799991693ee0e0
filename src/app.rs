use log::{error, info};
use tokio::sync::mpsc;

use crate::log_view::LogView;
use crate::status_panel::StatusPanel;
use crate::stream::{ConnState, LogStream, StreamEvent};
use crate::ui::sidebar::Sidebar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Viewing,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub state: AppState,
    pub log_view: LogView,
    pub sidebar: Sidebar,
    pub status_panel: StatusPanel,
    pub conn_state: ConnState,
    pub stream: Option<LogStream>,
    pub stream_events: Option<mpsc::UnboundedReceiver<StreamEvent>>,
}

impl App {
    pub fn new() -> App {
        App {
            state: AppState::Viewing,
            log_view: LogView::new(),
            sidebar: Sidebar::new(),
            status_panel: StatusPanel::new(),
            conn_state: ConnState::Connecting,
            stream: None,
            stream_events: None,
        }
    }

    /// Hands the app ownership of an opened stream and its event channel.
    pub fn attach_stream(
        &mut self,
        stream: LogStream,
        events: mpsc::UnboundedReceiver<StreamEvent>,
    ) {
        self.stream = Some(stream);
        self.stream_events = Some(events);
    }

    /// Applies one stream event: lines go into the buffer, lifecycle events
    /// go to the developer log. Nothing here touches what the user sees
    /// besides the appended line itself; a dead stream simply stops
    /// producing lines.
    pub fn handle_stream_event(&mut self, event: StreamEvent) {
        // Closed is terminal; nothing observed afterward mutates the buffer.
        if self.conn_state == ConnState::Closed {
            return;
        }

        self.conn_state = self.conn_state.apply(&event);

        match event {
            StreamEvent::Opened => info!("log stream connection established"),
            StreamEvent::Line(line) => self.log_view.append(line),
            StreamEvent::Error(e) => error!("log stream error: {}", e),
            StreamEvent::Closed => info!("log stream connection closed"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> StreamEvent {
        StreamEvent::Line(s.to_string())
    }

    #[test]
    fn test_lines_append_in_order() {
        let mut app = App::new();
        app.handle_stream_event(StreamEvent::Opened);
        app.handle_stream_event(line("line1"));
        app.handle_stream_event(line("line2"));

        assert_eq!(app.conn_state, ConnState::Open);
        assert_eq!(app.log_view.rendered(), "line1\nline2\n");
    }

    #[test]
    fn test_single_line_scenario() {
        let mut app = App::new();
        app.handle_stream_event(StreamEvent::Opened);
        app.handle_stream_event(line("Build started"));

        assert_eq!(app.log_view.rendered(), "Build started\n");
    }

    #[test]
    fn test_empty_line_is_kept() {
        let mut app = App::new();
        app.handle_stream_event(StreamEvent::Opened);
        app.handle_stream_event(line(""));

        assert_eq!(app.log_view.rendered(), "\n");
        assert_eq!(app.log_view.len(), 1);
    }

    #[test]
    fn test_buffer_frozen_after_close() {
        let mut app = App::new();
        app.handle_stream_event(StreamEvent::Opened);
        app.handle_stream_event(line("line1"));
        app.handle_stream_event(StreamEvent::Closed);

        assert_eq!(app.conn_state, ConnState::Closed);
        assert_eq!(app.log_view.rendered(), "line1\n");

        app.handle_stream_event(line("too late"));
        assert_eq!(app.log_view.rendered(), "line1\n");
    }

    #[test]
    fn test_error_does_not_close_or_append() {
        let mut app = App::new();
        app.handle_stream_event(StreamEvent::Opened);
        app.handle_stream_event(line("line1"));
        app.handle_stream_event(StreamEvent::Error("connection reset".to_string()));

        // The error itself never substitutes for Closed.
        assert_eq!(app.conn_state, ConnState::Open);
        assert_eq!(app.log_view.rendered(), "line1\n");

        app.handle_stream_event(StreamEvent::Closed);
        assert_eq!(app.conn_state, ConnState::Closed);
    }
}
