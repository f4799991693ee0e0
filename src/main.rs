use anyhow::Result;
use log::error;

use wstail::{
    config, logging,
    stream::{LogStream, StreamEvent},
    ui, App,
};

#[tokio::main]
async fn main() -> Result<()> {
    config::initialize_config()?;
    let cfg = config::get_config();

    // Keep the handle alive so the log file stays open.
    let _logger = logging::init_logging(&cfg.log_level)?;

    let mut app = App::new();

    // One connection per run. If it cannot be established the viewer still
    // starts; it just never receives a line. No retry is scheduled.
    match LogStream::open(&cfg.ws_endpoint()).await {
        Ok((stream, events)) => app.attach_stream(stream, events),
        Err(e) => {
            error!("could not open log stream: {}", e);
            // A failed handshake surfaces as an error followed by close,
            // leaving the connection in its terminal state.
            app.handle_stream_event(StreamEvent::Error(e.to_string()));
            app.handle_stream_event(StreamEvent::Closed);
        }
    }

    ui::run_ui(app).await
}
