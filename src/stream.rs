// src/stream.rs

use futures::StreamExt;
use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::errors::{WstailError, WstailResult};

/// One event observed on the log stream, in transport delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// The handshake completed and the connection is ready.
    Opened,
    /// One log line, delivered verbatim. May be empty.
    Line(String),
    /// A transport-level failure. Does not replace `Closed`; a `Closed`
    /// event still follows.
    Error(String),
    /// The connection is gone. Terminal for this stream instance.
    Closed,
}

/// Observable connection states: Connecting → Open → Closed.
///
/// `Closed` is terminal; a dead stream never re-enters `Connecting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnState {
    Connecting,
    Open,
    Closed,
}

impl ConnState {
    /// Advances the state machine for one observed event. Errors are an
    /// orthogonal signal and leave the state untouched.
    pub fn apply(self, event: &StreamEvent) -> ConnState {
        match (self, event) {
            (ConnState::Connecting, StreamEvent::Opened) => ConnState::Open,
            (ConnState::Connecting | ConnState::Open, StreamEvent::Closed) => ConnState::Closed,
            (state, _) => state,
        }
    }
}

/// A single persistent connection to a server-pushed log stream.
///
/// `open()` hands back the stream handle together with the receiving end of
/// an event channel; a background reader task forwards every text frame as a
/// `StreamEvent::Line`. The handle owns the connection: dropping it (or
/// calling `close()`) tears the reader down, so tests can construct and
/// dispose of isolated instances.
///
/// There is no reconnection, backoff, or idle timeout. When the connection
/// drops, the stream is done.
#[derive(Debug)]
pub struct LogStream {
    reader: JoinHandle<()>,
}

impl LogStream {
    /// Connects to `endpoint` and spawns the reader task.
    ///
    /// The first event on the returned receiver is `Opened`; the last is
    /// always `Closed`. Lines arrive strictly in the order the transport
    /// delivers them.
    pub async fn open(
        endpoint: &str,
    ) -> WstailResult<(Self, mpsc::UnboundedReceiver<StreamEvent>)> {
        let (mut ws, _response) =
            connect_async(endpoint)
                .await
                .map_err(|source| WstailError::Connect {
                    endpoint: endpoint.to_string(),
                    source,
                })?;

        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(StreamEvent::Opened);

        let reader = tokio::spawn(async move {
            while let Some(msg) = ws.next().await {
                match msg {
                    Ok(Message::Text(line)) => {
                        if tx.send(StreamEvent::Line(line)).is_err() {
                            break;
                        }
                    }
                    Ok(Message::Close(frame)) => {
                        debug!("close frame received: {:?}", frame);
                        break;
                    }
                    // Ping/pong is answered by the library; binary frames
                    // carry no log lines.
                    Ok(_) => {}
                    Err(e) => {
                        let _ = tx.send(StreamEvent::Error(e.to_string()));
                        break;
                    }
                }
            }
            let _ = tx.send(StreamEvent::Closed);
        });

        Ok((Self { reader }, rx))
    }

    /// Tears the connection down. Equivalent to dropping the handle.
    pub fn close(self) {}
}

impl Drop for LogStream {
    fn drop(&mut self) {
        self.reader.abort();
    }
}
