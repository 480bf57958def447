//! TCP debug server

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::protocol::{self, DebugCommand, DebugResponse, ProtocolError};

/// Trait that the application implements to handle debug commands
pub trait DebugHandler: Send + Sync + 'static {
    fn handle_command(&mut self, cmd: DebugCommand) -> DebugResponse;
}

/// Decode a line and run it through the handler.
///
/// Returns None for blank lines.
pub fn handle_line(handler: &mut dyn DebugHandler, line: &str) -> Option<DebugResponse> {
    match protocol::parse_command(line) {
        Ok(cmd) => {
            log::debug!("Debug command: {:?}", cmd);
            Some(handler.handle_command(cmd))
        }
        Err(ProtocolError::Empty) => None,
        Err(e) => Some(DebugResponse::error(e.to_string())),
    }
}

/// Debug server handle - keep this alive to keep the server running
pub struct DebugServer {
    handle: tokio::task::JoinHandle<()>,
}

impl DebugServer {
    /// Start the debug server on the given port.
    /// Each command runs with the handler locked, so a mutation and the
    /// state it reports back are never interleaved with another client.
    /// Returns immediately -- server runs in background.
    pub fn start(handler: Arc<Mutex<dyn DebugHandler>>, port: u16) -> Self {
        let handle = tokio::spawn(async move {
            let addr = format!("127.0.0.1:{}", port);
            let listener = match TcpListener::bind(&addr).await {
                Ok(l) => {
                    log::info!("Debug server listening on {}", addr);
                    l
                }
                Err(e) => {
                    log::error!("Failed to bind debug server on {}: {}", addr, e);
                    return;
                }
            };

            loop {
                match listener.accept().await {
                    Ok((stream, peer)) => {
                        log::info!("Debug client connected from {}", peer);
                        let handler = handler.clone();
                        tokio::spawn(async move {
                            handle_connection(stream, handler).await;
                            log::info!("Debug client disconnected: {}", peer);
                        });
                    }
                    Err(e) => {
                        log::error!("Debug server accept error: {}", e);
                    }
                }
            }
        });

        Self { handle }
    }

    /// Stop accepting connections
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

async fn handle_connection(
    stream: tokio::net::TcpStream,
    handler: Arc<Mutex<dyn DebugHandler>>,
) {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break, // Connection closed
            Ok(_) => {
                let response = {
                    let mut h = handler.lock().await;
                    handle_line(&mut *h, &line)
                };
                let Some(response) = response else {
                    continue;
                };

                let resp_json = protocol::encode_response(&response);
                if let Err(e) = writer.write_all(resp_json.as_bytes()).await {
                    log::error!("Debug server write error: {}", e);
                    break;
                }
                if let Err(e) = writer.flush().await {
                    log::error!("Debug server flush error: {}", e);
                    break;
                }
            }
            Err(e) => {
                log::error!("Debug server read error: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ResponseData;

    #[derive(Default)]
    struct CountingHandler {
        seen: usize,
    }

    impl DebugHandler for CountingHandler {
        fn handle_command(&mut self, cmd: DebugCommand) -> DebugResponse {
            self.seen += 1;
            match cmd {
                DebugCommand::Ping => DebugResponse::pong(),
                _ => DebugResponse::none(),
            }
        }
    }

    #[test]
    fn test_handle_line_skips_blank() {
        let mut h = CountingHandler::default();
        assert!(handle_line(&mut h, "\n").is_none());
        assert_eq!(h.seen, 0);
    }

    #[test]
    fn test_handle_line_dispatches() {
        let mut h = CountingHandler::default();
        let resp = handle_line(&mut h, "{\"cmd\":\"Ping\"}\n").unwrap();
        assert_eq!(resp, DebugResponse::ok(ResponseData::Pong { message: "pong".into() }));
        assert_eq!(h.seen, 1);
    }

    #[test]
    fn test_handle_line_reports_bad_json() {
        let mut h = CountingHandler::default();
        let resp = handle_line(&mut h, "{oops").unwrap();
        assert!(!resp.is_ok());
        assert_eq!(h.seen, 0);
    }
}
