//! Debug tools for blockbuilder - line-delimited JSON protocol and a TCP
//! server for driving an editing session from another process
//!
//! Start the debug server in your app:
//! ```ignore
//! let handler = Arc::new(Mutex::new(session));
//! let _server = DebugServer::start(handler, DEFAULT_PORT);
//! ```

pub mod protocol;
pub mod server;

pub use protocol::*;
pub use server::{handle_line, DebugHandler, DebugServer};

/// Default debug server port
pub const DEFAULT_PORT: u16 = 9742;
