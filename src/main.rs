//! Blockbuilder session host.
//!
//! Runs one editing session and drives it through the debug protocol.
//!
//! Usage: cargo run -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Session config JSON (default: built-in defaults)
//!   --port <PORT>     Debug server port (default: 9742)
//!   --stdin           Read commands from stdin instead of serving TCP

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use blockbuilder::core::logging;
use blockbuilder::session::{EditSession, LogObserver, SessionConfig};
use blockbuilder_debug::{encode_response, handle_line, DebugServer};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => match SessionConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SessionConfig::default(),
    };
    if let Some(port) = parse_u16_arg(&args, "--port") {
        config.debug_port = port;
    }

    let mut session = EditSession::new(config);
    session.add_observer(LogObserver);

    if args.iter().any(|a| a == "--stdin") {
        if let Err(e) = run_stdin(&mut session) {
            log::error!("stdin session failed: {}", e);
            std::process::exit(1);
        }
    } else {
        serve(session);
    }
}

/// One command per stdin line, one response per stdout line
fn run_stdin(session: &mut EditSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(response) = handle_line(session, &line) {
            stdout.write_all(encode_response(&response).as_bytes())?;
            stdout.flush()?;
        }
    }
    log::info!("stdin closed, {} blocks in world", session.world().block_count());
    Ok(())
}

/// Serve the debug protocol over TCP until Ctrl-C
fn serve(session: EditSession) {
    let port = session.config().debug_port;
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async move {
        let handler = Arc::new(tokio::sync::Mutex::new(session));
        let server = DebugServer::start(handler, port);

        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
        }
        log::info!("Shutting down");
        server.shutdown();
    });
}

fn parse_u16_arg(args: &[String], flag: &str) -> Option<u16> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
