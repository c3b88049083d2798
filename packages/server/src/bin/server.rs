//! Pull-based UDP group chat server.
//!
//! Serves one response datagram per request datagram on the given port.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin pigeonhole-server -- 7070
//! ```

use clap::Parser;

use pigeonhole_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(name = "pigeonhole-server", about = "Pull-based UDP group chat server")]
struct Args {
    /// UDP port to listen on (all interfaces)
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Run the server
    if let Err(e) = pigeonhole_server::run_server(args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
