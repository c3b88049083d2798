//! Interactive CLI client for the Pigeonhole chat server.
//!
//! Reads one line at a time, sends it verbatim as a request datagram, then
//! blocks for exactly one response datagram and prints it. The transport
//! offers no retransmission: if either datagram is dropped, the wait for
//! the response never ends.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin pigeonhole-client -- 127.0.0.1 7070
//! ```

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use tokio::net::UdpSocket;

use pigeonhole_shared::logger::setup_logger;

/// Receive buffer size, matching the server's receive buffer.
const MAX_DATAGRAM: usize = 2048;

#[derive(Debug, Parser)]
#[command(name = "pigeonhole-client", about = "CLI client for the Pigeonhole chat server")]
struct Args {
    /// Server host name or IP address
    host: String,
    /// Server UDP port
    port: u16,
}

#[derive(Debug, Error)]
enum ClientError {
    /// Socket-level I/O failure
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal line editing failure
    #[error("input error: {0}")]
    Readline(#[from] ReadlineError),
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run_client(&args.host, args.port).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

/// Line loop: read, send, block for one reply, print, repeat.
///
/// The socket is bound once, so the OS-assigned source port stays stable
/// and the server keeps recognizing this client across requests.
async fn run_client(host: &str, port: u16) -> Result<(), ClientError> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect((host, port)).await?;
    tracing::debug!("bound client socket on {}", socket.local_addr()?);

    let mut editor = DefaultEditor::new()?;
    let mut buf = vec![0u8; MAX_DATAGRAM];

    loop {
        let line = match tokio::task::block_in_place(|| editor.readline("")) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        socket.send(line.as_bytes()).await?;
        let len = socket.recv(&mut buf).await?;
        println!("{}", String::from_utf8_lossy(&buf[..len]));
    }

    Ok(())
}
