//! UDP serving loop.
//!
//! Strictly sequential: receive one datagram, dispatch it to completion,
//! send the one response back to the sender, then receive the next. No
//! retransmission is attempted; the transport may drop either direction
//! and the protocol leaves recovery to the polling client.

use std::sync::Arc;

use tokio::net::UdpSocket;

use crate::domain::MemberRepository;
use crate::error::ServerError;
use crate::infrastructure::repository::InMemoryMemberRepository;
use crate::infrastructure::wire::ILLEGAL_REQUEST;
use crate::ui::dispatcher::CommandDispatcher;

/// Receive buffer size; requests beyond this are truncated by the OS.
const MAX_DATAGRAM: usize = 2048;

/// Bind `0.0.0.0:<port>` and serve requests forever over a fresh, empty
/// registry.
///
/// Returns only on a socket-level I/O error; protocol-level rejections are
/// answered on the wire and never stop the loop.
pub async fn run_server(port: u16) -> Result<(), ServerError> {
    let socket = UdpSocket::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", socket.local_addr()?);

    let repository: Arc<dyn MemberRepository> = Arc::new(InMemoryMemberRepository::new());
    let dispatcher = CommandDispatcher::new(repository);

    serve(socket, dispatcher).await
}

async fn serve(socket: UdpSocket, dispatcher: CommandDispatcher) -> Result<(), ServerError> {
    let mut buf = vec![0u8; MAX_DATAGRAM];
    loop {
        let (len, sender) = socket.recv_from(&mut buf).await?;

        let response = match std::str::from_utf8(&buf[..len]) {
            Ok(raw) => dispatcher.dispatch(raw, sender).await,
            Err(e) => {
                // Not decodable as text: answer like any other bad request
                // instead of dying on it.
                tracing::warn!("non-UTF-8 datagram from {}: {}", sender, e);
                ILLEGAL_REQUEST.to_string()
            }
        };

        socket.send_to(response.as_bytes(), sender).await?;
    }
}
