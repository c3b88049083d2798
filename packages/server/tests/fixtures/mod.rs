//! Test fixtures for end-to-end UDP protocol tests.

use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;

/// How long a test client waits for a response datagram before giving up.
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);

/// A server instance running in a background task for the duration of a
/// test.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Start the serving loop on `port` and wait briefly for the bind.
    pub async fn start(port: u16) -> Self {
        tokio::spawn(async move {
            if let Err(e) = pigeonhole_server::run_server(port).await {
                eprintln!("test server stopped: {e}");
            }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        Self { port }
    }

    pub fn addr(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }
}

/// A chat participant: one UDP socket whose ephemeral source port is the
/// member identity for the whole test.
pub struct TestClient {
    socket: UdpSocket,
}

impl TestClient {
    /// Bind an ephemeral port and connect it to the server.
    pub async fn connect(server: &TestServer) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test client socket");
        socket
            .connect(server.addr())
            .await
            .expect("Failed to connect test client socket");
        Self { socket }
    }

    /// Send one request line and block for exactly one response datagram.
    pub async fn request(&self, line: &str) -> String {
        self.request_bytes(line.as_bytes()).await
    }

    /// Send one raw datagram (not necessarily valid UTF-8) and block for
    /// exactly one response datagram.
    pub async fn request_bytes(&self, payload: &[u8]) -> String {
        self.socket
            .send(payload)
            .await
            .expect("Failed to send request");

        let mut buf = vec![0u8; 2048];
        let len = timeout(RESPONSE_TIMEOUT, self.socket.recv(&mut buf))
            .await
            .expect("Timed out waiting for response")
            .expect("Failed to receive response");

        String::from_utf8(buf[..len].to_vec()).expect("Response was not UTF-8")
    }
}
