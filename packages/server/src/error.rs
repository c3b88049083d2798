//! Server-level error definitions.

use thiserror::Error;

/// Fatal errors that stop the serving loop.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Socket-level I/O failure (bind, receive or send)
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),
}
