//! Shared utilities for the Pigeonhole workspace.
//!
//! Keeps concerns used by both the server and the client (log setup, time
//! helpers) out of the protocol crates.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
pub use time::get_unix_timestamp_millis;
