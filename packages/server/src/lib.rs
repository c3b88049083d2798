//! Pull-based UDP group chat server library.
//!
//! Members join, send, rename and leave through single-datagram commands;
//! delivery is pull-based, with each member polling to drain its own
//! mailbox of pending notifications.

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry point
pub use ui::run_server;
