//! UI layer: command dispatch and the UDP serving loop.

pub mod dispatcher;
pub mod runner;

pub use dispatcher::CommandDispatcher;
pub use runner::run_server;
