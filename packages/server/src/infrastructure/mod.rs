//! Infrastructure layer: wire codec and repository implementations.

pub mod repository;
pub mod wire;
