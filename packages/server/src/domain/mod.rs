//! Domain layer for the chat server.
//!
//! This module contains business logic that is independent of
//! wire formats and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Mailbox, Member};
pub use error::RepositoryError;
pub use repository::MemberRepository;
pub use value_object::{AddressKey, DisplayName, Timestamp};
