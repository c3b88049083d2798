//! UseCase layer error definitions.
//!
//! Every variant here surfaces on the wire as the single literal error
//! reply; the distinctions exist for logging and for tests.

use thiserror::Error;

use crate::domain::AddressKey;

/// Errors raised by the Join use case
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinGroupError {
    /// A member is already registered under the sender's address key
    #[error("address key {0} is already registered")]
    AddressTaken(AddressKey),
}

/// Errors raised by the Send/Rename/Leave/Poll use cases
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemberCommandError {
    /// The sender has not joined the group
    #[error("sender {0} is not a registered member")]
    NotRegistered(AddressKey),
}
