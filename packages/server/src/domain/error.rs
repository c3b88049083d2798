//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::AddressKey;

/// Errors raised by [`crate::domain::MemberRepository`] lookups.
///
/// Registry mutation itself has no error conditions; callers enforce the
/// preconditions (availability before register, existence before remove).
/// Only operations that must find an existing member can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No member is registered under the given address key
    #[error("no member registered for address key {0}")]
    MemberNotFound(AddressKey),
}
