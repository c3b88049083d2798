//! Repository trait for the member registry.
//!
//! The domain layer owns the trait; infrastructure provides the concrete
//! implementation (dependency inversion). UseCases depend only on this
//! trait, so the registry can be swapped or mocked in tests.

use async_trait::async_trait;

use super::entity::Member;
use super::error::RepositoryError;
use super::value_object::{AddressKey, DisplayName, Timestamp};

/// The authoritative set of currently active participants, keyed by
/// [`AddressKey`].
///
/// Registry mutation carries no error conditions of its own: callers check
/// [`is_available`](Self::is_available) before registering and confirm
/// existence before removing. Operations that must locate an existing
/// member return [`RepositoryError::MemberNotFound`] on a miss.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// True iff no member currently owns this key.
    async fn is_available(&self, key: AddressKey) -> bool;

    /// Construct and insert a new member with an empty mailbox, returning a
    /// snapshot of it.
    ///
    /// Does not re-check availability and is not idempotent; the caller
    /// must have verified [`is_available`](Self::is_available) first.
    async fn register(
        &self,
        name: DisplayName,
        key: AddressKey,
        joined_at: Timestamp,
    ) -> Member;

    /// Delete the member with this key.
    async fn remove(&self, key: AddressKey) -> Result<(), RepositoryError>;

    /// Current display name of the member with this key.
    async fn display_name(&self, key: AddressKey) -> Result<DisplayName, RepositoryError>;

    /// Replace the member's display name in place, returning the old name.
    async fn rename(
        &self,
        key: AddressKey,
        new_name: DisplayName,
    ) -> Result<DisplayName, RepositoryError>;

    /// Append `text` to the mailbox of every member except the one with
    /// `exclude` (which need not exist).
    async fn append_to_others(&self, exclude: AddressKey, text: &str);

    /// Atomically take and clear the pending notifications of the member
    /// with this key, in enqueue order.
    async fn drain_mailbox(&self, key: AddressKey) -> Result<Vec<String>, RepositoryError>;

    /// Display names of every member except the one with `exclude`, in
    /// registry insertion order.
    async fn other_display_names(&self, exclude: AddressKey) -> Vec<DisplayName>;

    /// Number of currently registered members.
    async fn count_members(&self) -> usize;
}
