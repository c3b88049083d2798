//! UseCase: leave the group.
//!
//! Removes the sender and tells every remaining member. The departing
//! member's own pending mailbox is discarded, not flushed: whatever was
//! still queued for them at the moment of leaving is dropped. That
//! asymmetry with the other drain paths is part of the protocol contract.

use std::sync::Arc;

use crate::domain::{AddressKey, MemberRepository};

use super::error::MemberCommandError;

/// Leave-group use case
pub struct LeaveGroupUseCase {
    repository: Arc<dyn MemberRepository>,
}

impl LeaveGroupUseCase {
    /// Create a new LeaveGroupUseCase
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// Execute the leave.
    ///
    /// # Arguments
    ///
    /// * `key` - The sender's address key
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Removed; the wire reply is the empty string
    /// * `Err(MemberCommandError)` - The sender never joined; no mutation
    pub async fn execute(&self, key: AddressKey) -> Result<(), MemberCommandError> {
        let leaver_name = self
            .repository
            .display_name(key)
            .await
            .map_err(|_| MemberCommandError::NotRegistered(key))?;

        // Remove first so the notification reaches remaining members only;
        // the pending mailbox leaves with the member.
        self.repository
            .remove(key)
            .await
            .map_err(|_| MemberCommandError::NotRegistered(key))?;

        let notification = format!("{leaver_name} has left the group");
        self.repository.append_to_others(key, &notification).await;

        Ok(())
    }
}
