//! UseCase: join the group.
//!
//! Registers the sender as a new member and notifies everyone who was
//! already present. The reply to the joiner is the roster of the other
//! members, in registry order.

use std::sync::Arc;

use crate::domain::{AddressKey, DisplayName, MemberRepository, Timestamp};

use super::error::JoinGroupError;

/// Join-group use case
pub struct JoinGroupUseCase {
    repository: Arc<dyn MemberRepository>,
}

impl JoinGroupUseCase {
    /// Create a new JoinGroupUseCase
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// Execute the join.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name taken verbatim from the request payload
    /// * `key` - The sender's address key
    /// * `joined_at` - Timestamp recorded on the new member
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<DisplayName>)` - Names of the other members, registry order
    /// * `Err(JoinGroupError)` - The key is taken; nothing was mutated
    pub async fn execute(
        &self,
        name: DisplayName,
        key: AddressKey,
        joined_at: Timestamp,
    ) -> Result<Vec<DisplayName>, JoinGroupError> {
        // 1. Uniqueness check: one member per address key, ever
        if !self.repository.is_available(key).await {
            return Err(JoinGroupError::AddressTaken(key));
        }

        // 2. Notify members that existed before this join. The joiner is
        //    not registered yet, so its own mailbox cannot receive this.
        let notification = format!("{name} has joined");
        self.repository.append_to_others(key, &notification).await;

        // 3. Register with an empty mailbox, then build the roster reply.
        self.repository.register(name, key, joined_at).await;
        Ok(self.repository.other_display_names(key).await)
    }
}
