//! UseCase: poll pending messages.
//!
//! The pull half of the delivery model: drains the sender's mailbox and
//! returns the backlog. Polling mutates nothing beyond the drain itself.

use std::sync::Arc;

use crate::domain::{AddressKey, MemberRepository};

use super::error::MemberCommandError;

/// Poll-messages use case
pub struct PollMessagesUseCase {
    repository: Arc<dyn MemberRepository>,
}

impl PollMessagesUseCase {
    /// Create a new PollMessagesUseCase
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// Execute the poll.
    ///
    /// # Arguments
    ///
    /// * `key` - The sender's address key
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The sender's drained mailbox, append order
    /// * `Err(MemberCommandError)` - The sender never joined
    pub async fn execute(&self, key: AddressKey) -> Result<Vec<String>, MemberCommandError> {
        self.repository
            .drain_mailbox(key)
            .await
            .map_err(|_| MemberCommandError::NotRegistered(key))
    }
}
