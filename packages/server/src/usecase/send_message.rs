//! UseCase: send a message to the group.
//!
//! Routes `"<name>: <message>"` into every other member's mailbox, then
//! drains the sender's own mailbox as the reply. The sender never receives
//! its own message.

use std::sync::Arc;

use crate::domain::{AddressKey, MemberRepository};

use super::error::MemberCommandError;

/// Send-message use case
pub struct SendMessageUseCase {
    repository: Arc<dyn MemberRepository>,
}

impl SendMessageUseCase {
    /// Create a new SendMessageUseCase
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// Execute the send.
    ///
    /// # Arguments
    ///
    /// * `key` - The sender's address key
    /// * `text` - Message text taken verbatim from the request payload
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The sender's drained mailbox, append order
    /// * `Err(MemberCommandError)` - The sender never joined; no mutation
    pub async fn execute(
        &self,
        key: AddressKey,
        text: &str,
    ) -> Result<Vec<String>, MemberCommandError> {
        let sender_name = self
            .repository
            .display_name(key)
            .await
            .map_err(|_| MemberCommandError::NotRegistered(key))?;

        let notification = format!("{sender_name}: {text}");
        self.repository.append_to_others(key, &notification).await;

        self.repository
            .drain_mailbox(key)
            .await
            .map_err(|_| MemberCommandError::NotRegistered(key))
    }
}
