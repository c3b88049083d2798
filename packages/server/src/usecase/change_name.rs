//! UseCase: change the sender's display name.
//!
//! Renames in place and tells every other member about the change using
//! the old name; the sender's own mailbox never receives the notice. The
//! wording `"<old> changed his name to <new>"` is part of the wire
//! contract.

use std::sync::Arc;

use crate::domain::{AddressKey, DisplayName, MemberRepository};

use super::error::MemberCommandError;

/// Change-name use case
pub struct ChangeNameUseCase {
    repository: Arc<dyn MemberRepository>,
}

impl ChangeNameUseCase {
    /// Create a new ChangeNameUseCase
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// Execute the rename.
    ///
    /// # Arguments
    ///
    /// * `key` - The sender's address key
    /// * `new_name` - New display name, taken verbatim from the payload
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The sender's drained mailbox, append order
    /// * `Err(MemberCommandError)` - The sender never joined; no mutation
    pub async fn execute(
        &self,
        key: AddressKey,
        new_name: DisplayName,
    ) -> Result<Vec<String>, MemberCommandError> {
        let old_name = self
            .repository
            .rename(key, new_name.clone())
            .await
            .map_err(|_| MemberCommandError::NotRegistered(key))?;

        let notification = format!("{old_name} changed his name to {new_name}");
        self.repository.append_to_others(key, &notification).await;

        self.repository
            .drain_mailbox(key)
            .await
            .map_err(|_| MemberCommandError::NotRegistered(key))
    }
}
