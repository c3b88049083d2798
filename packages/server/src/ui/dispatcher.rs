//! Command dispatcher: one request line in, one response line out.
//!
//! The dispatcher is pure relative to the repository it is given: it never
//! touches a socket, which is what makes the protocol testable without
//! transport. Every rejected request, whatever the cause, is answered with
//! the single wire-level error literal.

use std::net::SocketAddr;
use std::sync::Arc;

use pigeonhole_shared::time::get_unix_timestamp_millis;

use crate::domain::{AddressKey, DisplayName, MemberRepository, Timestamp};
use crate::infrastructure::wire::{self, Command, ILLEGAL_REQUEST};
use crate::usecase::{
    ChangeNameUseCase, JoinGroupUseCase, LeaveGroupUseCase, PollMessagesUseCase,
    SendMessageUseCase,
};

/// Protocol state machine over a member registry.
pub struct CommandDispatcher {
    repository: Arc<dyn MemberRepository>,
}

impl CommandDispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(repository: Arc<dyn MemberRepository>) -> Self {
        Self { repository }
    }

    /// Handle one request datagram and produce exactly one response.
    ///
    /// Validation, state mutation and response formatting happen as a
    /// single step relative to the sequential serving loop; there is no
    /// partial application.
    pub async fn dispatch(&self, raw: &str, sender: SocketAddr) -> String {
        let key = AddressKey::from_sender(&sender);

        let command = match wire::decode(raw) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("rejecting request from {}: {}", sender, e);
                return ILLEGAL_REQUEST.to_string();
            }
        };
        tracing::debug!("dispatching {:?} from key {}", command, key);

        match command {
            Command::Join(payload) => {
                let usecase = JoinGroupUseCase::new(self.repository.clone());
                let name = DisplayName::new(payload);
                let joined_at = Timestamp::new(get_unix_timestamp_millis());
                match usecase.execute(name, key, joined_at).await {
                    Ok(roster) => {
                        tracing::info!("member joined on key {}", key);
                        wire::encode_roster(&roster)
                    }
                    Err(e) => {
                        tracing::warn!("join rejected: {}", e);
                        ILLEGAL_REQUEST.to_string()
                    }
                }
            }
            Command::Send(payload) => {
                let usecase = SendMessageUseCase::new(self.repository.clone());
                match usecase.execute(key, &payload).await {
                    Ok(backlog) => wire::encode_mailbox(&backlog),
                    Err(e) => {
                        tracing::warn!("send rejected: {}", e);
                        ILLEGAL_REQUEST.to_string()
                    }
                }
            }
            Command::Rename(payload) => {
                let usecase = ChangeNameUseCase::new(self.repository.clone());
                match usecase.execute(key, DisplayName::new(payload)).await {
                    Ok(backlog) => wire::encode_mailbox(&backlog),
                    Err(e) => {
                        tracing::warn!("rename rejected: {}", e);
                        ILLEGAL_REQUEST.to_string()
                    }
                }
            }
            Command::Leave => {
                let usecase = LeaveGroupUseCase::new(self.repository.clone());
                match usecase.execute(key).await {
                    Ok(()) => {
                        tracing::info!("member left on key {}", key);
                        String::new()
                    }
                    Err(e) => {
                        tracing::warn!("leave rejected: {}", e);
                        ILLEGAL_REQUEST.to_string()
                    }
                }
            }
            Command::Poll => {
                let usecase = PollMessagesUseCase::new(self.repository.clone());
                match usecase.execute(key).await {
                    Ok(backlog) => wire::encode_mailbox(&backlog),
                    Err(e) => {
                        tracing::warn!("poll rejected: {}", e);
                        ILLEGAL_REQUEST.to_string()
                    }
                }
            }
        }
    }
}
