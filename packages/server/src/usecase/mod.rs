//! UseCase layer.
//!
//! One use case per protocol command. Each operates on the domain layer
//! through the `MemberRepository` trait and is invoked by the UI layer's
//! dispatcher.

pub mod change_name;
pub mod error;
pub mod join_group;
pub mod leave_group;
pub mod poll_messages;
pub mod send_message;

pub use change_name::ChangeNameUseCase;
pub use error::{JoinGroupError, MemberCommandError};
pub use join_group::JoinGroupUseCase;
pub use leave_group::LeaveGroupUseCase;
pub use poll_messages::PollMessagesUseCase;
pub use send_message::SendMessageUseCase;
