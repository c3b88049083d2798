//! Core domain models for the chat server.

use super::value_object::{AddressKey, DisplayName, Timestamp};

/// Per-member FIFO queue of pending text notifications.
///
/// Notifications accumulate between polls and are handed out in enqueue
/// order. A drained entry is gone: nothing is ever delivered twice.
#[derive(Debug, Clone, Default)]
pub struct Mailbox(Vec<String>);

impl Mailbox {
    /// Create a new, empty mailbox.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Enqueue a notification at the tail.
    pub fn append(&mut self, text: String) {
        self.0.push(text);
    }

    /// Take every queued entry in enqueue order, leaving the mailbox empty.
    ///
    /// Drain and clear happen in one step, so an entry is either delivered
    /// exactly once or lost only by being delivered.
    pub fn drain_all(&mut self) -> Vec<String> {
        std::mem::take(&mut self.0)
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Represents one active chat participant.
///
/// Created by a Join, mutated by Send/Rename/Poll, destroyed by a Leave.
/// At most one member exists per [`AddressKey`] at any time; the repository
/// upholds that invariant together with its callers.
#[derive(Debug, Clone)]
pub struct Member {
    /// Name shown to other members; mutable, no uniqueness constraint.
    pub name: DisplayName,
    /// Identity of this member across requests.
    pub address: AddressKey,
    /// Pending notifications awaiting the next poll.
    pub mailbox: Mailbox,
    /// When the member joined.
    pub joined_at: Timestamp,
}

impl Member {
    /// Create a new member with an empty mailbox.
    pub fn new(name: DisplayName, address: AddressKey, joined_at: Timestamp) -> Self {
        Self {
            name,
            address,
            mailbox: Mailbox::new(),
            joined_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailbox_append_and_drain_in_order() {
        // given:
        let mut mailbox = Mailbox::new();
        mailbox.append("first".to_string());
        mailbox.append("second".to_string());
        mailbox.append("third".to_string());

        // when:
        let drained = mailbox.drain_all();

        // then: enqueue order is preserved
        assert_eq!(drained, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_mailbox_drain_is_exactly_once() {
        // given:
        let mut mailbox = Mailbox::new();
        mailbox.append("only".to_string());

        // when: drained twice
        let first = mailbox.drain_all();
        let second = mailbox.drain_all();

        // then: the entry is delivered once and never again
        assert_eq!(first, vec!["only"]);
        assert!(second.is_empty());
        assert!(mailbox.is_empty());
    }

    #[test]
    fn test_mailbox_drain_empty_yields_nothing() {
        // given:
        let mut mailbox = Mailbox::new();

        // when:
        let drained = mailbox.drain_all();

        // then:
        assert!(drained.is_empty());
    }

    #[test]
    fn test_member_new_starts_with_empty_mailbox() {
        // given:
        let name = DisplayName::new("alice".to_string());
        let address = AddressKey::new(4000);

        // when:
        let member = Member::new(name.clone(), address, Timestamp::new(0));

        // then:
        assert_eq!(member.name, name);
        assert_eq!(member.address, address);
        assert!(member.mailbox.is_empty());
    }
}
