//! InMemory Member Repository implementation.
//!
//! Concrete implementation of the domain's `MemberRepository` trait,
//! backed by a HashMap for O(1) lookup plus a join-order list so that
//! enumeration keeps registry insertion order. The registry lives for the
//! lifetime of the server process and starts empty on every restart; there
//! is no persistence.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    AddressKey, DisplayName, Member, MemberRepository, RepositoryError, Timestamp,
};

/// Registry table: keyed members plus their insertion order.
///
/// Both structures are mutated together under one lock; `join_order` holds
/// exactly the keys present in `by_key`.
#[derive(Default)]
struct MemberTable {
    by_key: HashMap<AddressKey, Member>,
    join_order: Vec<AddressKey>,
}

/// In-memory member registry guarded by a single coarse mutex.
///
/// The dispatch loop is sequential, but the lock keeps command effects
/// serialized even if the transport layer ever grows concurrent.
#[derive(Default)]
pub struct InMemoryMemberRepository {
    table: Mutex<MemberTable>,
}

impl InMemoryMemberRepository {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn is_available(&self, key: AddressKey) -> bool {
        let table = self.table.lock().await;
        !table.by_key.contains_key(&key)
    }

    async fn register(&self, name: DisplayName, key: AddressKey, joined_at: Timestamp) -> Member {
        let member = Member::new(name, key, joined_at);

        let mut table = self.table.lock().await;
        table.by_key.insert(key, member.clone());
        table.join_order.push(key);

        member
    }

    async fn remove(&self, key: AddressKey) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        table
            .by_key
            .remove(&key)
            .ok_or(RepositoryError::MemberNotFound(key))?;
        table.join_order.retain(|k| *k != key);
        Ok(())
    }

    async fn display_name(&self, key: AddressKey) -> Result<DisplayName, RepositoryError> {
        let table = self.table.lock().await;
        table
            .by_key
            .get(&key)
            .map(|member| member.name.clone())
            .ok_or(RepositoryError::MemberNotFound(key))
    }

    async fn rename(
        &self,
        key: AddressKey,
        new_name: DisplayName,
    ) -> Result<DisplayName, RepositoryError> {
        let mut table = self.table.lock().await;
        let member = table
            .by_key
            .get_mut(&key)
            .ok_or(RepositoryError::MemberNotFound(key))?;
        Ok(std::mem::replace(&mut member.name, new_name))
    }

    async fn append_to_others(&self, exclude: AddressKey, text: &str) {
        let mut table = self.table.lock().await;
        let MemberTable { by_key, join_order } = &mut *table;
        for key in join_order.iter() {
            if *key == exclude {
                continue;
            }
            if let Some(member) = by_key.get_mut(key) {
                member.mailbox.append(text.to_string());
            }
        }
    }

    async fn drain_mailbox(&self, key: AddressKey) -> Result<Vec<String>, RepositoryError> {
        let mut table = self.table.lock().await;
        let member = table
            .by_key
            .get_mut(&key)
            .ok_or(RepositoryError::MemberNotFound(key))?;
        Ok(member.mailbox.drain_all())
    }

    async fn other_display_names(&self, exclude: AddressKey) -> Vec<DisplayName> {
        let table = self.table.lock().await;
        table
            .join_order
            .iter()
            .filter(|key| **key != exclude)
            .filter_map(|key| table.by_key.get(key))
            .map(|member| member.name.clone())
            .collect()
    }

    async fn count_members(&self) -> usize {
        let table = self.table.lock().await;
        table.by_key.len()
    }
}
