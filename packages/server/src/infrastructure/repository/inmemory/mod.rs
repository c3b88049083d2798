//! In-memory member registry.

pub mod member;

pub use member::InMemoryMemberRepository;
