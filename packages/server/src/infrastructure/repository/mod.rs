//! Repository pattern implementations.
//!
//! Concrete implementations of the repository trait defined by the domain
//! layer. UseCases depend on the trait, never on these types directly
//! (dependency inversion).

pub mod inmemory;

pub use inmemory::InMemoryMemberRepository;
