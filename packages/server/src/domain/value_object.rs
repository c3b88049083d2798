//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;
use std::net::SocketAddr;

/// Member identity value object.
///
/// A member is recognized across requests by the source port of its
/// transport address alone; the IP is deliberately ignored, a documented
/// simplification of the wire protocol. Two hosts that happen to use the
/// same source port therefore collide on one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressKey(u16);

impl AddressKey {
    /// Create an AddressKey from a raw port number.
    pub fn new(port: u16) -> Self {
        Self(port)
    }

    /// Derive the AddressKey for the sender of a datagram.
    pub fn from_sender(addr: &SocketAddr) -> Self {
        Self(addr.port())
    }

    /// Get the inner port value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name value object.
///
/// Shown to other members in notifications. The protocol accepts arbitrary
/// text here: names carry no uniqueness constraint and no validation, and a
/// name containing the space delimiter survives decoding because payload
/// tokens are re-joined verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new DisplayName. Never fails; any text is a legal name.
    pub fn new(name: String) -> Self {
        Self(name)
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
