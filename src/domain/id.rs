//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Player identifier - newtype for type safety.
///
/// This is the stable key of a player across seasons, not the display name.
/// Two players may share a display name; they never share a `PlayerId`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new `PlayerId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the player ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Team identifier - newtype for type safety.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    /// Create a new `TeamId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the team ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TeamId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TeamId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
