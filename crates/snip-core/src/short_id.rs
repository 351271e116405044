use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The numeric identifier assigned to a stored URL.
///
/// Identifiers are allocated densely starting at 1 and are strictly
/// increasing; they are never reused. Parsing from a path segment is the
/// only fallible way to obtain one, so every `ShortId` held by the rest
/// of the system is already a well-formed non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(u64);

impl ShortId {
    /// Wraps a raw identifier value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }
}

impl FromStr for ShortId {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| StorageError::InvalidId(s.to_owned()))
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ShortId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
