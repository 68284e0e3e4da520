//! Canonical cardholder name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cardholder name in display order (`FIRST LAST`).
///
/// Only the decoder constructs these from stripe data, so a
/// `CanonicalName` always came from a well-formed Track 1 name field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalName(String);

impl CanonicalName {
    pub(super) fn from_parts(first: &str, last: &str) -> Self {
        Self(format!("{} {}", first, last))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
