//! Identity type for logical inputs

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Identifier naming one logical input action (a button or an axis)
///
/// Interned behind an `Arc<str>` so cloning it into every buffer row is a
/// reference count bump rather than a string copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputId(Arc<str>);

impl InputId {
    /// Create a new input ID
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for InputId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InputId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for InputId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}
