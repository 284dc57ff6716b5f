//! Ordered registry of known input identifiers
//!
//! Every buffer row holds exactly one frame state per registered identifier,
//! in registration order. The registry is populated once from configuration
//! and then handed to the buffer that owns it.

use crate::{Error, InputId, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ordered set of input identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputRegistry {
    ids: IndexSet<InputId>,
}

impl InputRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identifier
    ///
    /// Returns `false` (and keeps the original position) if the identifier
    /// was already registered.
    pub fn register(&mut self, id: impl Into<InputId>) -> bool {
        let id = id.into();
        let inserted = self.ids.insert(id.clone());
        if !inserted {
            tracing::warn!(%id, "input already registered, ignoring duplicate");
        }
        inserted
    }

    /// Check whether an identifier is registered
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Get the registration index of an identifier
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.get_index_of(id)
    }

    /// Get the registration index of an identifier, or an error if unknown
    pub fn require(&self, id: &str) -> Result<usize> {
        self.index_of(id)
            .ok_or_else(|| Error::UnknownInput(InputId::new(id)))
    }

    /// Iterate identifiers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &InputId> {
        self.ids.iter()
    }

    /// Number of registered identifiers
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<I: Into<InputId>> FromIterator<I> for InputRegistry {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        let mut registry = Self::new();
        for id in iter {
            registry.register(id);
        }
        registry
    }
}
