//! One row of the input buffer

use crate::FrameState;
use holdfast_core::{InputId, InputRegistry, RawInputTable};
use indexmap::IndexMap;

/// Snapshot of every registered input's state for one tick
///
/// Keys are kept in registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BufferFrame {
    states: IndexMap<InputId, FrameState>,
}

impl BufferFrame {
    /// Create a row with a resting state per registered input
    pub fn new(registry: &InputRegistry) -> Self {
        let mut frame = Self::default();
        frame.initialize_frame(registry);
        frame
    }

    /// Rebuild the row from the registry, resetting every state to rest
    ///
    /// Reuses the row's existing allocation.
    pub fn initialize_frame(&mut self, registry: &InputRegistry) {
        self.states.clear();
        self.states.extend(
            registry
                .iter()
                .map(|id| (id.clone(), FrameState::new(id.clone()))),
        );
    }

    /// Resolve every state against this tick's raw samples
    pub fn update_frame_state(&mut self, raw: &RawInputTable) {
        for state in self.states.values_mut() {
            state.resolve_command(raw);
        }
    }

    /// Inherit value, hold time and used flag from the previous row
    ///
    /// Inputs missing from `previous` are left untouched.
    pub fn copy_frame_state(&mut self, previous: &BufferFrame) {
        for (id, state) in self.states.iter_mut() {
            if let Some(prev) = previous.states.get(id) {
                state.copy_from(prev);
            }
        }
    }

    /// Get the state of an input
    pub fn get(&self, id: &str) -> Option<&FrameState> {
        self.states.get(id)
    }

    /// Get a mutable reference to the state of an input
    pub fn get_mut(&mut self, id: &str) -> Option<&mut FrameState> {
        self.states.get_mut(id)
    }

    /// Iterate states in registry order
    pub fn iter(&self) -> impl Iterator<Item = &FrameState> {
        self.states.values()
    }

    /// Whether this row's key set is exactly the registry, in order
    pub fn matches_registry(&self, registry: &InputRegistry) -> bool {
        self.states.len() == registry.len() && self.states.keys().eq(registry.iter())
    }

    /// Number of inputs in the row
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the row tracks no inputs
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
