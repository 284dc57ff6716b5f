//! Raw input samples written by the host input system
//!
//! The host's event callbacks write the latest button/axis value per
//! identifier; buffer resolution only ever reads the table. One table belongs
//! to one local input context and is passed to the buffer on every update, so
//! every read during a single update sees the same snapshot.

use crate::InputId;
use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Latest raw value of one input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RawInput {
    /// Digital button, `true` while pressed
    Button(bool),
    /// Two-dimensional stick or composite axis
    Axis(Vec2),
}

impl RawInput {
    /// Magnitude of the sample if the input is active this frame
    ///
    /// A pressed button yields `1.0`, a non-zero axis yields its length.
    /// Released buttons and zero axes yield `None`.
    pub fn active_value(&self) -> Option<f32> {
        match *self {
            RawInput::Button(true) => Some(1.0),
            RawInput::Button(false) => None,
            RawInput::Axis(axis) if axis != Vec2::ZERO => Some(axis.length()),
            RawInput::Axis(_) => None,
        }
    }

    /// The released/neutral value of the same kind
    pub fn neutral(&self) -> Self {
        match self {
            RawInput::Button(_) => RawInput::Button(false),
            RawInput::Axis(_) => RawInput::Axis(Vec2::ZERO),
        }
    }
}

/// Keyed table of raw input samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInputTable {
    samples: IndexMap<InputId, RawInput>,
}

impl RawInputTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pressed state of a button
    pub fn set_button(&mut self, id: impl Into<InputId>, pressed: bool) {
        self.samples.insert(id.into(), RawInput::Button(pressed));
    }

    /// Record the value of an axis
    pub fn set_axis(&mut self, id: impl Into<InputId>, axis: Vec2) {
        self.samples.insert(id.into(), RawInput::Axis(axis));
    }

    /// Return an input to its neutral value (released button, zero axis)
    ///
    /// Returns `false` if the input has never been sampled.
    pub fn complete(&mut self, id: &str) -> bool {
        match self.samples.get_mut(id) {
            Some(sample) => {
                *sample = sample.neutral();
                true
            }
            None => false,
        }
    }

    /// Get the latest sample of an input
    pub fn get(&self, id: &str) -> Option<RawInput> {
        self.samples.get(id).copied()
    }

    /// Check if an input has a sample
    pub fn contains(&self, id: &str) -> bool {
        self.samples.contains_key(id)
    }

    /// Number of sampled inputs
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the table holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
