//! Input buffer configuration
//!
//! Describes the buffering window, the update rate, and the actions and
//! motion commands a session tracks. Usually loaded from a RON file:
//!
//! ```ron
//! (
//!     buffer_size: 20,
//!     update_rate: 60.0,
//!     actions: [
//!         (id: "Jump", kind: Button),
//!         (id: "Move", kind: Axis),
//!     ],
//!     motions: [
//!         (id: "QuarterCircle", axis: "Move", kind: Sequence([Back, Right, Forward])),
//!     ],
//! )
//! ```

use crate::{Error, MotionCommand, MotionKind, Result};
use holdfast_core::{InputId, InputRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Highest supported update rate, in ticks per second
pub const MAX_UPDATE_RATE: f32 = 120.0;

/// Kind of raw value an action produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Digital on/off input
    Button,
    /// Two-dimensional stick input
    Axis,
}

/// A buffered action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDef {
    /// Identifier the action is registered and consumed under
    pub id: InputId,
    /// Raw value kind
    pub kind: ActionKind,
}

/// A directional motion command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionDef {
    /// Identifier the command is consumed under
    pub id: InputId,
    /// Axis action the command reads
    pub axis: InputId,
    /// Gesture to recognize
    pub kind: MotionKind,
}

impl MotionDef {
    /// Build a fresh command tracker for this definition
    pub fn command(&self) -> MotionCommand {
        MotionCommand::new(self.id.clone(), self.axis.clone(), self.kind.clone())
    }
}

/// Configuration for an input buffer session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBufferConfig {
    /// Number of rows, i.e. ticks a press stays consumable
    pub buffer_size: usize,
    /// Buffer updates per second
    pub update_rate: f32,
    /// Actions in registration order
    pub actions: Vec<ActionDef>,
    /// Directional motion commands
    pub motions: Vec<MotionDef>,
}

impl InputBufferConfig {
    /// Parse and validate a configuration from RON text
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let config: Self = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|err| Error::InvalidConfig(err.to_string()))
    }

    /// Add a button action
    pub fn with_button(mut self, id: impl Into<InputId>) -> Self {
        self.actions.push(ActionDef {
            id: id.into(),
            kind: ActionKind::Button,
        });
        self
    }

    /// Add an axis action
    pub fn with_axis(mut self, id: impl Into<InputId>) -> Self {
        self.actions.push(ActionDef {
            id: id.into(),
            kind: ActionKind::Axis,
        });
        self
    }

    /// Add a motion command
    pub fn with_motion(
        mut self,
        id: impl Into<InputId>,
        axis: impl Into<InputId>,
        kind: MotionKind,
    ) -> Self {
        self.motions.push(MotionDef {
            id: id.into(),
            axis: axis.into(),
            kind,
        });
        self
    }

    /// Set the buffer size
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Set the update rate
    pub fn with_update_rate(mut self, update_rate: f32) -> Self {
        self.update_rate = update_rate;
        self
    }

    /// Seconds between buffer updates
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.update_rate
    }

    /// Registry of all actions, in configuration order
    pub fn registry(&self) -> InputRegistry {
        self.actions.iter().map(|action| action.id.clone()).collect()
    }

    /// Kind of a configured action
    pub fn action_kind(&self, id: &str) -> Option<ActionKind> {
        self.actions
            .iter()
            .find(|action| action.id.as_str() == id)
            .map(|action| action.kind)
    }

    /// Check the configuration for setup errors
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(Error::InvalidConfig("buffer_size must be greater than 0".into()));
        }
        if !(self.update_rate > 0.0 && self.update_rate <= MAX_UPDATE_RATE) {
            return Err(Error::InvalidConfig(format!(
                "update_rate must be in (0, {MAX_UPDATE_RATE}], got {}",
                self.update_rate
            )));
        }

        let mut seen = HashSet::new();
        for action in &self.actions {
            if !seen.insert(action.id.clone()) {
                return Err(Error::InvalidConfig(format!(
                    "action '{}' is defined more than once",
                    action.id
                )));
            }
        }

        for motion in &self.motions {
            if !seen.insert(motion.id.clone()) {
                return Err(Error::InvalidConfig(format!(
                    "motion '{}' reuses an existing identifier",
                    motion.id
                )));
            }
            match self.action_kind(motion.axis.as_str()) {
                Some(ActionKind::Axis) => {}
                Some(ActionKind::Button) => {
                    return Err(Error::InvalidConfig(format!(
                        "motion '{}' reads '{}', which is a button",
                        motion.id, motion.axis
                    )));
                }
                None => {
                    return Err(Error::InvalidConfig(format!(
                        "motion '{}' reads unknown axis '{}'",
                        motion.id, motion.axis
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for InputBufferConfig {
    /// 20 rows updated at 60 ticks per second, no actions
    fn default() -> Self {
        Self {
            buffer_size: 20,
            update_rate: 60.0,
            actions: Vec::new(),
            motions: Vec::new(),
        }
    }
}
