//! Per-input state within a single buffer row
//!
//! `hold_time` encodes the press lifecycle:
//! - `0`: at rest
//! - `> 0`: consecutive resolutions the input has been held (1 = rising edge)
//! - `-1`: released on the most recent resolution, settles to `0` on the next

use holdfast_core::{InputId, RawInputTable};
use serde::{Deserialize, Serialize};

/// State of one input on one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    /// Input this state tracks
    id: InputId,
    /// Magnitude of the input: 1.0 for a pressed button, axis length for an axis
    pub value: f32,
    /// Press lifecycle counter
    pub hold_time: i32,
    /// Set once the press recorded in this state has been consumed
    pub used: bool,
}

impl FrameState {
    /// Create a resting state for an input
    pub fn new(id: InputId) -> Self {
        Self {
            id,
            value: 0.0,
            hold_time: 0,
            used: false,
        }
    }

    /// Input this state tracks
    pub fn id(&self) -> &InputId {
        &self.id
    }

    /// Advance this state by one tick using the latest raw sample
    ///
    /// `used` is always cleared first. Inputs with no sample in the table keep
    /// their hold time unchanged.
    pub fn resolve_command(&mut self, raw: &RawInputTable) {
        self.used = false;

        let Some(sample) = raw.get(self.id.as_str()) else {
            return;
        };
        match sample.active_value() {
            Some(value) => self.hold_up(value),
            None => self.release_hold(),
        }
    }

    /// Register the input as held this tick
    pub fn hold_up(&mut self, value: f32) {
        self.value = value;
        if self.hold_time < 0 {
            self.hold_time = 1;
        } else {
            self.hold_time += 1;
        }
    }

    /// Register the input as not held this tick
    pub fn release_hold(&mut self) {
        self.value = 0.0;
        if self.hold_time > 0 {
            self.hold_time = -1;
            self.used = false;
        } else {
            self.hold_time = 0;
        }
    }

    /// Whether this state holds an unconsumed rising edge
    pub fn can_execute(&self) -> bool {
        self.hold_time == 1 && !self.used
    }

    /// Whether the input is currently held
    pub fn is_held(&self) -> bool {
        self.hold_time > 0
    }

    /// Whether the input was released on this tick
    pub fn just_released(&self) -> bool {
        self.hold_time == -1
    }

    /// Copy the lifecycle fields from another state, keeping this state's id
    pub fn copy_from(&mut self, other: &FrameState) {
        self.value = other.value;
        self.hold_time = other.hold_time;
        self.used = other.used;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdfast_core::Vec2;

    fn jump() -> FrameState {
        FrameState::new(InputId::new("Jump"))
    }

    fn resolve(state: &mut FrameState, pressed: bool) {
        let mut raw = RawInputTable::new();
        raw.set_button("Jump", pressed);
        state.resolve_command(&raw);
    }

    #[test]
    fn test_new_is_at_rest() {
        let state = jump();
        assert_eq!(state.id().as_str(), "Jump");
        assert_eq!(state.hold_time, 0);
        assert_eq!(state.value, 0.0);
        assert!(!state.used);
        assert!(!state.can_execute());
    }

    #[test]
    fn test_press_is_executable_once() {
        let mut state = jump();

        resolve(&mut state, true);
        assert_eq!(state.hold_time, 1);
        assert_eq!(state.value, 1.0);
        assert!(state.can_execute());

        for expected in 2..6 {
            resolve(&mut state, true);
            assert_eq!(state.hold_time, expected);
            assert!(!state.can_execute());
            assert!(state.is_held());
        }
    }

    #[test]
    fn test_release_settles_to_zero() {
        let mut state = jump();
        resolve(&mut state, true);
        resolve(&mut state, true);

        resolve(&mut state, false);
        assert_eq!(state.hold_time, -1);
        assert_eq!(state.value, 0.0);
        assert!(state.just_released());

        resolve(&mut state, false);
        assert_eq!(state.hold_time, 0);

        resolve(&mut state, false);
        assert_eq!(state.hold_time, 0);
    }

    #[test]
    fn test_repress_right_after_release_is_rising_edge() {
        let mut state = jump();
        resolve(&mut state, true);
        resolve(&mut state, false);
        assert_eq!(state.hold_time, -1);

        resolve(&mut state, true);
        assert_eq!(state.hold_time, 1);
        assert!(state.can_execute());
    }

    #[test]
    fn test_resolve_clears_used() {
        let mut state = jump();
        resolve(&mut state, true);
        state.used = true;
        assert!(!state.can_execute());

        resolve(&mut state, true);
        assert!(!state.used);
        assert_eq!(state.hold_time, 2);
    }

    #[test]
    fn test_missing_sample_keeps_hold_time() {
        let mut state = jump();
        resolve(&mut state, true);
        resolve(&mut state, true);
        state.used = true;

        state.resolve_command(&RawInputTable::new());
        assert_eq!(state.hold_time, 2);
        assert_eq!(state.value, 1.0);
        assert!(!state.used);
    }

    #[test]
    fn test_axis_uses_vector_length() {
        let mut state = FrameState::new(InputId::new("Move"));
        let mut raw = RawInputTable::new();

        raw.set_axis("Move", Vec2::new(0.6, 0.8));
        state.resolve_command(&raw);
        assert_eq!(state.hold_time, 1);
        assert!((state.value - 1.0).abs() < 1e-6);

        raw.set_axis("Move", Vec2::ZERO);
        state.resolve_command(&raw);
        assert_eq!(state.hold_time, -1);
        assert_eq!(state.value, 0.0);
    }

    #[test]
    fn test_copy_from_keeps_id() {
        let mut source = jump();
        source.hold_time = 3;
        source.value = 1.0;
        source.used = true;

        let mut target = FrameState::new(InputId::new("Attack"));
        target.copy_from(&source);
        assert_eq!(target.id().as_str(), "Attack");
        assert_eq!(target.hold_time, 3);
        assert_eq!(target.value, 1.0);
        assert!(target.used);
    }
}
