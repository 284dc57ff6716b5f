//! Directional motion commands
//!
//! A motion command watches one axis input and reports when the stick has
//! traced a gesture: either a sequence of coarse directions (e.g. a quarter
//! circle) or a continuous rotation of at least some angle.
//!
//! Directions are evaluated on the raw axis: +Y is forward, +X is right.

use holdfast_core::{InputId, Vec2};
use serde::{Deserialize, Serialize};

/// Cosine of 45 degrees, the alignment threshold for angle-change gestures
const ALIGNMENT_DOT: f32 = 0.707;

/// Largest per-tick angle step still counted as rotation
const MAX_ANGLE_STEP: f32 = 90.0;

/// Slack for float error in angle comparisons, in degrees
const ANGLE_EPSILON: f32 = 1e-3;

/// Coarse stick direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Neutral,
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    /// Classify an axis sample into one of five directions
    ///
    /// Within 45 degrees of +Y is forward, within 135 degrees is left or right
    /// by the sign of X, anything else is back.
    pub fn from_axis(axis: Vec2) -> Self {
        if axis == Vec2::ZERO {
            return Direction::Neutral;
        }
        let angle = angle_between(axis, Vec2::Y);
        if angle < 45.0 {
            Direction::Forward
        } else if angle < 135.0 && axis.x > 0.0 {
            Direction::Right
        } else if angle < 135.0 {
            Direction::Left
        } else {
            Direction::Back
        }
    }
}

/// Direction an angle-change gesture starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacingDirection {
    Forward,
    Back,
    Left,
    Right,
}

impl FacingDirection {
    /// Unit vector of this direction
    pub fn vector(&self) -> Vec2 {
        match self {
            FacingDirection::Forward => Vec2::Y,
            FacingDirection::Back => Vec2::NEG_Y,
            FacingDirection::Left => Vec2::NEG_X,
            FacingDirection::Right => Vec2::X,
        }
    }
}

/// Rotation sense an angle-change gesture must follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    Cw,
    Ccw,
    Either,
}

impl TurnDirection {
    /// Whether moving the stick from `previous` to `current` turns this way
    fn matches(&self, previous: Vec2, current: Vec2) -> bool {
        let cross = previous.perp_dot(current);
        match self {
            TurnDirection::Cw => cross < 0.0,
            TurnDirection::Ccw => cross > 0.0,
            TurnDirection::Either => true,
        }
    }
}

/// Gesture a motion command recognizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MotionKind {
    /// Pass through these directions in order
    Sequence(Vec<Direction>),
    /// Start from neutral, align with `from`, then rotate at least `angle`
    /// degrees in the `turn` sense
    AngleChange {
        from: FacingDirection,
        turn: TurnDirection,
        angle: f32,
    },
}

/// Progress through a gesture
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Progress {
    /// Next sequence step to match
    step: usize,
    /// Stick has been neutral since the last reset
    armed: bool,
    /// Stick has aligned with the start direction after arming
    aligned: bool,
    /// Angle from the start direction seen on the previous sample
    previous_angle: f32,
    /// Previous stick sample, for rotation sense
    previous_axis: Vec2,
    /// Rotation accumulated so far, in degrees
    accumulated: f32,
}

/// A directional gesture tracked over successive axis samples
#[derive(Debug, Clone, PartialEq)]
pub struct MotionCommand {
    id: InputId,
    axis: InputId,
    kind: MotionKind,
    progress: Progress,
}

impl MotionCommand {
    /// Create a command recognizing `kind` on the axis input `axis`
    pub fn new(id: impl Into<InputId>, axis: impl Into<InputId>, kind: MotionKind) -> Self {
        Self {
            id: id.into(),
            axis: axis.into(),
            kind,
            progress: Progress::default(),
        }
    }

    /// Identifier of this command
    pub fn id(&self) -> &InputId {
        &self.id
    }

    /// Axis input this command reads
    pub fn axis(&self) -> &InputId {
        &self.axis
    }

    /// Gesture this command recognizes
    pub fn kind(&self) -> &MotionKind {
        &self.kind
    }

    /// Feed one axis sample, returning `true` once the gesture is complete
    ///
    /// A completed sequence keeps returning `true` until [`reset`](Self::reset).
    /// Completion is reported on the same sample that matches the last step,
    /// not one sample later.
    pub fn check(&mut self, axis: Vec2) -> bool {
        match &self.kind {
            MotionKind::Sequence(steps) => {
                if steps.is_empty() {
                    return false;
                }
                let progress = &mut self.progress;
                if progress.step < steps.len() && steps[progress.step] == Direction::from_axis(axis) {
                    progress.step += 1;
                }
                progress.step >= steps.len()
            }
            MotionKind::AngleChange { from, turn, angle } => {
                let (from, turn, angle) = (*from, *turn, *angle);
                self.check_angle_change(axis, from, turn, angle)
            }
        }
    }

    /// Forget all progress
    pub fn reset(&mut self) {
        self.progress = Progress::default();
    }

    fn check_angle_change(
        &mut self,
        axis: Vec2,
        from: FacingDirection,
        turn: TurnDirection,
        target: f32,
    ) -> bool {
        let progress = &mut self.progress;

        if progress.aligned {
            if axis == Vec2::ZERO {
                self.reset();
                return false;
            }
            let stick_angle = angle_between(axis, from.vector());
            let step = (stick_angle - progress.previous_angle).abs();
            let proper_turn = turn.matches(progress.previous_axis, axis);

            progress.previous_angle = stick_angle;
            progress.previous_axis = axis;

            // Equal so a d-pad's 90 degree steps still count
            if proper_turn && step <= MAX_ANGLE_STEP + ANGLE_EPSILON {
                progress.accumulated += step;
            }
            return progress.accumulated + ANGLE_EPSILON >= target;
        }

        if progress.armed && axis.normalize_or_zero().dot(from.vector()) > ALIGNMENT_DOT {
            progress.aligned = true;
            progress.previous_axis = from.vector();
        } else if axis == Vec2::ZERO {
            progress.armed = true;
        }
        false
    }
}

/// Unsigned angle between two vectors, in degrees
fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let dot = a.normalize_or_zero().dot(b.normalize_or_zero());
    dot.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD: Vec2 = Vec2::new(0.0, 1.0);
    const BACK: Vec2 = Vec2::new(0.0, -1.0);
    const RIGHT: Vec2 = Vec2::new(1.0, 0.0);
    const LEFT: Vec2 = Vec2::new(-1.0, 0.0);

    fn quarter_circle() -> MotionCommand {
        MotionCommand::new(
            "QuarterCircle",
            "Move",
            MotionKind::Sequence(vec![Direction::Back, Direction::Right, Direction::Forward]),
        )
    }

    #[test]
    fn test_direction_from_axis() {
        assert_eq!(Direction::from_axis(Vec2::ZERO), Direction::Neutral);
        assert_eq!(Direction::from_axis(FORWARD), Direction::Forward);
        assert_eq!(Direction::from_axis(BACK), Direction::Back);
        assert_eq!(Direction::from_axis(RIGHT), Direction::Right);
        assert_eq!(Direction::from_axis(LEFT), Direction::Left);
        assert_eq!(Direction::from_axis(Vec2::new(0.3, 1.0)), Direction::Forward);
        assert_eq!(Direction::from_axis(Vec2::new(1.0, -0.5)), Direction::Right);
        assert_eq!(Direction::from_axis(Vec2::new(-0.2, -1.0)), Direction::Back);
    }

    #[test]
    fn test_sequence_completes_in_order() {
        let mut motion = quarter_circle();
        assert!(!motion.check(BACK));
        assert!(!motion.check(RIGHT));
        assert!(motion.check(FORWARD));
        // Stays complete until reset
        assert!(motion.check(Vec2::ZERO));

        motion.reset();
        assert!(!motion.check(FORWARD));
    }

    #[test]
    fn test_sequence_ignores_non_matching_samples() {
        let mut motion = quarter_circle();
        assert!(!motion.check(BACK));
        assert!(!motion.check(BACK));
        assert!(!motion.check(Vec2::ZERO));
        assert!(!motion.check(RIGHT));
        assert!(!motion.check(LEFT));
        assert!(motion.check(FORWARD));
    }

    #[test]
    fn test_sequence_out_of_order_never_completes() {
        let mut motion = quarter_circle();
        for axis in [FORWARD, RIGHT, FORWARD, RIGHT] {
            assert!(!motion.check(axis));
        }
    }

    #[test]
    fn test_empty_sequence_never_completes() {
        let mut motion = MotionCommand::new("Nothing", "Move", MotionKind::Sequence(Vec::new()));
        assert!(!motion.check(FORWARD));
    }

    fn half_turn(turn: TurnDirection) -> MotionCommand {
        MotionCommand::new(
            "HalfCircle",
            "Move",
            MotionKind::AngleChange {
                from: FacingDirection::Forward,
                turn,
                angle: 180.0,
            },
        )
    }

    #[test]
    fn test_angle_change_clockwise() {
        let mut motion = half_turn(TurnDirection::Cw);
        // Arm, align, then sweep forward -> right -> back
        assert!(!motion.check(Vec2::ZERO));
        assert!(!motion.check(FORWARD));
        assert!(!motion.check(RIGHT));
        assert!(motion.check(BACK));
    }

    #[test]
    fn test_angle_change_wrong_direction() {
        let mut motion = half_turn(TurnDirection::Cw);
        motion.check(Vec2::ZERO);
        motion.check(FORWARD);
        assert!(!motion.check(LEFT));
        assert!(!motion.check(BACK));
    }

    #[test]
    fn test_angle_change_requires_arming() {
        let mut motion = half_turn(TurnDirection::Either);
        // Never neutral first, so alignment never starts
        assert!(!motion.check(FORWARD));
        assert!(!motion.check(RIGHT));
        assert!(!motion.check(BACK));
    }

    #[test]
    fn test_angle_change_neutral_resets() {
        let mut motion = half_turn(TurnDirection::Cw);
        motion.check(Vec2::ZERO);
        motion.check(FORWARD);
        motion.check(RIGHT);
        assert!(!motion.check(Vec2::ZERO));

        // Starting over from neutral still works
        assert!(!motion.check(Vec2::ZERO));
        assert!(!motion.check(FORWARD));
        assert!(!motion.check(RIGHT));
        assert!(motion.check(BACK));
    }

    #[test]
    fn test_facing_vectors() {
        assert_eq!(FacingDirection::Forward.vector(), Vec2::Y);
        assert_eq!(FacingDirection::Left.vector(), Vec2::NEG_X);
    }
}
