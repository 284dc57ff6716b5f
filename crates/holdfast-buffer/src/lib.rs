//! Holdfast Buffer - Frame-indexed input buffering
//!
//! This crate keeps a short history of input state so that a press made a few
//! ticks before gameplay can act on it is still honored:
//! - Per-input hold-time resolution (`FrameState`)
//! - Rows of state for every registered input (`BufferFrame`)
//! - The ring of rows and buffered consumption (`InputBuffer`)
//! - Directional gestures on axis inputs (`MotionCommand`)
//! - RON configuration (`InputBufferConfig`)
//! - A fixed-rate driver tying it together (`InputSession`)
//!
//! # Architecture
//!
//! ```text
//! RawInputTable ──▶ InputBuffer::update_buffer
//!                     │
//!                     ▼
//!   row 0  [ Jump: 2  | Attack: 0 ]   newest
//!   row 1  [ Jump: 1  | Attack: 0 ]   ◀── oldest consumable Jump press
//!   row 2  [ Jump: 0  | Attack: 0 ]
//!   ...                               evicted after N updates
//! ```
//!
//! # Example
//!
//! ```rust
//! use holdfast_buffer::{InputBufferConfig, InputSession};
//!
//! let config = InputBufferConfig::default()
//!     .with_buffer_size(6)
//!     .with_button("Jump");
//! let mut session = InputSession::new(config).unwrap();
//!
//! session.trigger_button("Jump", true);
//! session.step();
//! session.complete_input("Jump");
//! session.step();
//!
//! // Released a tick ago, but the press is still buffered
//! assert!(session.consume_input("Jump"));
//! ```

mod buffer_frame;
mod config;
mod debug;
mod error;
mod frame_state;
mod input_buffer;
mod motion;
mod session;

pub use buffer_frame::BufferFrame;
pub use config::{ActionDef, ActionKind, InputBufferConfig, MotionDef, MAX_UPDATE_RATE};
pub use debug::render_debug_table;
pub use error::{Error, Result};
pub use frame_state::FrameState;
pub use input_buffer::InputBuffer;
pub use motion::{Direction, FacingDirection, MotionCommand, MotionKind, TurnDirection};
pub use session::InputSession;

// Re-export core types for convenience
pub use holdfast_core::{InputId, InputRegistry, RawInput, RawInputTable, Tick, Vec2};
