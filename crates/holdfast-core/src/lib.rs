//! Holdfast Core - Shared primitives for frame-indexed input buffering
//!
//! This crate provides the types every other holdfast crate builds on:
//! - Interned input identifiers (`InputId`)
//! - The ordered identifier registry (`InputRegistry`)
//! - The raw input table written by the host input system (`RawInputTable`)
//! - Tick counting and fixed-step timing (`Tick`, `FixedTicker`)
//!
//! ## Context, not globals
//!
//! The registry and raw input table are plain values. Each controlled entity
//! owns its own pair and hands them to its buffer explicitly, so several
//! buffers (split-screen, multiple local players) never observe each other's
//! input.

mod error;
mod identity;
mod raw;
mod registry;
pub mod time;

pub use error::{Error, Result};
pub use identity::InputId;
pub use raw::{RawInput, RawInputTable};
pub use registry::InputRegistry;
pub use time::{FixedTicker, Tick, MAX_STEPS_PER_ADVANCE};

// Re-export the vector type used for axis samples
pub use glam::Vec2;
