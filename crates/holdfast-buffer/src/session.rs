//! Input session: one buffer plus everything needed to drive it
//!
//! A session belongs to one controlled entity. It owns the raw input table
//! written by the host's input callbacks, advances the buffer at a fixed rate
//! regardless of the host frame rate, and tracks directional motion commands.
//!
//! ```text
//! host input events ──▶ trigger_* / complete_input ──▶ RawInputTable
//!                                                         │
//! host frame (dt) ──▶ tick(dt) ──▶ step() × n ──▶ InputBuffer::update_buffer
//!                                                └▶ MotionCommand::check
//!
//! gameplay ──▶ consume_input / consume_directional_input
//! ```

use crate::{ActionKind, Error, InputBuffer, InputBufferConfig, MotionCommand, Result};
use holdfast_core::{FixedTicker, InputId, RawInput, RawInputTable, Tick, Vec2};
use indexmap::IndexMap;

/// A motion command and when it last completed
#[derive(Debug, Clone)]
struct MotionSlot {
    command: MotionCommand,
    registered_at: Option<Tick>,
}

impl MotionSlot {
    /// Feed this tick's axis sample, expiring a registration older than the window
    fn advance(&mut self, axis: Vec2, tick: Tick, window: Tick) {
        if let Some(at) = self.registered_at {
            if tick - at < window {
                return;
            }
            self.registered_at = None;
            self.command.reset();
        }
        if self.command.check(axis) {
            self.registered_at = Some(tick);
            tracing::debug!(motion = %self.command.id(), tick, "motion command registered");
        }
    }

    fn consume(&mut self) -> bool {
        if self.registered_at.take().is_some() {
            self.command.reset();
            true
        } else {
            false
        }
    }
}

/// Buffer, raw input and fixed-rate driver for one controlled entity
#[derive(Debug, Clone)]
pub struct InputSession {
    config: InputBufferConfig,
    buffer: InputBuffer,
    raw: RawInputTable,
    ticker: FixedTicker,
    motions: IndexMap<InputId, MotionSlot>,
}

impl InputSession {
    /// Build a session from a configuration
    ///
    /// Validates the configuration, registers every action and declares a
    /// neutral raw sample for it.
    pub fn new(config: InputBufferConfig) -> Result<Self> {
        config.validate()?;

        let buffer = InputBuffer::try_new(config.buffer_size, config.registry())?;

        let mut raw = RawInputTable::new();
        for action in &config.actions {
            match action.kind {
                ActionKind::Button => raw.set_button(action.id.clone(), false),
                ActionKind::Axis => raw.set_axis(action.id.clone(), Vec2::ZERO),
            }
        }

        let motions = config
            .motions
            .iter()
            .map(|def| {
                let slot = MotionSlot {
                    command: def.command(),
                    registered_at: None,
                };
                (def.id.clone(), slot)
            })
            .collect();

        tracing::debug!(
            buffer_size = config.buffer_size,
            update_rate = config.update_rate,
            actions = config.actions.len(),
            motions = config.motions.len(),
            "input session created"
        );

        Ok(Self {
            ticker: FixedTicker::from_rate(config.update_rate),
            config,
            buffer,
            raw,
            motions,
        })
    }

    /// Record a button press or release from the host
    pub fn trigger_button(&mut self, id: &str, pressed: bool) {
        match self.raw.get(id) {
            Some(RawInput::Button(_)) => self.raw.set_button(id, pressed),
            _ => tracing::warn!(input = id, "button event for an input that is not a configured button"),
        }
    }

    /// Record an axis value from the host
    pub fn trigger_axis(&mut self, id: &str, axis: Vec2) {
        match self.raw.get(id) {
            Some(RawInput::Axis(_)) => self.raw.set_axis(id, axis),
            _ => tracing::warn!(input = id, "axis event for an input that is not a configured axis"),
        }
    }

    /// Return an input to neutral once the host reports it completed
    pub fn complete_input(&mut self, id: &str) {
        if !self.raw.complete(id) {
            tracing::warn!(input = id, "completion for an unknown input");
        }
    }

    /// Advance by `dt` seconds of host time, returning the number of buffer updates run
    pub fn tick(&mut self, dt: f32) -> u32 {
        let steps = self.ticker.advance(dt);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// Run exactly one buffer update
    pub fn step(&mut self) {
        self.buffer.update_buffer(&self.raw);

        let tick = self.buffer.tick();
        let window = self.buffer.capacity() as Tick;
        for slot in self.motions.values_mut() {
            let axis = match self.raw.get(slot.command.axis().as_str()) {
                Some(RawInput::Axis(axis)) => axis,
                _ => Vec2::ZERO,
            };
            slot.advance(axis, tick, window);
        }
    }

    /// Whether a press of `id` could be consumed right now
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a configured action.
    pub fn can_press_input(&self, id: &str) -> bool {
        self.buffer.can_press_input(id)
    }

    /// Consume the oldest pending press of `id`
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a configured action.
    pub fn consume_input(&mut self, id: &str) -> bool {
        self.buffer.consume_input(id)
    }

    /// Consume the oldest pending press of `id`, or an error if `id` is not
    /// a configured action
    pub fn try_consume_input(&mut self, id: &str) -> Result<bool> {
        self.buffer.try_consume_input(id)
    }

    /// Whether motion command `id` has completed and not yet been consumed
    pub fn is_directional_input_registered(&self, id: &str) -> bool {
        self.motions
            .get(id)
            .is_some_and(|slot| slot.registered_at.is_some())
    }

    /// Consume a completed motion command
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a configured motion command.
    pub fn consume_directional_input(&mut self, id: &str) -> bool {
        self.try_consume_directional_input(id)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Consume a completed motion command, or an error if `id` is not a
    /// configured motion command
    pub fn try_consume_directional_input(&mut self, id: &str) -> Result<bool> {
        let Some(slot) = self.motions.get_mut(id) else {
            return Err(Error::UnknownMotion(InputId::new(id)));
        };
        let consumed = slot.consume();
        if consumed {
            tracing::debug!(motion = id, tick = self.buffer.tick(), "motion command consumed");
        }
        Ok(consumed)
    }

    /// The underlying buffer
    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// The raw input table
    pub fn raw(&self) -> &RawInputTable {
        &self.raw
    }

    /// The session configuration
    pub fn config(&self) -> &InputBufferConfig {
        &self.config
    }

    /// Render the buffer as a text table
    pub fn debug_table(&self) -> String {
        crate::render_debug_table(&self.buffer)
    }
}
