//! Frame-indexed input buffer
//!
//! Keeps the last `N` ticks of input state as rows in a ring, newest at
//! row 0. Each tick a new row is derived from the previous front row and the
//! latest raw samples, and the oldest row falls out of the window.
//!
//! A press is consumable on the row where its hold time is exactly 1 (the
//! rising edge) until it is consumed or that row is evicted. When several
//! presses of the same input are pending, the oldest one is consumed first.

use crate::{BufferFrame, Error, FrameState, Result};
use holdfast_core::{InputId, InputRegistry, RawInputTable, Tick};
use holdfast_ring::RingBuffer;
use indexmap::IndexMap;

/// Ring of per-tick input rows with buffered consumption
///
/// # Example
///
/// ```rust
/// use holdfast_buffer::InputBuffer;
/// use holdfast_core::{InputRegistry, RawInputTable};
///
/// let registry: InputRegistry = ["Jump"].into_iter().collect();
/// let mut buffer = InputBuffer::new(3, registry);
/// let mut raw = RawInputTable::new();
///
/// raw.set_button("Jump", true);
/// buffer.update_buffer(&raw);
/// buffer.update_buffer(&raw);
///
/// // The press from the previous tick is still buffered
/// assert!(buffer.consume_input("Jump"));
/// assert!(!buffer.consume_input("Jump"));
/// ```
#[derive(Debug, Clone)]
pub struct InputBuffer {
    /// Identifiers every row is keyed by
    registry: InputRegistry,
    /// Rows, newest first; always full
    rows: RingBuffer<BufferFrame>,
    /// Oldest row holding a consumable press, per input
    oldest_valid: IndexMap<InputId, Option<usize>>,
    /// Number of updates performed
    tick: Tick,
}

impl InputBuffer {
    /// Create a buffer of `buffer_size` resting rows
    ///
    /// The registry is moved into the buffer and cannot change afterwards
    /// except through [`InputBuffer::reinitialize`].
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is zero.
    pub fn new(buffer_size: usize, registry: InputRegistry) -> Self {
        assert!(buffer_size > 0, "Input buffer size must be greater than 0");
        let mut buffer = Self {
            registry: InputRegistry::new(),
            rows: RingBuffer::new(buffer_size),
            oldest_valid: IndexMap::new(),
            tick: 0,
        };
        buffer.reinitialize(registry);
        buffer
    }

    /// Create a buffer, rejecting a zero size instead of panicking
    pub fn try_new(buffer_size: usize, registry: InputRegistry) -> Result<Self> {
        if buffer_size == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self::new(buffer_size, registry))
    }

    /// Install a new registry, rebuilding every row from rest
    ///
    /// All held state and pending presses are discarded. The tick counter
    /// keeps running.
    pub fn reinitialize(&mut self, registry: InputRegistry) {
        self.registry = registry;

        self.rows.clear();
        for _ in 0..self.rows.capacity() {
            self.rows.push_back(BufferFrame::new(&self.registry));
        }

        self.oldest_valid = self.registry.iter().map(|id| (id.clone(), None)).collect();
    }

    /// Advance the buffer by one tick
    ///
    /// Pushes a new front row (previous front state resolved against `raw`),
    /// evicting the oldest row, then recomputes the oldest consumable row of
    /// every input. Call exactly once per tick, before any consumption.
    pub fn update_buffer(&mut self, raw: &RawInputTable) {
        let registry = &self.registry;
        self.rows.push_front_with(|fresh, previous| {
            // With a single row the fresh slot already holds the previous state
            if let Some(previous) = previous {
                fresh.initialize_frame(registry);
                fresh.copy_frame_state(previous);
            }
            fresh.update_frame_state(raw);
        });
        self.tick += 1;

        for (id, oldest) in self.oldest_valid.iter_mut() {
            *oldest = self
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.get(id.as_str()).is_some_and(FrameState::can_execute))
                .map(|(index, _)| index)
                .last();
        }

        tracing::trace!(tick = self.tick, oldest_valid = ?self.oldest_valid, "input buffer updated");
    }

    /// Whether a press of `id` could be consumed right now
    ///
    /// # Panics
    ///
    /// Panics if `id` is not registered.
    pub fn can_press_input(&self, id: &str) -> bool {
        self.try_can_press_input(id)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Whether a press of `id` could be consumed right now, or an error if
    /// `id` is not registered
    pub fn try_can_press_input(&self, id: &str) -> Result<bool> {
        let oldest = self.cached_row(id)?;
        Ok(oldest
            .and_then(|row| self.state(row, id))
            .is_some_and(FrameState::can_execute))
    }

    /// Consume the oldest pending press of `id`
    ///
    /// Returns `true` if a press was consumed. A consumed press can never be
    /// consumed again.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not registered.
    pub fn consume_input(&mut self, id: &str) -> bool {
        self.try_consume_input(id)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Consume the oldest pending press of `id`, or an error if `id` is not
    /// registered
    pub fn try_consume_input(&mut self, id: &str) -> Result<bool> {
        self.registry.require(id)?;
        let Some(oldest) = self.oldest_valid.get_mut(id) else {
            return Ok(false);
        };
        let Some(row) = *oldest else {
            return Ok(false);
        };

        // The cached row may have been consumed by an earlier caller this tick
        match self.rows.get_mut(row).and_then(|frame| frame.get_mut(id)) {
            Some(state) if state.can_execute() => {
                state.used = true;
                *oldest = None;
                tracing::debug!(input = id, row, tick = self.tick, "input consumed");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Row index of the oldest pending press of `id`
    ///
    /// `None` if nothing is pending or `id` is not registered.
    pub fn oldest_valid_frame(&self, id: &str) -> Option<usize> {
        self.oldest_valid.get(id).copied().flatten()
    }

    /// Hold time of `id` on the newest row
    pub fn hold_time(&self, id: &str) -> Option<i32> {
        self.front().get(id).map(|state| state.hold_time)
    }

    /// Whether `id` is held on the newest row
    pub fn is_held(&self, id: &str) -> bool {
        self.front().get(id).is_some_and(FrameState::is_held)
    }

    /// State of `id` on a given row (0 = newest)
    pub fn state(&self, row: usize, id: &str) -> Option<&FrameState> {
        self.rows.get(row).and_then(|frame| frame.get(id))
    }

    /// Get a row (0 = newest)
    pub fn row(&self, row: usize) -> Option<&BufferFrame> {
        self.rows.get(row)
    }

    /// Iterate rows from newest to oldest
    pub fn rows(&self) -> impl Iterator<Item = &BufferFrame> {
        self.rows.iter()
    }

    /// The newest row
    pub fn front(&self) -> &BufferFrame {
        &self.rows[0]
    }

    /// Number of rows (the buffering window in ticks)
    pub fn capacity(&self) -> usize {
        self.rows.capacity()
    }

    /// Registered identifiers
    pub fn registry(&self) -> &InputRegistry {
        &self.registry
    }

    /// Number of updates performed so far
    pub fn tick(&self) -> Tick {
        self.tick
    }

    fn cached_row(&self, id: &str) -> Result<Option<usize>> {
        self.registry.require(id)?;
        Ok(self.oldest_valid_frame(id))
    }
}
