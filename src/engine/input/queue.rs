// FIFO of pointer events waiting for the next tick

use super::event::PointerEvent;
use std::collections::VecDeque;

/// Initial capacity; a frame rarely carries more than a handful of events
const INITIAL_CAPACITY: usize = 32;

/// Pointer events collected between ticks, applied in arrival order
#[derive(Debug)]
pub struct PointerQueue {
    events: VecDeque<PointerEvent>,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Add an event to the back of the queue
    pub fn push(&mut self, event: PointerEvent) {
        self.events.push_back(event);
    }

    /// Remove and yield every queued event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = PointerEvent> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for PointerQueue {
    fn default() -> Self {
        Self::new()
    }
}
