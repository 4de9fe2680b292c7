//! Notification sink for sound and animation layers.

use alloc::vec::Vec;

/// A discrete table event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A card left the shoe.
    CardDealt,
    /// The dealer's hole card was turned over.
    CardFlip,
    /// Chips were added to the wager by doubling down.
    ChipStack,
    /// The player won the round.
    Win,
    /// The player lost the round.
    Lose,
    /// The round was a push.
    Push,
}

/// Receives table events.
///
/// Delivery is fire-and-forget: implementations must not block and have no
/// way to fail the engine.
pub trait Notifier {
    /// Handles one event.
    fn notify(&mut self, event: Event);
}

/// A notifier that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Muted;

impl Notifier for Muted {
    fn notify(&mut self, _event: Event) {}
}

/// A notifier that keeps every event it receives, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }
}

impl Notifier for Recorder {
    fn notify(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl<F: FnMut(Event)> Notifier for F {
    fn notify(&mut self, event: Event) {
        self(event);
    }
}
