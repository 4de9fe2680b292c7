//! Replayable transition logs.
//!
//! The engine applies every command instantly. A presentation layer that
//! wants to stagger card animations or sounds plays back the [`Replay`] a
//! command returns, one [`Step`] at a time, on its own schedule.

use alloc::vec::{IntoIter, Vec};
use core::iter::FusedIterator;

use crate::game::TableView;
use crate::notify::Event;

/// One event and the table as it looked right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// What happened.
    pub event: Event,
    /// The table immediately after the event.
    pub view: TableView,
}

/// The ordered steps produced by a single command.
///
/// Replays are consumed as they are iterated and cannot be restarted.
#[derive(Debug, Clone)]
#[must_use = "a replay does nothing unless iterated"]
pub struct Replay {
    steps: IntoIter<Step>,
}

impl Replay {
    pub(crate) fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into_iter(),
        }
    }

    /// Returns the events still to be played, in order.
    pub fn events(&self) -> impl Iterator<Item = Event> + '_ {
        self.steps.as_slice().iter().map(|step| step.event)
    }
}

impl Iterator for Replay {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        self.steps.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for Replay {}

impl FusedIterator for Replay {}
