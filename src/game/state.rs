//! Round state types.

use alloc::vec::Vec;

use crate::advisor::Advice;
use crate::card::Card;
use crate::hand::Hand;
use crate::ledger::Stats;
use crate::result::Message;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting a bet for the next round.
    Betting,
    /// Bet placed, waiting for the initial deal.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled.
    Settled,
}

/// The live round: phase, both hands, and the wager on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub(super) phase: Phase,
    pub(super) player: Hand,
    pub(super) dealer: Hand,
    pub(super) bet: usize,
    pub(super) message: Message,
    pub(super) advice: Option<Advice>,
}

impl RoundState {
    pub(super) const fn new() -> Self {
        Self {
            phase: Phase::Betting,
            player: Hand::new(),
            dealer: Hand::new(),
            bet: 0,
            message: Message::PlaceBet,
            advice: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the wager on the table.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the status message.
    #[must_use]
    pub const fn message(&self) -> Message {
        self.message
    }
}

/// A snapshot of everything a presentation layer shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current phase.
    pub phase: Phase,
    /// Player cards in deal order.
    pub player: Vec<Card>,
    /// Player total.
    pub player_score: u8,
    /// Dealer cards in deal order; the hole card stays face down until revealed.
    pub dealer: Vec<Card>,
    /// Dealer total over face-up cards only.
    pub dealer_score: u8,
    /// Chip balance, excluding the wager on the table.
    pub balance: usize,
    /// Wager on the table.
    pub bet: usize,
    /// Status message.
    pub message: Message,
    /// Basic strategy hint, present only during the player's turn with hints on.
    pub hint: Option<Advice>,
    /// Session statistics.
    pub stats: Stats,
}

impl TableView {
    /// Returns the hint wording, or an empty string when there is none.
    #[must_use]
    pub fn hint_text(&self) -> &'static str {
        self.hint.map_or("", |advice| advice.text)
    }
}
