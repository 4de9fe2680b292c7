//! Round engine and session state.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::advisor::{Advice, advise};
use crate::error::ActionError;
use crate::ledger::{Ledger, Stats};
use crate::notify::{Event, Muted, Notifier};
use crate::options::{GameOptions, Settings};
use crate::replay::Step;
use crate::result::{Message, RoundResult};
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Phase, RoundState, TableView};

/// A single-seat blackjack table.
///
/// The table owns the round in progress, the shoe it is dealt from, and the
/// player's ledger. Every command either applies in full or returns an error
/// and leaves the table untouched. Commands that move cards return a
/// [`Replay`](crate::Replay) of the intermediate states.
pub struct Game<N = Muted> {
    /// Game options.
    options: GameOptions,
    /// Cards for the current round.
    shoe: Shoe,
    /// The round in progress.
    round: RoundState,
    /// Balance and statistics.
    ledger: Ledger,
    /// Sound and hint toggles.
    settings: Settings,
    /// Result of the last settled round.
    result: Option<RoundResult>,
    /// Event sink for sound or animation.
    notifier: N,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new silent table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Betting);
    /// assert_eq!(game.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_notifier(options, seed, Muted)
    }
}

impl<N: Notifier> Game<N> {
    /// Creates a new table that reports events to `notifier`.
    #[must_use]
    pub fn with_notifier(options: GameOptions, seed: u64, notifier: N) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(&mut rng);

        Self {
            shoe,
            round: RoundState::new(),
            ledger: Ledger::new(options.starting_balance),
            settings: options.settings,
            result: None,
            notifier,
            rng,
            options,
        }
    }

    /// Returns the table options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the round in progress.
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// Returns the ledger.
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> Phase {
        self.round.phase
    }

    /// Returns the chip balance.
    pub const fn balance(&self) -> usize {
        self.ledger.balance()
    }

    /// Returns the session statistics.
    pub const fn stats(&self) -> Stats {
        self.ledger.stats()
    }

    /// Returns the current settings.
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    /// Returns the status message.
    pub const fn message(&self) -> Message {
        self.round.message
    }

    /// Returns the current hint.
    ///
    /// `None` unless hints are enabled and it is the player's turn.
    pub const fn hint(&self) -> Option<Advice> {
        if self.settings.hints_enabled && matches!(self.round.phase, Phase::PlayerTurn) {
            self.round.advice
        } else {
            None
        }
    }

    /// Returns the result of the last settled round, cleared on reset.
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the notifier.
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the notifier mutably.
    pub const fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Returns a snapshot of the table.
    ///
    /// Calling this twice without a command in between yields equal views.
    pub fn view(&self) -> TableView {
        TableView {
            phase: self.round.phase,
            player: self.round.player.cards().to_vec(),
            player_score: self.round.player.score(),
            dealer: self.round.dealer.cards().to_vec(),
            dealer_score: self.round.dealer.score(),
            balance: self.ledger.balance(),
            bet: self.round.bet,
            message: self.round.message,
            hint: self.hint(),
            stats: self.ledger.stats(),
        }
    }

    /// Replaces the shoe before the initial deal.
    ///
    /// Used to replay a known card order.
    ///
    /// # Errors
    ///
    /// Returns an error once cards have been dealt this round.
    pub fn replace_shoe(&mut self, shoe: Shoe) -> Result<(), ActionError> {
        match self.round.phase {
            Phase::Betting | Phase::Dealing => {
                self.shoe = shoe;
                Ok(())
            }
            _ => Err(ActionError::InvalidState),
        }
    }

    /// Starts a new hand after settlement.
    ///
    /// A fresh shoe is shuffled and the hands, bet, message, and hint are
    /// cleared. Balance, settings, and statistics carry over.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round is settled.
    pub fn reset(&mut self) -> Result<(), ActionError> {
        if self.round.phase != Phase::Settled {
            return Err(ActionError::InvalidState);
        }

        self.shoe = Shoe::new(&mut self.rng);
        self.round = RoundState::new();
        self.result = None;
        debug!(balance = self.ledger.balance(), "new hand");

        Ok(())
    }

    /// Flips the sound setting and returns the new value.
    pub const fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.settings.sound_enabled
    }

    /// Flips the hint setting and returns the new value.
    pub fn toggle_hints(&mut self) -> bool {
        self.settings.hints_enabled = !self.settings.hints_enabled;
        self.refresh_hint();
        self.settings.hints_enabled
    }

    /// Recomputes the stored hint from the current hands.
    fn refresh_hint(&mut self) {
        self.round.advice = if self.settings.hints_enabled && self.round.phase == Phase::PlayerTurn
        {
            self.round
                .dealer
                .up_card()
                .map(|up| advise(&self.round.player, up))
        } else {
            None
        };
    }

    /// Records a step for the replay and forwards the event if sound is on.
    fn emit(&mut self, steps: &mut Vec<Step>, event: Event) {
        if self.settings.sound_enabled {
            self.notifier.notify(event);
        }
        steps.push(Step {
            event,
            view: self.view(),
        });
    }
}
