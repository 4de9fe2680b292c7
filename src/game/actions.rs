use alloc::vec::Vec;

use tracing::debug;

use crate::error::ActionError;
use crate::notify::{Event, Notifier};
use crate::replay::{Replay, Step};
use crate::result::{Message, Outcome};

use super::{Game, Phase};

impl<N: Notifier> Game<N> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.round.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a bust.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Replay, ActionError> {
        self.ensure_player_turn()?;

        let mut steps = Vec::new();

        let card = match self.shoe.draw() {
            Ok(card) => card,
            Err(err) => {
                self.abandon(err, &mut steps);
                return Ok(Replay::new(steps));
            }
        };

        self.round.player.add_card(card);
        self.refresh_hint();
        self.emit(&mut steps, Event::CardDealt);

        if self.round.player.is_bust() {
            self.settle(Outcome::Bust, &mut steps);
        }

        Ok(Replay::new(steps))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer's hole card is revealed and the dealer plays out the hand
    /// through settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<Replay, ActionError> {
        self.ensure_player_turn()?;

        let mut steps = Vec::new();
        self.reveal_for_dealer(&mut steps);
        self.dealer_play(&mut steps);

        Ok(Replay::new(steps))
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// Only allowed on the first two cards. A bust settles at once with the
    /// doubled wager lost; otherwise the dealer plays out the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand does not
    /// hold exactly two cards, or the balance cannot match the bet.
    pub fn double(&mut self) -> Result<Replay, ActionError> {
        self.ensure_player_turn()?;

        if self.round.player.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let bet = self.round.bet;
        if !self.ledger.withdraw(bet) {
            return Err(ActionError::InsufficientFunds);
        }

        self.round.bet = bet * 2;
        debug!(bet = self.round.bet, "doubled down");

        let mut steps = Vec::new();
        self.emit(&mut steps, Event::ChipStack);

        let card = match self.shoe.draw() {
            Ok(card) => card,
            Err(err) => {
                self.abandon(err, &mut steps);
                return Ok(Replay::new(steps));
            }
        };

        self.round.player.add_card(card);
        self.round.advice = None;
        self.emit(&mut steps, Event::CardDealt);

        if self.round.player.is_bust() {
            self.settle(Outcome::Bust, &mut steps);
        } else {
            self.reveal_for_dealer(&mut steps);
            self.dealer_play(&mut steps);
        }

        Ok(Replay::new(steps))
    }

    /// Hands the turn to the dealer and turns the hole card over.
    fn reveal_for_dealer(&mut self, steps: &mut Vec<Step>) {
        self.round.phase = Phase::DealerTurn;
        self.round.message = Message::DealerTurn;
        self.round.advice = None;

        if self.round.dealer.reveal() {
            self.emit(steps, Event::CardFlip);
        }
    }
}
