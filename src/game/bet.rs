use alloc::vec::Vec;

use tracing::debug;

use crate::error::{ActionError, BetError, EmptyShoeError};
use crate::notify::{Event, Notifier};
use crate::replay::{Replay, Step};
use crate::result::{Message, Outcome};

use super::{Game, Phase};

impl<N: Notifier> Game<N> {
    /// Places the wager for the round.
    ///
    /// The amount leaves the balance immediately and the table moves to
    /// [`Phase::Dealing`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the amount is zero,
    /// or it exceeds the balance.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.round.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if !self.ledger.withdraw(amount) {
            return Err(BetError::InsufficientFunds);
        }

        self.round.bet = amount;
        self.round.phase = Phase::Dealing;
        self.round.message = Message::ReadyToDeal;
        debug!(amount, balance = self.ledger.balance(), "bet placed");

        Ok(())
    }

    /// Deals two cards to the player and two to the dealer, the second face down.
    ///
    /// A player 21 settles at once as a blackjack without checking the
    /// dealer's hand. Otherwise the player is to act.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not waiting for the deal or no bet
    /// has been placed.
    pub fn deal(&mut self) -> Result<Replay, ActionError> {
        if self.round.phase != Phase::Dealing {
            return Err(ActionError::InvalidState);
        }

        if self.round.bet == 0 {
            return Err(ActionError::NoBet);
        }

        let mut steps = Vec::new();

        if let Err(err) = self.deal_initial(&mut steps) {
            self.abandon(err, &mut steps);
            return Ok(Replay::new(steps));
        }

        if self.round.player.score() == 21 {
            self.settle(Outcome::Blackjack, &mut steps);
        } else {
            self.round.phase = Phase::PlayerTurn;
            self.round.message = Message::YourTurn;
            self.refresh_hint();
            debug!(
                player = self.round.player.score(),
                dealer = self.round.dealer.score(),
                "player to act"
            );
        }

        Ok(Replay::new(steps))
    }

    // Player, player, dealer up-card, dealer hole card.
    fn deal_initial(&mut self, steps: &mut Vec<Step>) -> Result<(), EmptyShoeError> {
        for _ in 0..2 {
            let card = self.shoe.draw()?;
            self.round.player.add_card(card);
            self.emit(steps, Event::CardDealt);
        }

        let up = self.shoe.draw()?;
        self.round.dealer.add_card(up);
        self.emit(steps, Event::CardDealt);

        let hole = self.shoe.draw()?;
        self.round.dealer.add_card(hole.face_down());
        self.emit(steps, Event::CardDealt);

        Ok(())
    }
}
