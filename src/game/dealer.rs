use alloc::vec::Vec;

use tracing::{debug, info, warn};

use crate::error::EmptyShoeError;
use crate::notify::{Event, Notifier};
use crate::options::RoundingMode;
use crate::replay::Step;
use crate::result::{Message, Outcome, RoundResult};

use super::{Game, Phase};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl<N: Notifier> Game<N> {
    /// Dealer draws until reaching the stand total, then the round settles.
    ///
    /// Soft totals draw like hard ones. Every card comes from the round's
    /// shoe; running it dry settles the round as void.
    pub(super) fn dealer_play(&mut self, steps: &mut Vec<Step>) {
        while self.round.dealer.score() < self.options.dealer_stands_on {
            match self.shoe.draw() {
                Ok(card) => {
                    self.round.dealer.add_card(card);
                    self.emit(steps, Event::CardDealt);
                }
                Err(err) => {
                    self.abandon(err, steps);
                    return;
                }
            }
        }

        let dealer = self.round.dealer.score();
        let player = self.round.player.score();
        debug!(player, dealer, "dealer stands");

        let outcome = if dealer > 21 {
            Outcome::DealerBust
        } else if dealer < player {
            Outcome::Win
        } else if dealer > player {
            Outcome::Lose
        } else {
            Outcome::Push
        };

        self.settle(outcome, steps);
    }

    /// Blackjack bonus on top of the returned stake.
    fn blackjack_bonus(&self, bet: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let bonus = (bet as f64) * self.options.blackjack_pays;
        round_amount(bonus, self.options.rounding_blackjack)
    }

    /// Pays out the round, updates the ledger, and ends the round.
    pub(super) fn settle(&mut self, outcome: Outcome, steps: &mut Vec<Step>) {
        let bet = self.round.bet;

        let (payout, event) = match outcome {
            Outcome::Blackjack => {
                let bonus = self.blackjack_bonus(bet);
                self.ledger.record_win(bonus);
                (bet + bonus, Event::Win)
            }
            Outcome::Win | Outcome::DealerBust => {
                self.ledger.record_win(bet);
                (bet * 2, Event::Win)
            }
            Outcome::Bust | Outcome::Lose => {
                self.ledger.record_loss(bet);
                (0, Event::Lose)
            }
            Outcome::Push | Outcome::Void => {
                self.ledger.record_push();
                (bet, Event::Push)
            }
        };

        self.ledger.credit(payout);

        let result = RoundResult {
            outcome,
            bet,
            payout,
            player_score: self.round.player.score(),
            dealer_score: self.round.dealer.score(),
        };

        self.round.phase = Phase::Settled;
        self.round.message = Message::Settled(outcome);
        self.round.advice = None;
        self.result = Some(result);

        info!(
            ?outcome,
            bet,
            payout,
            player = result.player_score,
            dealer = result.dealer_score,
            balance = self.ledger.balance(),
            "round settled"
        );

        self.emit(steps, event);
    }

    /// Ends a round whose shoe ran dry, returning the stake.
    pub(super) fn abandon(&mut self, err: EmptyShoeError, steps: &mut Vec<Step>) {
        warn!(
            error = %err,
            phase = ?self.round.phase,
            "shoe exhausted mid-round, settling as push"
        );
        self.settle(Outcome::Void, steps);
    }
}
