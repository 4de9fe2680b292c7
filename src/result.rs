//! Round settlement types.

use core::fmt;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Natural 21 on the initial deal.
    Blackjack,
    /// Player total beat the dealer.
    Win,
    /// Dealer went over 21.
    DealerBust,
    /// Player went over 21.
    Bust,
    /// Dealer total beat the player.
    Lose,
    /// Equal totals; the stake is returned.
    Push,
    /// The shoe ran dry; the stake is returned.
    Void,
}

impl Outcome {
    /// Returns whether the round counts as a win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win | Self::DealerBust)
    }

    /// Returns whether the round counts as a loss.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Bust | Self::Lose)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The final wager, doubled if the player doubled down.
    pub bet: usize,
    /// Chips credited back to the balance, stake included.
    pub payout: usize,
    /// The player's final total.
    pub player_score: u8,
    /// The dealer's final visible total.
    pub dealer_score: u8,
}

impl RoundResult {
    /// Net result (positive = profit, negative = loss).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// Status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Waiting for a wager.
    PlaceBet,
    /// Bet placed, waiting for the deal.
    ReadyToDeal,
    /// Player to act.
    YourTurn,
    /// Dealer drawing.
    DealerTurn,
    /// Round settled with the given outcome.
    Settled(Outcome),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PlaceBet => "Place your bet!",
            Self::ReadyToDeal => "Ready to deal",
            Self::YourTurn => "Your turn",
            Self::DealerTurn => "Dealer's turn",
            Self::Settled(Outcome::Blackjack) => "Blackjack!",
            Self::Settled(Outcome::Win) => "You win!",
            Self::Settled(Outcome::DealerBust) => "You win! Dealer bust!",
            Self::Settled(Outcome::Bust) => "Bust!",
            Self::Settled(Outcome::Lose) => "Dealer wins",
            Self::Settled(Outcome::Push) => "Push",
            Self::Settled(Outcome::Void) => "Shoe exhausted, stake returned",
        };
        f.write_str(text)
    }
}
