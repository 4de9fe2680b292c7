//! Basic strategy hints.

use core::fmt;

use crate::card::Card;
use crate::hand::Hand;

/// A recommended player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet and take exactly one card.
    Double,
}

/// A basic strategy recommendation with its player-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    /// The recommended move.
    pub action: Move,
    /// Human-readable hint.
    pub text: &'static str,
}

impl Advice {
    const fn new(action: Move, text: &'static str) -> Self {
        Self { action, text }
    }

    /// The move to make when doubling is not available.
    #[must_use]
    pub const fn without_double(&self) -> Move {
        match self.action {
            Move::Double => Move::Hit,
            other => other,
        }
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Looks up the basic strategy move for `player` against the dealer's
/// `up_card`.
///
/// The lookup is keyed on the player total, whether the hand is soft, and the
/// up-card value (ace = 11, faces = 10). Rules are checked in order and the
/// first match wins.
///
/// ```
/// use bjtable::{Card, Hand, Move, Rank, Suit, advise};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(Suit::Hearts, Rank::Six));
/// hand.add_card(Card::new(Suit::Clubs, Rank::Five));
///
/// let advice = advise(&hand, &Card::new(Suit::Spades, Rank::King));
/// assert_eq!(advice.action, Move::Double);
/// ```
#[must_use]
pub fn advise(player: &Hand, up_card: &Card) -> Advice {
    let total = player.score();
    let dealer = up_card.rank.value();

    if total >= 17 {
        return Advice::new(Move::Stand, "Stand with 17 or higher");
    }

    if total <= 8 {
        return Advice::new(Move::Hit, "Hit with 8 or lower");
    }

    if player.is_soft() {
        return match total {
            19.. => Advice::new(Move::Stand, "Stand with soft 19 or higher"),
            18 if dealer >= 9 => Advice::new(Move::Hit, "Hit on soft 18 vs 9 or higher"),
            18 => Advice::new(Move::Stand, "Stand on soft 18 vs 8 or lower"),
            _ => Advice::new(Move::Hit, "Hit on soft 17 or lower"),
        };
    }

    match total {
        16 if dealer >= 7 => Advice::new(Move::Hit, "Hit on 16 vs 7 or higher"),
        16 => Advice::new(Move::Stand, "Stand on 16 vs 6 or lower"),
        15 if dealer >= 7 => Advice::new(Move::Hit, "Hit on 15 vs 7 or higher"),
        15 => Advice::new(Move::Stand, "Stand on 15 vs 6 or lower"),
        13 | 14 if dealer >= 7 => Advice::new(Move::Hit, "Hit on 13-14 vs 7 or higher"),
        13 | 14 => Advice::new(Move::Stand, "Stand on 13-14 vs 6 or lower"),
        12 if dealer >= 7 || dealer <= 3 => Advice::new(Move::Hit, "Hit on 12 vs 7+ or 2-3"),
        12 => Advice::new(Move::Stand, "Stand on 12 vs 4-6"),
        11 => Advice::new(
            Move::Double,
            "Double down on 11 (Hit if double down not allowed)",
        ),
        10 if dealer >= 10 => Advice::new(Move::Hit, "Hit on 10 vs 10+"),
        10 => Advice::new(Move::Double, "Double down on 10 vs 9 or lower"),
        9 if dealer >= 7 || dealer == 2 => Advice::new(Move::Hit, "Hit on 9 vs 7+ or 2"),
        9 => Advice::new(Move::Double, "Double down on 9 vs 3-6"),
        _ => Advice::new(Move::Hit, "Hit"),
    }
}
