//! Hand scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Sums the face-up cards, demoting aces from 11 to 1 while the total busts.
///
/// Returns the total and whether an ace is still counted as 11.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards.iter().filter(|c| c.is_face_up()) {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// Scores a run of cards under the soft-ace rule.
///
/// Face-down cards are skipped, so a dealer hand scores only its up-card
/// until the hole card is revealed. An empty slice scores 0.
///
/// ```
/// use bjtable::{Card, Rank, Suit, score};
///
/// let hand = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Six),
///     Card::new(Suit::Spades, Rank::Six),
/// ];
/// assert_eq!(score(&hand[..2]), 17);
/// assert_eq!(score(&hand), 13);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the face-up cards count an ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// An ordered run of cards held by the player or the dealer.
///
/// The score is never cached; every query re-evaluates the cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the face-up cards.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the first card, which is the dealer's up-card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Turns every face-down card face up.
    ///
    /// Returns whether anything was turned over.
    pub fn reveal(&mut self) -> bool {
        let mut flipped = false;
        for card in self.cards.iter_mut().filter(|c| !c.is_face_up()) {
            card.flip_up();
            flipped = true;
        }
        flipped
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
