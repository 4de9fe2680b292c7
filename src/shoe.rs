//! The single-deck shoe used for one round.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyShoeError;

/// An ordered pool of cards drawn from the top.
///
/// A fresh shoe holds one of each rank and suit combination. Cards are only
/// ever removed, never returned or replenished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// Cards in the shoe; the top of the shoe is the end of the vector.
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds a 52-card shoe and shuffles it with `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::Shoe;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    /// let shoe = Shoe::new(&mut rng);
    /// assert_eq!(shoe.len(), 52);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        fisher_yates(&mut cards, rng);
        Self { cards }
    }

    /// Creates a shoe from an explicit draw order.
    ///
    /// `draws[0]` is the first card dealt. Intended for stacked shoes in
    /// replays and tests; no uniqueness check is made.
    #[must_use]
    pub fn from_cards(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] when no cards are left.
    pub fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop().ok_or(EmptyShoeError)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// Walks from the last index down, swapping each slot with a uniformly chosen
// slot at or below it.
fn fisher_yates<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}
