//! Error types for table commands.
//!
//! A command that returns an error has not changed the table. Callers may
//! discard these errors freely; they exist so a presentation layer can tell
//! the player why nothing happened.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The table is not taking bets.
    #[error("bets are only accepted before the deal")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bet exceeds the balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during dealing and player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid phase for this action.
    #[error("invalid phase for this action")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}

/// The shoe ran out of cards mid-round.
///
/// A single 52-card shoe always covers one round, so this points at a
/// stacked or misconfigured shoe. The engine settles the round as a push
/// instead of surfacing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyShoeError;
