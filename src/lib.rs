//! A single-seat blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one player against a dealer
//! through betting, the initial deal, the player's turn, the dealer's turn,
//! and settlement, keeping the balance and session statistics in a
//! [`Ledger`]. Every card-moving command returns a [`Replay`] that a
//! presentation layer can play back at its own pace, and events are pushed
//! to an injected [`Notifier`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameOptions, Phase};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! let replay = game.deal().unwrap();
//! assert!(replay.len() >= 4);
//!
//! if game.phase() == Phase::PlayerTurn {
//!     let _ = game.stand();
//! }
//! assert_eq!(game.phase(), Phase::Settled);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advisor;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod notify;
pub mod options;
pub mod replay;
pub mod result;
pub mod shoe;

// Re-export main types
pub use advisor::{Advice, Move, advise};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, EmptyShoeError};
pub use game::{Game, Phase, RoundState, TableView};
pub use hand::{Hand, is_soft, score};
pub use ledger::{Ledger, Stats};
pub use notify::{Event, Muted, Notifier, Recorder};
pub use options::{GameOptions, RoundingMode, Settings};
pub use replay::{Replay, Step};
pub use result::{Message, Outcome, RoundResult};
pub use shoe::Shoe;
