//! A single-player blackjack game built from pure state transitions.
//!
//! The crate provides a [`GameState`] snapshot and transitions that each
//! return a new snapshot: shuffle, bet, deal, hit, stand, the dealer's play,
//! and settlement. With the `std` feature, [`Console`] drives a whole game
//! over any line-based reader and writer.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use shoe21::{GameState, Phase};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let state = GameState::new(200).shuffle(3, &mut rng);
//! let state = state.place_bet("10").unwrap().deal().unwrap();
//! assert_eq!(state.phase, Phase::PlayerTurn);
//! assert_eq!(state.player.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Console;
#[cfg(feature = "std")]
pub use error::ConsoleError;
pub use error::{ActionError, BetError, DealError};
pub use game::{GameState, Phase, dealer_should_hit, settle};
pub use hand::{BLACKJACK, DealerView, Hand};
pub use options::TableOptions;
pub use result::{HandOutcome, Settlement};
pub use shoe::Shoe;
