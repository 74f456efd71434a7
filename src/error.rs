//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while placing a bet.
///
/// Both are recoverable: the caller keeps its previous state and asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The input is not a non-negative integer.
    #[error("couldn't parse the input, please select a number")]
    Parse,
    /// The bet is larger than the player's chip balance.
    #[error("the bet is higher than your limit ({chips} chips)")]
    ExceedsChips {
        /// The requested bet.
        bet: usize,
        /// The player's balance at the time of the bet.
        chips: usize,
    },
}

/// Errors that can occur during dealing.
///
/// Dealing from a short shoe is a broken precondition, not a player mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the shoe for two hands of two.
    #[error("not enough cards in the shoe ({remaining} left)")]
    NotEnoughCards {
        /// Cards left in the shoe.
        remaining: usize,
    },
}

/// Errors that can occur during hit, the dealer's play and settlement.
///
/// These mean the game loop broke an invariant and should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The hand is over, so there is no current hand to act on.
    #[error("it is not any player's turn")]
    NoTurn,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
    /// Settling the bet would overflow the chip balance or the net result.
    #[error("settling a bet of {bet} against {chips} chips overflows")]
    ChipOverflow {
        /// The bet being settled.
        bet: usize,
        /// The balance before settlement.
        chips: usize,
    },
}

/// Errors that end a console game early.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
    /// Input ended before the last round finished.
    #[error("input closed before the game finished")]
    InputClosed,
    /// The shoe could not cover a deal.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A hit or the dealer's play broke a turn invariant.
    #[error(transparent)]
    Action(#[from] ActionError),
}
