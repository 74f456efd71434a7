//! Settlement types for a finished hand.

use core::fmt;

use crate::hand::Hand;

/// How a hand ended for the player, in settlement precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player went over 21 and loses the bet.
    PlayerBust,
    /// Dealer went over 21 and the player wins the bet.
    DealerBust,
    /// Player has the higher score and wins the bet.
    Win,
    /// Dealer has the higher score and the player loses the bet.
    Lose,
    /// Equal scores, no chips change hands.
    Push,
}

impl HandOutcome {
    /// Returns the signed chip change for a bet of `bet`.
    ///
    /// Returns `None` when the bet does not fit in an `isize`.
    #[must_use]
    pub fn net(self, bet: usize) -> Option<isize> {
        let bet = isize::try_from(bet).ok()?;
        match self {
            Self::DealerBust | Self::Win => Some(bet),
            Self::PlayerBust | Self::Lose => Some(-bet),
            Self::Push => Some(0),
        }
    }
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::PlayerBust => "You busted",
            Self::DealerBust => "Dealer busted",
            Self::Win => "You win!",
            Self::Lose => "You lose",
            Self::Push => "Draw",
        };
        f.write_str(message)
    }
}

/// Result of a finished hand.
///
/// The hands are kept here because the game state clears its own hands when
/// the hand is settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome for the player.
    pub outcome: HandOutcome,
    /// The bet that was settled.
    pub bet: usize,
    /// The player's final hand.
    pub player_hand: Hand,
    /// The dealer's final hand.
    pub dealer_hand: Hand,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Net chip change for the player (positive = profit).
    pub net: isize,
    /// The player's chip balance after settlement.
    pub chips: usize,
}
