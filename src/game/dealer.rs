use core::cmp::Ordering;
use core::mem;

use tracing::{info, warn};

use crate::error::ActionError;
use crate::hand::{BLACKJACK, Hand};
use crate::result::{HandOutcome, Settlement};

use super::{GameState, Phase};

/// Returns whether the dealer draws another card.
///
/// The dealer draws on 16 or less and on a soft 17, and stands otherwise.
#[must_use]
pub fn dealer_should_hit(hand: &Hand) -> bool {
    let score = hand.score();
    score <= 16 || (score == 17 && hand.min_score() != 17)
}

/// Decides the outcome of a hand from both final scores.
///
/// A player bust loses even when the dealer also busts.
#[must_use]
pub fn settle(player_score: u8, dealer_score: u8) -> HandOutcome {
    if player_score > BLACKJACK {
        return HandOutcome::PlayerBust;
    }
    if dealer_score > BLACKJACK {
        return HandOutcome::DealerBust;
    }

    match player_score.cmp(&dealer_score) {
        Ordering::Greater => HandOutcome::Win,
        Ordering::Less => HandOutcome::Lose,
        Ordering::Equal => HandOutcome::Push,
    }
}

impl GameState {
    /// Plays the dealer's turn out by the house rule.
    ///
    /// Outside [`Phase::DealerTurn`] this returns an unchanged copy.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoCards`] if the shoe runs out while the dealer
    /// must still draw.
    pub fn play_dealer(&self) -> Result<Self, ActionError> {
        let mut state = self.snapshot();

        while state.phase == Phase::DealerTurn {
            state = if dealer_should_hit(&state.dealer) {
                state.hit()?
            } else {
                state.stand()
            };
        }

        Ok(state)
    }

    /// Settles the bet and clears the table for the next hand.
    ///
    /// The result is stored in [`GameState::settlement`]. Both hands are
    /// emptied, the bet drops to zero and the phase becomes
    /// [`Phase::HandOver`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::ChipOverflow`] if the new balance does not fit
    /// in a `usize` or the net result does not fit in an `isize`.
    pub fn end_hand(&self) -> Result<Self, ActionError> {
        let mut next = self.snapshot();

        let bet = next.bet;
        let player_score = next.player.score();
        let dealer_score = next.dealer.score();
        let outcome = settle(player_score, dealer_score);

        let balance = next.chips;
        let overflow = ActionError::ChipOverflow {
            bet,
            chips: balance,
        };
        let chips = match outcome {
            HandOutcome::DealerBust | HandOutcome::Win => balance.checked_add(bet),
            HandOutcome::PlayerBust | HandOutcome::Lose => Some(balance.saturating_sub(bet)),
            HandOutcome::Push => Some(balance),
        };
        let (Some(net), Some(chips)) = (outcome.net(bet), chips) else {
            warn!(bet, chips = balance, ?outcome, "chip balance overflow");
            return Err(overflow);
        };
        next.chips = chips;

        info!(
            ?outcome,
            bet,
            player_score,
            dealer_score,
            chips = next.chips,
            "hand settled"
        );

        next.settlement = Some(Settlement {
            outcome,
            bet,
            player_hand: mem::take(&mut next.player),
            dealer_hand: mem::take(&mut next.dealer),
            player_score,
            dealer_score,
            net,
            chips: next.chips,
        });
        next.bet = 0;
        next.phase = Phase::HandOver;
        Ok(next)
    }
}
