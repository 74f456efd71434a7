use tracing::debug;

use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::GameState;

impl GameState {
    /// Draws a card into the hand whose turn it is.
    ///
    /// Going over 21 ends that side's turn as if it stood. Reaching exactly
    /// 21 settles the hand immediately through [`GameState::end_hand`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoTurn`] if the hand is already over,
    /// [`ActionError::NoCards`] if the shoe is empty, and
    /// [`ActionError::ChipOverflow`] if reaching 21 settles a bet that
    /// overflows the balance.
    pub fn hit(&self) -> Result<Self, ActionError> {
        self.current_hand()?;

        let mut next = self.snapshot();
        let card = next.draw().ok_or(ActionError::NoCards)?;
        let hand = next.current_hand_mut()?;
        hand.add_card(card);
        let (score, bust) = (hand.score(), hand.is_bust());
        debug!(%card, score, phase = ?next.phase, "hit");

        if bust {
            Ok(next.stand())
        } else if score == BLACKJACK {
            next.end_hand()
        } else {
            Ok(next)
        }
    }

    /// Ends the current side's turn.
    ///
    /// Standing once the hand is over leaves the phase at
    /// [`Phase::HandOver`](super::Phase::HandOver).
    #[must_use]
    pub fn stand(&self) -> Self {
        let mut next = self.snapshot();
        next.phase = next.phase.next();
        debug!(phase = ?next.phase, "stand");
        next
    }
}
