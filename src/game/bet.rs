use tracing::{debug, info, warn};

use crate::error::{BetError, DealError};

use super::{GameState, Phase};

/// Cards needed for the opening two-card hands.
const OPENING_CARDS: usize = 4;

impl GameState {
    /// Places a bet from raw console input.
    ///
    /// Surrounding whitespace is ignored. On error the caller still holds the
    /// unchanged state and can simply ask again.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::Parse`] if the input is not a non-negative integer
    /// and [`BetError::ExceedsChips`] if the bet is above the chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::{BetError, GameState};
    ///
    /// let state = GameState::new(100);
    /// assert_eq!(state.place_bet("abc").unwrap_err(), BetError::Parse);
    /// assert_eq!(state.place_bet(" 25 ").map(|s| s.bet), Ok(25));
    /// ```
    pub fn place_bet(&self, input: &str) -> Result<Self, BetError> {
        let bet: usize = input.trim().parse().map_err(|_| BetError::Parse)?;

        if bet > self.chips {
            return Err(BetError::ExceedsChips {
                bet,
                chips: self.chips,
            });
        }

        let mut next = self.snapshot();
        next.bet = bet;
        info!(bet, chips = next.chips, "bet placed");
        Ok(next)
    }

    /// Deals two cards each, alternating player then dealer, and hands the
    /// turn to the player.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than four cards remain.
    pub fn deal(&self) -> Result<Self, DealError> {
        let short = DealError::NotEnoughCards {
            remaining: self.shoe.len(),
        };
        if self.shoe.len() < OPENING_CARDS {
            warn!(remaining = self.shoe.len(), "shoe too short to deal");
            return Err(short);
        }

        let mut next = self.snapshot();
        next.player.clear();
        next.dealer.clear();
        next.settlement = None;

        for _ in 0..2 {
            let card = next.draw().ok_or(short)?;
            next.player.add_card(card);
            let card = next.draw().ok_or(short)?;
            next.dealer.add_card(card);
        }

        next.phase = Phase::PlayerTurn;
        debug!(
            player = next.player.score(),
            remaining = next.shoe.len(),
            "hands dealt"
        );
        Ok(next)
    }
}
