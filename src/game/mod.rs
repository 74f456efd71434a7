//! Game state and the transitions between snapshots.
//!
//! Every transition borrows the current [`GameState`] and returns a new,
//! independent one. The input is never modified, so a caller can keep any
//! earlier snapshot around and inspect it later.

use rand::Rng;
use tracing::{info, warn};

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::Settlement;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::{dealer_should_hit, settle};
pub use state::Phase;

/// A snapshot of a single-player blackjack table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Undealt cards, drawn from the front.
    pub shoe: Shoe,
    /// Whose turn it is.
    pub phase: Phase,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// The player's chip balance, carried across hands.
    pub chips: usize,
    /// The bet on the current hand.
    pub bet: usize,
    /// Result of the most recently finished hand, cleared by the next deal.
    pub settlement: Option<Settlement>,
}

impl GameState {
    /// Creates a table with an empty shoe and the given chip balance.
    ///
    /// Nothing has been dealt yet, so the phase starts at
    /// [`Phase::HandOver`]. Call [`GameState::shuffle`] before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::{GameState, Phase};
    ///
    /// let state = GameState::new(200);
    /// assert_eq!(state.chips, 200);
    /// assert_eq!(state.phase, Phase::HandOver);
    /// ```
    #[must_use]
    pub const fn new(chips: usize) -> Self {
        Self {
            shoe: Shoe::new(),
            phase: Phase::HandOver,
            player: Hand::new(),
            dealer: Hand::new(),
            chips,
            bet: 0,
            settlement: None,
        }
    }

    /// Replaces the shoe with the given cards, keeping everything else.
    #[must_use]
    pub fn with_shoe(mut self, shoe: Shoe) -> Self {
        self.shoe = shoe;
        self
    }

    /// Deep copy that the transitions build on.
    fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Replaces the shoe with `decks` freshly shuffled decks.
    #[must_use]
    pub fn shuffle<R: Rng + ?Sized>(&self, decks: u8, rng: &mut R) -> Self {
        let mut next = self.snapshot();
        next.shoe = Shoe::shuffled(decks, rng);
        info!(decks, cards = next.shoe.len(), "shoe shuffled");
        next
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the hand whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoTurn`] once the hand is over.
    pub fn current_hand(&self) -> Result<&Hand, ActionError> {
        match self.phase {
            Phase::PlayerTurn => Ok(&self.player),
            Phase::DealerTurn => Ok(&self.dealer),
            Phase::HandOver => Err(ActionError::NoTurn),
        }
    }

    fn current_hand_mut(&mut self) -> Result<&mut Hand, ActionError> {
        match self.phase {
            Phase::PlayerTurn => Ok(&mut self.player),
            Phase::DealerTurn => Ok(&mut self.dealer),
            Phase::HandOver => {
                warn!("no current hand after the hand is over");
                Err(ActionError::NoTurn)
            }
        }
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Option<Card> {
        self.shoe.draw()
    }
}
