//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// The best possible score. Anything above it is bust.
pub const BLACKJACK: u8 = 21;

/// An ordered set of cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Sum of the card values with every Ace counted as 1.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |total, card| total.saturating_add(card.rank.value()))
    }

    /// Calculates the value of the hand.
    ///
    /// One Ace is counted as 11 when that keeps the hand at 21 or less;
    /// otherwise every Ace counts as 1.
    #[must_use]
    pub fn score(&self) -> u8 {
        let min_score = self.min_score();
        if min_score > 11 {
            return min_score;
        }

        if self.cards.iter().any(Card::is_ace) {
            min_score + 10
        } else {
            min_score
        }
    }

    /// Returns whether the hand is soft (an Ace is counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.score() != self.min_score()
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns a view that shows only the first card.
    #[must_use]
    pub const fn dealer_view(&self) -> DealerView<'_> {
        DealerView(self)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Full reveal: every card, comma separated.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// The dealer's hand as the player sees it during their turn.
#[derive(Debug, Clone, Copy)]
pub struct DealerView<'a>(&'a Hand);

impl fmt::Display for DealerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(up_card) = self.0.cards.first() else {
            return Ok(());
        };
        write!(f, "{up_card}")?;
        if self.0.len() > 1 {
            f.write_str(", **HIDDEN**")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use alloc::string::ToString;

    fn hand(ranks: &[Rank]) -> Hand {
        ranks.iter().map(|&rank| Card::new(rank, Suit::Hearts)).collect()
    }

    #[test]
    fn ten_and_ace_is_blackjack() {
        let hand = hand(&[Rank::Ten, Rank::Ace]);
        assert_eq!(hand.min_score(), 11);
        assert_eq!(hand.score(), 21);
        assert!(hand.is_soft());
    }

    #[test]
    fn only_one_ace_is_promoted() {
        let hand = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(hand.min_score(), 11);
        assert_eq!(hand.score(), 21);
    }

    #[test]
    fn ace_stays_low_when_high_would_bust() {
        let hand = hand(&[Rank::Ten, Rank::Nine, Rank::Ace]);
        assert_eq!(hand.min_score(), 20);
        assert_eq!(hand.score(), 20);
        assert!(!hand.is_soft());
    }

    #[test]
    fn bust_over_twenty_one() {
        let hand = hand(&[Rank::King, Rank::Queen, Rank::Two]);
        assert_eq!(hand.score(), 22);
        assert!(hand.is_bust());
    }

    #[test]
    fn empty_hand_scores_zero() {
        let hand = Hand::new();
        assert_eq!(hand.score(), 0);
        assert_eq!(hand.to_string(), "");
        assert_eq!(hand.dealer_view().to_string(), "");
    }

    #[test]
    fn display_full_and_dealer_views() {
        let hand: Hand = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Seven, Suit::Diamonds),
        ]
        .into_iter()
        .collect();

        assert_eq!(hand.to_string(), "Ace of Spades, Seven of Diamonds");
        assert_eq!(hand.dealer_view().to_string(), "Ace of Spades, **HIDDEN**");
    }
}
