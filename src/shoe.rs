//! The shoe of undealt cards.

use alloc::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered pile of undealt cards, drawn from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Creates an empty shoe.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates a shoe of `decks` standard decks in suit and rank order.
    #[must_use]
    pub fn ordered(decks: u8) -> Self {
        let mut cards = VecDeque::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push_back(Card::new(rank, suit));
                }
            }
        }

        Self { cards }
    }

    /// Creates a shoe of `decks` standard decks in random order.
    pub fn shuffled<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut shoe = Self::ordered(decks);
        shoe.cards.make_contiguous().shuffle(rng);
        shoe
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the undealt cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Shoe {
    /// Builds a shoe whose draw order is the iteration order.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn ordered_shoe_has_every_card_per_deck() {
        let shoe = Shoe::ordered(3);
        assert_eq!(shoe.len(), 3 * DECK_SIZE);

        let aces = shoe.iter().filter(|c| c.is_ace()).count();
        assert_eq!(aces, 12);
    }

    #[test]
    fn draws_come_from_the_front() {
        let mut shoe: Shoe = [
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::King, Suit::Hearts),
        ]
        .into_iter()
        .collect();

        assert_eq!(shoe.draw(), Some(Card::new(Rank::Two, Suit::Clubs)));
        assert_eq!(shoe.draw(), Some(Card::new(Rank::King, Suit::Hearts)));
        assert_eq!(shoe.draw(), None);
        assert!(shoe.is_empty());
    }

    #[test]
    fn same_seed_gives_same_order() {
        let a = Shoe::shuffled(3, &mut ChaCha8Rng::seed_from_u64(9));
        let b = Shoe::shuffled(3, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
        assert_ne!(a, Shoe::ordered(3));
    }
}
