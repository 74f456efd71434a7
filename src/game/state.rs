//! Turn phase of a hand.

/// Whose turn it is, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both sides are done and the hand can be settled.
    HandOver,
}

impl Phase {
    /// Returns the following phase. `HandOver` is terminal and maps to itself.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::PlayerTurn => Self::DealerTurn,
            Self::DealerTurn | Self::HandOver => Self::HandOver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Phase;

    #[test]
    fn phases_advance_in_order_and_stop() {
        assert!(Phase::PlayerTurn < Phase::DealerTurn);
        assert!(Phase::DealerTurn < Phase::HandOver);
        assert_eq!(Phase::PlayerTurn.next(), Phase::DealerTurn);
        assert_eq!(Phase::DealerTurn.next(), Phase::HandOver);
        assert_eq!(Phase::HandOver.next(), Phase::HandOver);
    }
}
