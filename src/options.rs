//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoe21::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_rounds(5)
///     .with_starting_chips(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Number of standard decks in a freshly shuffled shoe.
    pub decks: u8,
    /// Number of hands played before the game ends.
    pub rounds: u32,
    /// The player's chip balance at the start of the game.
    pub starting_chips: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 3,
            rounds: 10,
            starting_chips: 200,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::TableOptions;
    ///
    /// let options = TableOptions::default().with_rounds(3);
    /// assert_eq!(options.rounds, 3);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the starting chip balance.
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }
}
