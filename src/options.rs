//! Table configuration options.

/// Rounding mode for payouts that come out fractional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Nothing cross-checks the fields. A player can only bet when
/// `min_bet <= max_bet` and their funds cover `min_bet`; anyone else sits the
/// round out, and a player short of `min_bet` leaves after it.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_min_bet(5)
///     .with_max_bet(1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in a fresh shoe.
    pub decks: u8,
    /// The shoe is replaced before a deal when fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// Smallest accepted bet.
    pub min_bet: usize,
    /// Largest accepted bet.
    pub max_bet: usize,
    /// Funds every new player starts with.
    pub starting_funds: usize,
    /// Most players that can be seated from the setup prompt.
    pub max_players: u8,
    /// Rounding mode for natural blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 3,
            reshuffle_threshold: 30,
            min_bet: 2,
            max_bet: 500,
            starting_funds: 1000,
            max_players: 7,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_threshold(52);
    /// assert_eq!(options.reshuffle_threshold, 52);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum bet.
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: usize) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the starting funds for new players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_funds(250);
    /// assert_eq!(options.starting_funds, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_funds(mut self, funds: usize) -> Self {
        self.starting_funds = funds;
        self
    }

    /// Sets the most players the setup prompt accepts.
    #[must_use]
    pub const fn with_max_players(mut self, max_players: u8) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the rounding mode for natural blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
