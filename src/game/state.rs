//! Round phase types.

/// Where the table is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Between rounds.
    WaitingForPlayers,
    /// Collecting bets.
    Betting,
    /// Dealing the opening cards.
    Dealing,
    /// Offering insurance against a dealer ace.
    Insurance,
    /// Settling naturals and insurance.
    Naturals,
    /// Players are splitting, doubling, hitting, and standing.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are being settled and the roster updated.
    RoundOver,
}
