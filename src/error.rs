//! Error types for table operations.

use thiserror::Error;

/// Drawing from a shoe that has no cards left.
///
/// The reshuffle threshold keeps this out of reach during normal play, so it
/// signals a broken invariant rather than a user mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot draw from an empty shoe")]
pub struct EmptyShoeError;

/// Errors that can occur when seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Every seat number has already been handed out.
    #[error("no seat numbers left at this table")]
    SeatsExhausted,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Bet is under the table minimum.
    #[error("bet is below the table minimum of {0}")]
    BelowMinimum(usize),
    /// Bet is over the table maximum.
    #[error("bet is above the table maximum of {0}")]
    AboveMaximum(usize),
    /// Insufficient funds.
    #[error("insufficient funds (funds: {0})")]
    InsufficientFunds(usize),
}

/// Errors that can occur when placing an insurance bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Insurance is only offered while the dealer shows an ace.
    #[error("insurance is not offered")]
    NotOffered,
    /// Insurance bet must be positive.
    #[error("insurance bet must be positive")]
    NotPositive,
    /// Insurance bet exceeds half the original bet.
    #[error("insurance bet can be at most {0}")]
    AboveLimit(usize),
    /// Insufficient funds for insurance.
    #[error("insufficient funds for insurance (funds: {0})")]
    InsufficientFunds(usize),
}

/// Errors reported by a [`Terminal`](crate::Terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TerminalError {
    /// The input stream ended before an answer was given.
    #[error("input stream closed")]
    Closed,
    /// Reading from the input stream failed.
    #[error("failed to read input")]
    Read,
}

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The shoe ran out of cards mid-round.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
    /// The terminal could not deliver an answer.
    #[error(transparent)]
    Terminal(#[from] TerminalError),
    /// A round was started with nobody on the roster.
    #[error("no players are seated at the table")]
    NoPlayers,
}
