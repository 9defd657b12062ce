//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::BLACKJACK;
use crate::participant::Payout;

/// Result of a single hand once the round is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (player busts, dealer has the higher value, or dealer has a natural).
    Lose,
    /// Push (tie), stake returned.
    Push,
    /// Player's natural blackjack beats a dealer without one.
    Blackjack,
}

impl HandOutcome {
    /// Settles a finished hand against the dealer's final value.
    ///
    /// A busted hand always loses; otherwise a busted dealer always loses and
    /// the higher value wins.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::HandOutcome;
    ///
    /// assert_eq!(HandOutcome::settle(19, 18), HandOutcome::Win);
    /// assert_eq!(HandOutcome::settle(18, 18), HandOutcome::Push);
    /// assert_eq!(HandOutcome::settle(17, 22), HandOutcome::Win);
    /// assert_eq!(HandOutcome::settle(22, 22), HandOutcome::Lose);
    /// ```
    #[must_use]
    pub const fn settle(player_value: u8, dealer_value: u8) -> Self {
        if player_value > BLACKJACK {
            Self::Lose
        } else if dealer_value > BLACKJACK || player_value > dealer_value {
            Self::Win
        } else if player_value == dealer_value {
            Self::Push
        } else {
            Self::Lose
        }
    }

    /// Returns the payout owed for this outcome, `None` for a loss.
    #[must_use]
    pub const fn payout(self) -> Option<Payout> {
        match self {
            Self::Win => Some(Payout::Win),
            Self::Push => Some(Payout::Push),
            Self::Blackjack => Some(Payout::Natural),
            Self::Lose => None,
        }
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The player's seat number.
    pub player: u8,
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet riding on the hand.
    pub bet: usize,
    /// Amount credited back to the player's funds (stake included).
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Settlement of one player's insurance bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuranceResult {
    /// The player's seat number.
    pub player: u8,
    /// The insurance stake.
    pub bet: usize,
    /// Amount credited back (0 when the dealer had no natural).
    pub payout: usize,
}

/// Why a player left the roster after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Departure {
    /// Funds fell below the minimum bet.
    Broke,
    /// The player chose not to play another round.
    Left,
}

/// Result of an entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for every settled hand, in settlement order.
    pub hands: Vec<HandResult>,
    /// Insurance settlements, one per player who took insurance.
    pub insurance: Vec<InsuranceResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural blackjack.
    pub dealer_blackjack: bool,
    /// Whether the shoe was replaced before the deal.
    pub reshuffled: bool,
    /// Players who left the roster at the end of the round.
    pub departures: Vec<(u8, Departure)>,
}

impl RoundResult {
    /// Returns the results for one player's hands.
    pub fn hands_for(&self, player: u8) -> impl Iterator<Item = &HandResult> {
        self.hands.iter().filter(move |hand| hand.player == player)
    }
}
