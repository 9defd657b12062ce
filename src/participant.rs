//! Players and the dealer.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::hand::Hand;
use crate::options::RoundingMode;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Who a participant is at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A human player, numbered from 1 in seating order.
    Player(u8),
    /// The house.
    Dealer,
}

/// How much of a hand is shown when it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Every card and the total are shown.
    FullHand,
    /// The first rendering of a round shows only the first card; later ones
    /// show the full hand.
    FirstCardOnly {
        /// Whether the next rendering is the first of the round.
        first_printing: bool,
    },
}

/// What a settled bet returns, as a multiple of the stake.
///
/// Stakes are debited when they are placed, so every factor includes the
/// stake itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payout {
    /// Stake plus even money.
    Win,
    /// Stake returned.
    Push,
    /// Stake plus 3:2 for a natural blackjack.
    Natural,
    /// Insurance stake plus 2:1.
    Insurance,
}

impl Payout {
    /// Returns the multiple of the stake credited back.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Win => 2.0,
            Self::Push => 1.0,
            Self::Natural => 2.5,
            Self::Insurance => 3.0,
        }
    }
}

/// A seat at the table: a player or the dealer.
///
/// A participant always holds at least one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    role: Role,
    reveal: Reveal,
    hands: Vec<Hand>,
    funds: usize,
    /// Restricted to exactly one further card this round (split aces or a double down).
    single_card_move: bool,
}

impl Participant {
    /// Creates a player with the given seat number and funds.
    #[must_use]
    pub fn player(number: u8, funds: usize) -> Self {
        Self {
            role: Role::Player(number),
            reveal: Reveal::FullHand,
            hands: alloc::vec![Hand::new()],
            funds,
            single_card_move: false,
        }
    }

    /// Creates the dealer, who hides everything but the first card on the
    /// first rendering of each round.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            role: Role::Dealer,
            reveal: Reveal::FirstCardOnly {
                first_printing: true,
            },
            hands: alloc::vec![Hand::new()],
            funds: 0,
            single_card_move: false,
        }
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the seat number for players, `None` for the dealer.
    #[must_use]
    pub const fn number(&self) -> Option<u8> {
        match self.role {
            Role::Player(number) => Some(number),
            Role::Dealer => None,
        }
    }

    /// Returns the rendering strategy and its current state.
    #[must_use]
    pub const fn reveal(&self) -> Reveal {
        self.reveal
    }

    /// Returns all hands, in play order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand at `index`.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }

    /// Returns the hand at `index` mutably.
    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    /// Returns the first hand, the one dealt at the start of the round.
    #[must_use]
    pub fn first_hand(&self) -> &Hand {
        &self.hands[0]
    }

    /// Returns the first hand mutably.
    pub fn first_hand_mut(&mut self) -> &mut Hand {
        &mut self.hands[0]
    }

    /// Returns the current funds.
    #[must_use]
    pub const fn funds(&self) -> usize {
        self.funds
    }

    /// Removes `amount` from the funds.
    ///
    /// Returns `false` and leaves the funds untouched if they do not cover it.
    pub const fn debit(&mut self, amount: usize) -> bool {
        if amount > self.funds {
            return false;
        }
        self.funds -= amount;
        true
    }

    /// Returns whether the participant may take only one more card this round.
    #[must_use]
    pub const fn single_card_move(&self) -> bool {
        self.single_card_move
    }

    /// Restricts the participant to a single further card this round.
    pub const fn set_single_card_move(&mut self, restricted: bool) {
        self.single_card_move = restricted;
    }

    /// Splits the first hand into two, the new hand carrying the same bet.
    ///
    /// Returns `false` if the first hand does not hold exactly two cards.
    pub fn split(&mut self) -> bool {
        match self.hands[0].split_off() {
            Some(hand) => {
                self.hands.insert(1, hand);
                true
            }
            None => false,
        }
    }

    /// Clears the hands back to a single fresh one for the next round.
    pub fn reset(&mut self) {
        self.hands.clear();
        self.hands.push(Hand::new());
        self.single_card_move = false;
        if let Reveal::FirstCardOnly { first_printing } = &mut self.reveal {
            *first_printing = true;
        }
    }

    /// Returns every stake still riding on the hands to the funds, then resets.
    ///
    /// Returns the amount refunded.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::Participant;
    ///
    /// let mut player = Participant::player(1, 1000);
    /// assert!(player.debit(10));
    /// player.first_hand_mut().set_bet(10);
    /// assert_eq!(player.refund_stakes(), 10);
    /// assert_eq!(player.funds(), 1000);
    /// assert_eq!(player.first_hand().bet(), 0);
    /// ```
    pub fn refund_stakes(&mut self) -> usize {
        let stakes = self
            .hands
            .iter()
            .map(|hand| hand.bet() + hand.insurance_bet())
            .sum();
        self.funds += stakes;
        self.reset();
        stakes
    }

    /// Credits `bet * payout.factor()` to the funds and returns the amount credited.
    ///
    /// Fractional results are rounded with `rounding`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Participant, Payout, RoundingMode};
    ///
    /// let mut player = Participant::player(1, 990);
    /// assert_eq!(player.update_winnings(Payout::Win, 10, RoundingMode::Down), 20);
    /// assert_eq!(player.funds(), 1010);
    /// ```
    pub fn update_winnings(&mut self, payout: Payout, bet: usize, rounding: RoundingMode) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = round_amount(bet as f64 * payout.factor(), rounding);
        self.funds += winnings;
        winnings
    }

    /// Renders the hand at `index` for display.
    ///
    /// The dealer's first rendering of a round names only the first card and
    /// keeps the total hidden; every other rendering lists all cards and the
    /// value.
    pub fn render_hand(&mut self, index: usize) -> String {
        let Some(hand) = self.hands.get(index) else {
            return format!("{self} has no hand {}", index + 1);
        };

        if let Reveal::FirstCardOnly { first_printing } = &mut self.reveal {
            if *first_printing {
                *first_printing = false;
                return match hand.first_card() {
                    Some(card) => format!("{}'s visible card is: {card}", self.role),
                    None => format!("{} has no cards", self.role),
                };
            }
        }

        let cards = hand
            .cards()
            .iter()
            .map(|card| format!("{card}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}'s cards: {cards} (value: {})", self.role, hand.value())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(number) => write!(f, "Player {number}"),
            Self::Dealer => f.write_str("Dealer"),
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.role, f)
    }
}
