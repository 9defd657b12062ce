//! Hands of cards and their point values.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The best possible hand value.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.face.points());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// Cards held against one bet.
///
/// The value is derived from the cards every time it is read, so it can never
/// go stale after a hit or a split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
    /// Stake riding on this hand.
    bet: usize,
    /// Insurance side bet (0 when none was placed).
    insurance_bet: usize,
}

impl Hand {
    /// Creates a new empty hand with no bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            bet: 0,
            insurance_bet: 0,
        }
    }

    /// Creates a hand holding `cards` with the given bet.
    #[must_use]
    pub fn with_cards(cards: &[Card], bet: usize) -> Self {
        Self {
            cards: cards.to_vec(),
            bet,
            insurance_bet: 0,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt to the hand, if any.
    #[must_use]
    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
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

    /// Calculates the value of the hand.
    ///
    /// Aces start at 11; while the total is over 21, each such ace drops to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Card, Face, Hand, Suit};
    ///
    /// let hand = Hand::with_cards(
    ///     &[
    ///         Card::new(Suit::Hearts, Face::Ace),
    ///         Card::new(Suit::Clubs, Face::Ace),
    ///         Card::new(Suit::Spades, Face::Nine),
    ///     ],
    ///     0,
    /// );
    /// assert_eq!(hand.value(), 21);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is a natural: exactly two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is exactly two identical cards.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first == second)
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Sets the bet amount for this hand.
    pub const fn set_bet(&mut self, bet: usize) {
        self.bet = bet;
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
    }

    /// Returns the insurance bet (0 if none was placed).
    #[must_use]
    pub const fn insurance_bet(&self) -> usize {
        self.insurance_bet
    }

    /// Sets the insurance bet.
    pub const fn set_insurance_bet(&mut self, amount: usize) {
        self.insurance_bet = amount;
    }

    /// Moves the second card of a two-card hand into a new hand with the same bet.
    ///
    /// Returns `None` and leaves the hand untouched unless it holds exactly two cards.
    pub fn split_off(&mut self) -> Option<Self> {
        if self.cards.len() != 2 {
            return None;
        }
        let card = self.cards.pop()?;
        Some(Self {
            cards: alloc::vec![card],
            bet: self.bet,
            insurance_bet: 0,
        })
    }
}
