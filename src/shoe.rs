//! The multi-deck shoe cards are drawn from.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Face, Suit};
use crate::error::EmptyShoeError;

/// A shuffled stack of one or more decks.
///
/// Cards are drawn from the top; the shoe only shrinks until it is replaced by
/// a fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// Remaining cards, top of the shoe last.
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds `decks` full decks and shuffles them uniformly at random.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::Shoe;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let shoe = Shoe::new(3, &mut rng);
    /// assert_eq!(shoe.size(), 156);
    /// ```
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for face in Face::ALL {
                    cards.push(Card::new(suit, face));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds an unshuffled shoe whose draws come out in slice order.
    #[must_use]
    pub fn from_cards(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop().ok_or(EmptyShoeError)
    }

    /// Returns the remaining cards, top of the shoe last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
