//! A terminal blackjack table with optional `no_std` support.
//!
//! The crate provides a [`Table`] that runs repeated rounds between one or
//! more human players and an automated dealer: bet collection, the initial
//! deal, insurance, naturals, split and double-down offers, the hit/stand
//! loop, dealer play, and payouts. Every human decision goes through the
//! [`Terminal`] trait, so the engine itself never touches a console.
//!
//! # Example
//!
//! ```
//! use bjtable::{Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! let player = table.join()?;
//! assert_eq!(table.player(player).map(|p| p.funds()), Some(1000));
//! # Ok::<(), bjtable::JoinError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod shoe;
pub mod terminal;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Suit};
#[cfg(feature = "std")]
pub use console::ConsoleTerminal;
pub use error::{
    BetError, EmptyShoeError, InsuranceError, JoinError, RoundError, TerminalError,
};
pub use game::{RoundPhase, Table};
pub use hand::{BLACKJACK, Hand};
pub use options::{RoundingMode, TableOptions};
pub use participant::{Participant, Payout, Reveal, Role};
pub use result::{Departure, HandOutcome, HandResult, InsuranceResult, RoundResult};
pub use shoe::Shoe;
pub use terminal::{Terminal, Tone, parse_lenient_integer};
