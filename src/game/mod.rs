//! Round engine and table state.

extern crate alloc;

use alloc::format;
use alloc::vec::Vec;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{JoinError, RoundError, TerminalError};
use crate::options::TableOptions;
use crate::participant::Participant;
use crate::result::{Departure, RoundResult};
use crate::shoe::Shoe;
use crate::terminal::{Terminal, Tone};

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use dealer::DEALER_STANDS;
pub use state::RoundPhase;

/// A blackjack table: the shoe, the dealer, and the players.
///
/// The table keeps two views of its players. The roster (`players`) is
/// everyone still sitting at the table; it only shrinks between rounds, when
/// players leave or run out of funds. The active list is a per-round working
/// copy of the roster's seat numbers that drops players whose hands were
/// settled early by a natural.
pub struct Table {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Table options.
    options: TableOptions,
    /// Current round phase.
    phase: RoundPhase,
    /// Seat number given to the next player who joins, `None` once all are used.
    next_number: Option<u8>,
    /// Persistent roster, in seating order.
    players: Vec<Participant>,
    /// Seat numbers still in play this round.
    active: Vec<u8>,
    /// The dealer.
    dealer: Participant,
    /// Random number generator for shuffles.
    rng: ChaCha8Rng,
}

fn seat(players: &[Participant], number: u8) -> Option<&Participant> {
    players.iter().find(|player| player.number() == Some(number))
}

fn seat_mut(players: &mut [Participant], number: u8) -> Option<&mut Participant> {
    players
        .iter_mut()
        .find(|player| player.number() == Some(number))
}

/// Asks a yes/no question until the answer is one or the other.
fn ask_yes_no<T: Terminal + ?Sized>(term: &mut T, question: &str) -> Result<bool, TerminalError> {
    loop {
        let answer = term.prompt_choice(question)?;
        match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => term.notify("Please answer yes (y) or no (n)", Tone::Warning),
        }
    }
}

impl Table {
    /// Creates a table with no players and a fresh shoe shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.cards_remaining(), 156);
    /// assert!(!table.has_players());
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(options.decks, &mut rng);

        Self {
            shoe,
            options,
            phase: RoundPhase::WaitingForPlayers,
            next_number: Some(1),
            players: Vec::new(),
            active: Vec::new(),
            dealer: Participant::dealer(),
            rng,
        }
    }

    /// Seats a new player with the starting funds.
    ///
    /// Returns the player's seat number. Seat numbers are never reused, even
    /// after a player leaves.
    ///
    /// # Errors
    ///
    /// Returns an error once every seat number up to 255 has been handed out.
    pub fn join(&mut self) -> Result<u8, JoinError> {
        let number = self.next_number.ok_or(JoinError::SeatsExhausted)?;
        self.next_number = number.checked_add(1);
        self.players
            .push(Participant::player(number, self.options.starting_funds));
        debug!("player {number} joined the table");
        Ok(number)
    }

    /// Asks how many players are playing and seats them.
    ///
    /// Returns the number of players seated.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot deliver an answer.
    pub fn seat_players<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
    ) -> Result<usize, TerminalError> {
        let max = self.options.max_players;
        loop {
            let answer = term.prompt_integer("How many players are playing?")?;
            match u8::try_from(answer) {
                Ok(count) if count <= max => {
                    let mut seated = 0;
                    for _ in 0..count {
                        if let Err(err) = self.join() {
                            warn!("stopped seating players: {err}");
                            break;
                        }
                        seated += 1;
                    }
                    info!("seated {seated} players");
                    return Ok(seated);
                }
                _ => term.notify(
                    &format!("Please enter a number of players between 0 and {max}"),
                    Tone::Warning,
                ),
            }
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the persistent roster, in seating order.
    #[must_use]
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Returns the player with the given seat number.
    #[must_use]
    pub fn player(&self, number: u8) -> Option<&Participant> {
        seat(&self.players, number)
    }

    /// Returns everyone at the table: the roster followed by the dealer.
    pub fn everyone(&self) -> impl Iterator<Item = &Participant> {
        self.players.iter().chain(core::iter::once(&self.dealer))
    }

    /// Returns the seat numbers still in play in the current round.
    #[must_use]
    pub fn active_players(&self) -> &[u8] {
        &self.active
    }

    /// Returns whether anyone is left on the roster.
    #[must_use]
    pub fn has_players(&self) -> bool {
        !self.players.is_empty()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.size()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Replaces the shoe, e.g. with a stacked one.
    pub fn replace_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        debug!("phase {:?} -> {phase:?}", self.phase);
        self.phase = phase;
    }

    /// Plays one full round, from bets to the continue-playing question.
    ///
    /// A round that fails part way is void: stakes still riding go back to
    /// the players and every hand is cleared, so the table is ready for
    /// another round.
    ///
    /// # Errors
    ///
    /// Returns an error if nobody is on the roster, the terminal cannot
    /// deliver an answer, or the shoe runs dry mid-round.
    pub fn play_round<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
    ) -> Result<RoundResult, RoundError> {
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        let played = self.play_phases(term);
        if let Err(err) = &played {
            self.abort_round(err);
        }
        played
    }

    fn play_phases<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
    ) -> Result<RoundResult, RoundError> {
        self.setup_round();
        info!("round started with {} players", self.active.len());

        self.collect_bets(term)?;
        let reshuffled = self.reshuffle_if_needed(term);
        self.initial_deal()?;
        self.reveal_hands(term);
        self.offer_insurance(term)?;

        let mut result = RoundResult {
            hands: Vec::new(),
            insurance: Vec::new(),
            dealer_value: 0,
            dealer_bust: false,
            dealer_blackjack: false,
            reshuffled,
            departures: Vec::new(),
        };

        result.dealer_blackjack = self.settle_naturals(term, &mut result);
        self.play_turns(term)?;
        self.dealer_play(term)?;
        self.resolve_hands(term, &mut result);
        self.report_funds(term);
        self.another_round(term, &mut result.departures)?;

        self.set_phase(RoundPhase::WaitingForPlayers);
        Ok(result)
    }

    /// Plays rounds until the roster is empty.
    ///
    /// Returns the number of rounds played.
    ///
    /// # Errors
    ///
    /// Returns the first error that aborts a round.
    pub fn run<T: Terminal + ?Sized>(&mut self, term: &mut T) -> Result<usize, RoundError> {
        let mut rounds = 0;
        while self.has_players() {
            self.play_round(term)?;
            rounds += 1;
        }
        info!("table closed after {rounds} rounds");
        Ok(rounds)
    }

    /// Shows every roster player's funds.
    fn report_funds<T: Terminal + ?Sized>(&self, term: &mut T) {
        for player in &self.players {
            term.notify(
                &format!("{player}'s funds is: {}", player.funds()),
                Tone::Plain,
            );
        }
    }

    /// Decides who stays for the next round and rebuilds the roster.
    ///
    /// Players short of the minimum bet are dropped; everyone else is asked.
    /// The roster is only rebuilt once every answer is in.
    fn another_round<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
        departures: &mut Vec<(u8, Departure)>,
    ) -> Result<(), TerminalError> {
        let min_bet = self.options.min_bet;
        let mut decisions = Vec::with_capacity(self.players.len());

        for player in &mut self.players {
            // The roster only ever holds players.
            let number = player.number().unwrap_or_default();
            let stays = if player.funds() < min_bet {
                term.notify(
                    &format!(
                        "{player} doesn't have sufficient funds so can't take part in the next round"
                    ),
                    Tone::Loss,
                );
                departures.push((number, Departure::Broke));
                false
            } else if ask_yes_no(
                term,
                &format!("{player} would you like to play another round? Yes (y) or No (n)"),
            )? {
                player.reset();
                true
            } else {
                departures.push((number, Departure::Left));
                false
            };
            decisions.push(stays);
        }

        for (number, departure) in departures.iter() {
            info!("player {number} left the table ({departure:?})");
        }

        let mut decisions = decisions.into_iter();
        self.players.retain(|_| decisions.next().unwrap_or(false));
        Ok(())
    }

    fn setup_round(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.active = self.players.iter().filter_map(Participant::number).collect();
        self.dealer.reset();
        debug!("hands reset, {} players in the round", self.active.len());
    }

    /// Refunds unsettled stakes and clears the hands after a failed round.
    fn abort_round(&mut self, err: &RoundError) {
        warn!("round aborted: {err}");
        for player in &mut self.players {
            let refunded = player.refund_stakes();
            if refunded > 0 {
                debug!("refunded {refunded} to {player}");
            }
        }
        self.active.clear();
        self.dealer.reset();
        self.set_phase(RoundPhase::WaitingForPlayers);
    }
}
