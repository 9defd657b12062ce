use alloc::format;
use alloc::vec::Vec;

use log::{debug, info, warn};

use crate::error::{BetError, EmptyShoeError, TerminalError};
use crate::participant::Role;
use crate::shoe::Shoe;
use crate::terminal::{Terminal, Tone};

use super::{RoundPhase, Table, seat, seat_mut};

impl Table {
    /// Places the opening bet on a player's first hand and debits it.
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be found, the amount is outside
    /// the table limits, or the player lacks funds.
    pub fn place_bet(&mut self, number: u8, amount: usize) -> Result<(), BetError> {
        let (min_bet, max_bet) = (self.options.min_bet, self.options.max_bet);
        let player = seat_mut(&mut self.players, number).ok_or(BetError::PlayerNotFound)?;

        if amount < min_bet {
            return Err(BetError::BelowMinimum(min_bet));
        }
        if amount > max_bet {
            return Err(BetError::AboveMaximum(max_bet));
        }
        if !player.debit(amount) {
            return Err(BetError::InsufficientFunds(player.funds()));
        }

        player.first_hand_mut().set_bet(amount);
        debug!("player {number} bet {amount}");
        Ok(())
    }

    /// Prompts every active player until they place a valid bet.
    ///
    /// Players who cannot place any valid bet sit the round out.
    pub(super) fn collect_bets<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
    ) -> Result<(), TerminalError> {
        self.set_phase(RoundPhase::Betting);
        let (min_bet, max_bet) = (self.options.min_bet, self.options.max_bet);
        let mut sitting_out = Vec::new();

        for number in self.active.clone() {
            let label = Role::Player(number);
            let can_bet = min_bet <= max_bet
                && seat(&self.players, number).is_some_and(|p| p.funds() >= min_bet);
            if !can_bet {
                let message = format!(
                    "{label} can't place a bet between {min_bet} and {max_bet} and sits out this round"
                );
                term.notify(&message, Tone::Warning);
                sitting_out.push(number);
                continue;
            }

            let question =
                format!("How much would you like to bet {label}? (min {min_bet}, max {max_bet})");
            loop {
                let answer = term.prompt_integer(&question)?;
                let placed = usize::try_from(answer)
                    .map_err(|_| BetError::BelowMinimum(min_bet))
                    .and_then(|amount| self.place_bet(number, amount));

                match placed {
                    Ok(()) => break,
                    Err(err @ BetError::PlayerNotFound) => {
                        warn!("skipping bet for player {number}: {err}");
                        break;
                    }
                    Err(err) => term.notify(&format!("Invalid bet: {err}"), Tone::Warning),
                }
            }
        }

        if !sitting_out.is_empty() {
            info!("players {sitting_out:?} sit out this round");
            self.active.retain(|number| !sitting_out.contains(number));
        }
        Ok(())
    }

    /// Replaces the shoe with a fresh one when it is running low.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub(super) fn reshuffle_if_needed<T: Terminal + ?Sized>(&mut self, term: &mut T) -> bool {
        let threshold = self.options.reshuffle_threshold;
        if self.shoe.size() >= threshold {
            return false;
        }

        info!("reshuffling with {} cards left in the shoe", self.shoe.size());
        term.notify(
            &format!("Less than {threshold} cards left - reshuffling!"),
            Tone::Plain,
        );
        self.shoe = Shoe::new(self.options.decks, &mut self.rng);
        true
    }

    /// Deals two cards to every active player and the dealer, one at a time
    /// around the table.
    pub(super) fn initial_deal(&mut self) -> Result<(), EmptyShoeError> {
        self.set_phase(RoundPhase::Dealing);

        for _ in 0..2 {
            for &number in &self.active {
                if let Some(player) = seat_mut(&mut self.players, number) {
                    player.first_hand_mut().add_card(self.shoe.draw()?);
                }
            }
            self.dealer.first_hand_mut().add_card(self.shoe.draw()?);
        }

        debug!("dealt opening hands, {} cards left", self.shoe.size());
        Ok(())
    }

    /// Shows every opening hand; the dealer shows only the first card.
    pub(super) fn reveal_hands<T: Terminal + ?Sized>(&mut self, term: &mut T) {
        for &number in &self.active {
            if let Some(player) = seat_mut(&mut self.players, number) {
                let line = player.render_hand(0);
                term.notify(&line, Tone::Plain);
            }
        }
        let line = self.dealer.render_hand(0);
        term.notify(&line, Tone::Plain);
    }
}
