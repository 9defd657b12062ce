use alloc::format;
use alloc::vec::Vec;

use log::{debug, warn};

use crate::card::Card;
use crate::error::{InsuranceError, TerminalError};
use crate::participant::{Participant, Payout, Role};
use crate::result::{HandOutcome, HandResult, InsuranceResult, RoundResult};
use crate::terminal::{Terminal, Tone};

use super::{RoundPhase, Table, ask_yes_no, seat, seat_mut};

/// Largest insurance bet a player can place: half the original bet, capped by funds.
fn insurance_limit(player: &Participant) -> usize {
    (player.first_hand().bet() / 2).min(player.funds())
}

impl Table {
    /// Returns whether insurance is on offer: the dealer's visible card is an ace.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.dealer.first_hand().first_card().is_some_and(Card::is_ace)
    }

    /// Places an insurance bet of up to half the original bet and debits it.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer is not showing an ace, the player cannot
    /// be found, the amount is zero or over half the bet, or the player lacks
    /// funds.
    pub fn place_insurance(&mut self, number: u8, amount: usize) -> Result<(), InsuranceError> {
        if !self.is_insurance_offered() {
            return Err(InsuranceError::NotOffered);
        }

        let player =
            seat_mut(&mut self.players, number).ok_or(InsuranceError::PlayerNotFound)?;
        let half_bet = player.first_hand().bet() / 2;

        if amount == 0 {
            return Err(InsuranceError::NotPositive);
        }
        if amount > half_bet {
            return Err(InsuranceError::AboveLimit(half_bet));
        }
        if !player.debit(amount) {
            return Err(InsuranceError::InsufficientFunds(player.funds()));
        }

        player.first_hand_mut().set_insurance_bet(amount);
        debug!("player {number} took insurance for {amount}");
        Ok(())
    }

    /// Offers insurance to every active player while the dealer shows an ace.
    pub(super) fn offer_insurance<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
    ) -> Result<(), TerminalError> {
        if !self.is_insurance_offered() {
            return Ok(());
        }
        self.set_phase(RoundPhase::Insurance);

        for number in self.active.clone() {
            let Some(player) = seat(&self.players, number) else {
                continue;
            };
            let limit = insurance_limit(player);
            if limit == 0 {
                debug!("player {number} cannot afford insurance");
                continue;
            }

            let label = Role::Player(number);
            let wants_insurance = ask_yes_no(
                term,
                &format!("{label} would you like to place an insurance bet? Yes (y) or No (n)"),
            )?;
            if !wants_insurance {
                term.notify(
                    "You have decided not to place an insurance bet",
                    Tone::Plain,
                );
                continue;
            }

            let half_bet = player.first_hand().bet() / 2;
            let question =
                format!("{label} how much would you like your insurance bet to be - up to {half_bet}");
            loop {
                let answer = term.prompt_integer(&question)?;
                let placed = usize::try_from(answer)
                    .map_err(|_| InsuranceError::NotPositive)
                    .and_then(|amount| self.place_insurance(number, amount));

                match placed {
                    Ok(()) => break,
                    Err(err @ (InsuranceError::PlayerNotFound | InsuranceError::NotOffered)) => {
                        warn!("skipping insurance for player {number}: {err}");
                        break;
                    }
                    Err(err) => {
                        term.notify(&format!("Invalid insurance bet: {err}"), Tone::Warning);
                    }
                }
            }
        }

        Ok(())
    }

    /// Settles insurance and naturals, keeping only the players whose hands
    /// are still undecided in the round.
    ///
    /// Returns whether the dealer has a natural blackjack.
    pub(super) fn settle_naturals<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
        result: &mut RoundResult,
    ) -> bool {
        self.set_phase(RoundPhase::Naturals);
        let rounding = self.options.rounding_blackjack;
        let dealer_blackjack = self.dealer.first_hand().is_blackjack();
        let dealer_value = self.dealer.first_hand().value();

        if dealer_blackjack {
            term.notify("Dealer has a natural blackjack", Tone::Highlight);
            let line = self.dealer.render_hand(0);
            term.notify(&line, Tone::Plain);
        }

        let mut remaining = Vec::with_capacity(self.active.len());
        for number in core::mem::take(&mut self.active) {
            let Some(player) = seat_mut(&mut self.players, number) else {
                continue;
            };

            let insurance_bet = player.first_hand().insurance_bet();
            if insurance_bet > 0 {
                let payout = if dealer_blackjack {
                    term.notify(&format!("{player}, your insurance bet paid off!"), Tone::Win);
                    player.update_winnings(Payout::Insurance, insurance_bet, rounding)
                } else {
                    term.notify(
                        &format!("{player}, your insurance bet did not pay off"),
                        Tone::Loss,
                    );
                    0
                };
                result.insurance.push(InsuranceResult {
                    player: number,
                    bet: insurance_bet,
                    payout,
                });
                player.first_hand_mut().set_insurance_bet(0);
            }

            let bet = player.first_hand().bet();
            let player_value = player.first_hand().value();
            let settled = match (dealer_blackjack, player.first_hand().is_blackjack()) {
                (true, false) => {
                    term.notify(
                        &format!("{player} lost against a natural blackjack"),
                        Tone::Loss,
                    );
                    Some((HandOutcome::Lose, 0))
                }
                (true, true) => {
                    term.notify(
                        &format!("{player} also has a natural blackjack and draws"),
                        Tone::Push,
                    );
                    Some((
                        HandOutcome::Push,
                        player.update_winnings(Payout::Push, bet, rounding),
                    ))
                }
                (false, true) => {
                    term.notify(
                        &format!("{player} has a natural blackjack and wins!"),
                        Tone::Win,
                    );
                    Some((
                        HandOutcome::Blackjack,
                        player.update_winnings(Payout::Natural, bet, rounding),
                    ))
                }
                (false, false) => None,
            };

            match settled {
                Some((outcome, payout)) => {
                    debug!("player {number} settled on naturals: {outcome:?}, payout {payout}");
                    player.first_hand_mut().set_bet(0);
                    result.hands.push(HandResult {
                        player: number,
                        hand_index: 0,
                        outcome,
                        bet,
                        payout,
                        player_value,
                        dealer_value,
                    });
                }
                None => remaining.push(number),
            }
        }

        self.active = remaining;
        dealer_blackjack
    }
}
