use alloc::format;

use log::debug;

use crate::error::EmptyShoeError;
use crate::hand::BLACKJACK;
use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::terminal::{Terminal, Tone};

use super::{RoundPhase, Table, seat_mut};

/// The dealer stands on this total or more, soft totals included.
pub const DEALER_STANDS: u8 = 17;

impl Table {
    /// Dealer draws until reaching 17 or more, then shows the final hand.
    pub(super) fn dealer_play<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
    ) -> Result<(), EmptyShoeError> {
        self.set_phase(RoundPhase::DealerTurn);

        while self.dealer.first_hand().value() < DEALER_STANDS {
            let card = self.shoe.draw()?;
            debug!("dealer draws {card}");
            self.dealer.first_hand_mut().add_card(card);
        }

        let line = self.dealer.render_hand(0);
        term.notify(&line, Tone::Plain);
        Ok(())
    }

    /// Settles every hand still in play against the dealer and pays out.
    pub(super) fn resolve_hands<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
        result: &mut RoundResult,
    ) {
        self.set_phase(RoundPhase::RoundOver);
        let rounding = self.options.rounding_blackjack;
        let dealer_value = self.dealer.first_hand().value();
        result.dealer_value = dealer_value;
        result.dealer_bust = dealer_value > BLACKJACK;

        for &number in &self.active {
            let Some(player) = seat_mut(&mut self.players, number) else {
                continue;
            };

            for hand_index in 0..player.hands().len() {
                let Some((bet, value)) = player.hand(hand_index).map(|h| (h.bet(), h.value()))
                else {
                    continue;
                };

                let outcome = HandOutcome::settle(value, dealer_value);
                let (message, tone) = match outcome {
                    HandOutcome::Lose if value > BLACKJACK => {
                        (format!("{player} lost! ({value})"), Tone::Loss)
                    }
                    HandOutcome::Win if dealer_value > BLACKJACK => (
                        format!("{player} ({value}) wins against a bust dealer! ({dealer_value})"),
                        Tone::Win,
                    ),
                    HandOutcome::Win | HandOutcome::Blackjack => (
                        format!("{player} ({value}) wins against the dealer ({dealer_value})"),
                        Tone::Win,
                    ),
                    HandOutcome::Push => (
                        format!("{player} ({value}) has drawn with the dealer! ({dealer_value})"),
                        Tone::Push,
                    ),
                    HandOutcome::Lose => (
                        format!("Dealer ({dealer_value}) has won against {player} ({value})!"),
                        Tone::Loss,
                    ),
                };
                term.notify(&message, tone);

                let payout = outcome
                    .payout()
                    .map_or(0, |payout| player.update_winnings(payout, bet, rounding));
                if let Some(hand) = player.hand_mut(hand_index) {
                    hand.set_bet(0);
                }
                debug!("player {number} hand {hand_index}: {outcome:?}, payout {payout}");

                result.hands.push(HandResult {
                    player: number,
                    hand_index,
                    outcome,
                    bet,
                    payout,
                    player_value: value,
                    dealer_value,
                });
            }
        }
    }
}
