use alloc::format;
use core::ops::RangeInclusive;

use log::debug;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::{BLACKJACK, Hand};
use crate::terminal::{Terminal, Tone};

use super::{RoundPhase, Table, ask_yes_no, seat, seat_mut};

/// Opening totals a player may double down on.
const DOUBLE_DOWN_TOTALS: RangeInclusive<u8> = 9..=11;

impl Table {
    /// Runs every remaining player's turn: split offer, double-down offer,
    /// then hit or stand on each hand.
    pub(super) fn play_turns<T: Terminal + ?Sized>(
        &mut self,
        term: &mut T,
    ) -> Result<(), RoundError> {
        self.set_phase(RoundPhase::PlayerTurn);

        for number in self.active.clone() {
            self.offer_split(number, term)?;
            self.offer_double_down(number, term)?;

            let restricted = seat(&self.players, number).is_some_and(|p| p.single_card_move());
            if !restricted {
                self.hit_or_stand(number, term)?;
            }
        }

        Ok(())
    }

    /// Offers a split when the opening cards are identical and the player can
    /// cover a second stake. Split aces get one card each and nothing more.
    fn offer_split<T: Terminal + ?Sized>(
        &mut self,
        number: u8,
        term: &mut T,
    ) -> Result<(), RoundError> {
        let Some(player) = seat_mut(&mut self.players, number) else {
            return Ok(());
        };
        let bet = player.first_hand().bet();
        if !player.first_hand().is_pair() || player.funds() < bet {
            return Ok(());
        }

        let question = format!("{player} would you like to split your pair? Yes (y) or No (n)");
        if !ask_yes_no(term, &question)? {
            term.notify(&format!("{player} is not splitting the pair"), Tone::Plain);
            return Ok(());
        }
        if !player.debit(bet) || !player.split() {
            return Ok(());
        }
        term.notify(&format!("{player} splits the pair!"), Tone::Highlight);
        debug!("player {number} split, {} left in funds", player.funds());

        if player.first_hand().first_card().is_some_and(Card::is_ace) {
            for index in 0..2 {
                let card = self.shoe.draw()?;
                if let Some(hand) = player.hand_mut(index) {
                    hand.add_card(card);
                }
            }
            player.set_single_card_move(true);

            for index in 0..2 {
                let line = player.render_hand(index);
                term.notify(&line, Tone::Plain);
            }
        }

        Ok(())
    }

    /// Offers a double down on an unsplit opening total of 9, 10, or 11.
    fn offer_double_down<T: Terminal + ?Sized>(
        &mut self,
        number: u8,
        term: &mut T,
    ) -> Result<(), RoundError> {
        let Some(player) = seat_mut(&mut self.players, number) else {
            return Ok(());
        };
        let bet = player.first_hand().bet();
        let eligible = DOUBLE_DOWN_TOTALS.contains(&player.first_hand().value())
            && player.hands().len() == 1
            && player.funds() >= bet;
        if !eligible {
            return Ok(());
        }

        let question =
            format!("{player} you are able to double down, would you like to? Yes (y) or No (n)");
        if !ask_yes_no(term, &question)? {
            term.notify(&format!("{player} is not doubling down"), Tone::Plain);
            return Ok(());
        }
        if !player.debit(bet) {
            return Ok(());
        }

        term.notify(&format!("{player} is doubling down!"), Tone::Highlight);
        let hand = player.first_hand_mut();
        hand.double_bet();
        // The double-down card stays face down until the hands are settled.
        hand.add_card(self.shoe.draw()?);
        player.set_single_card_move(true);
        debug!("player {number} doubled down to {}", player.first_hand().bet());

        Ok(())
    }

    /// Prompts hit or stand on each of the player's hands until it stands or busts.
    fn hit_or_stand<T: Terminal + ?Sized>(
        &mut self,
        number: u8,
        term: &mut T,
    ) -> Result<(), RoundError> {
        let Some(player) = seat_mut(&mut self.players, number) else {
            return Ok(());
        };
        let split = player.hands().len() > 1;

        for index in 0..player.hands().len() {
            loop {
                let value = player.hand(index).map_or(0, Hand::value);
                if value > BLACKJACK {
                    break;
                }

                term.notify(
                    &format!("Your turn {player}, your current hand value is: {value}"),
                    Tone::Plain,
                );
                if split {
                    term.notify(
                        &format!("{player} this is split hand number: {}", index + 1),
                        Tone::Plain,
                    );
                }

                let choice = term.prompt_choice("Please pick: (h) Hit or (s) Stand")?;
                match choice.to_ascii_lowercase().as_str() {
                    "h" | "hit" => {
                        term.notify(&format!("{player} hits!"), Tone::Plain);
                        let card = self.shoe.draw()?;
                        if let Some(hand) = player.hand_mut(index) {
                            hand.add_card(card);
                        }
                        let line = player.render_hand(index);
                        term.notify(&line, Tone::Plain);
                    }
                    "s" | "stand" => {
                        term.notify(&format!("{player} stands!"), Tone::Highlight);
                        break;
                    }
                    _ => term.notify(
                        "Not a valid move! Please choose (h) Hit or (s) Stand",
                        Tone::Warning,
                    ),
                }
            }

            if let Some(hand) = player.hand(index).filter(|hand| hand.is_bust()) {
                term.notify(&format!("{player} lost! ({})", hand.value()), Tone::Loss);
            }
        }

        Ok(())
    }
}
