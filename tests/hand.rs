//! Card, shoe, hand, and participant tests.

use bjtable::{
    Card, DECK_SIZE, EmptyShoeError, Face, Hand, Participant, Payout, Reveal, Role, RoundingMode,
    Shoe, Suit, TableOptions, parse_lenient_integer,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, face: Face) -> Card {
    Card::new(suit, face)
}

fn hand(faces: &[Face]) -> Hand {
    let cards: Vec<Card> = faces.iter().map(|&face| card(Suit::Spades, face)).collect();
    Hand::with_cards(&cards, 0)
}

#[test]
fn face_points() {
    assert_eq!(Face::Two.points(), 2);
    assert_eq!(Face::Ten.points(), 10);
    assert_eq!(Face::Jack.points(), 10);
    assert_eq!(Face::Queen.points(), 10);
    assert_eq!(Face::King.points(), 10);
    assert_eq!(Face::Ace.points(), 11);
    assert_eq!(Face::number(7), Some(Face::Seven));
    assert_eq!(Face::number(1), None);
    assert_eq!(Face::number(11), None);
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Hearts, Face::Ten).to_string(), "10 of HEARTS");
    assert_eq!(card(Suit::Spades, Face::Ace).to_string(), "ACE of SPADES");
    assert_eq!(card(Suit::Clubs, Face::Queen).to_string(), "QUEEN of CLUBS");
    assert_eq!(card(Suit::Diamonds, Face::Two).to_string(), "2 of DIAMONDS");
}

#[test]
fn soft_aces_count_down_only_as_needed() {
    assert_eq!(hand(&[Face::Ace, Face::Nine]).value(), 20);
    assert_eq!(hand(&[Face::Ace, Face::Ace]).value(), 12);
    assert_eq!(hand(&[Face::Ace, Face::Ace, Face::Nine]).value(), 21);
    assert_eq!(hand(&[Face::Ten, Face::Nine, Face::Ace]).value(), 20);
    assert_eq!(hand(&[Face::Ace, Face::Six, Face::Ten]).value(), 17);
    assert_eq!(hand(&[Face::King, Face::Queen, Face::Five]).value(), 25);
    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(hand(&[Face::Ace, Face::King]).is_blackjack());
    assert!(hand(&[Face::Ten, Face::Ace]).is_blackjack());
    assert!(!hand(&[Face::Seven, Face::Seven, Face::Seven]).is_blackjack());
    assert!(!hand(&[Face::Ace, Face::Five, Face::Five]).is_blackjack());
}

#[test]
fn bust_over_21() {
    assert!(hand(&[Face::King, Face::Queen, Face::Two]).is_bust());
    assert!(!hand(&[Face::King, Face::Ace]).is_bust());
}

#[test]
fn pair_requires_identical_cards() {
    let same = Hand::with_cards(
        &[card(Suit::Hearts, Face::Eight), card(Suit::Hearts, Face::Eight)],
        10,
    );
    let mixed_suits = Hand::with_cards(
        &[card(Suit::Hearts, Face::Eight), card(Suit::Clubs, Face::Eight)],
        10,
    );
    let three = Hand::with_cards(
        &[
            card(Suit::Hearts, Face::Eight),
            card(Suit::Hearts, Face::Eight),
            card(Suit::Hearts, Face::Eight),
        ],
        10,
    );

    assert!(same.is_pair());
    assert!(!mixed_suits.is_pair());
    assert!(!three.is_pair());
}

#[test]
fn split_off_moves_second_card_and_copies_bet() {
    let mut first = Hand::with_cards(
        &[card(Suit::Hearts, Face::Ace), card(Suit::Hearts, Face::Ace)],
        10,
    );

    let second = first.split_off().unwrap();

    assert_eq!(first.cards(), &[card(Suit::Hearts, Face::Ace)]);
    assert_eq!(second.cards(), &[card(Suit::Hearts, Face::Ace)]);
    assert_eq!(second.bet(), 10);
    assert_eq!(second.insurance_bet(), 0);
    assert!(first.split_off().is_none());
}

#[test]
fn double_bet() {
    let mut hand = Hand::new();
    hand.set_bet(15);
    hand.double_bet();
    assert_eq!(hand.bet(), 30);
}

#[test]
fn shoe_holds_every_card_once_per_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let shoe = Shoe::new(3, &mut rng);

    assert_eq!(shoe.size(), 3 * DECK_SIZE);
    for suit in Suit::ALL {
        for face in Face::ALL {
            let copies = shoe
                .cards()
                .iter()
                .filter(|&&c| c == card(suit, face))
                .count();
            assert_eq!(copies, 3, "{face} of {suit}");
        }
    }
}

#[test]
fn shoe_shuffle_depends_on_seed() {
    let first = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(1));
    let again = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(1));
    let other = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(2));

    assert_eq!(first, again);
    assert_ne!(first.cards(), other.cards());
}

#[test]
fn drawing_empties_the_shoe() {
    let mut shoe = Shoe::new(3, &mut ChaCha8Rng::seed_from_u64(3));

    for drawn in 1..=156 {
        shoe.draw().unwrap();
        assert_eq!(shoe.size(), 156 - drawn);
    }

    assert!(shoe.is_empty());
    assert_eq!(shoe.draw(), Err(EmptyShoeError));
}

#[test]
fn stacked_shoe_draws_in_order() {
    let mut shoe = Shoe::from_cards(&[
        card(Suit::Hearts, Face::Two),
        card(Suit::Clubs, Face::King),
    ]);

    assert_eq!(shoe.draw(), Ok(card(Suit::Hearts, Face::Two)));
    assert_eq!(shoe.draw(), Ok(card(Suit::Clubs, Face::King)));
    assert_eq!(shoe.draw(), Err(EmptyShoeError));
}

#[test]
fn default_options() {
    let options = TableOptions::default();

    assert_eq!(options.decks, 3);
    assert_eq!(options.reshuffle_threshold, 30);
    assert_eq!(options.min_bet, 2);
    assert_eq!(options.max_bet, 500);
    assert_eq!(options.starting_funds, 1000);
    assert_eq!(options.max_players, 7);
    assert_eq!(options.rounding_blackjack, RoundingMode::Down);
}

#[test]
fn winnings_include_the_stake() {
    let mut player = Participant::player(1, 990);

    assert_eq!(player.update_winnings(Payout::Win, 10, RoundingMode::Down), 20);
    assert_eq!(player.update_winnings(Payout::Push, 10, RoundingMode::Down), 10);
    assert_eq!(player.update_winnings(Payout::Insurance, 5, RoundingMode::Down), 15);
    assert_eq!(player.funds(), 1035);
}

#[test]
fn natural_payout_rounding() {
    let mut player = Participant::player(1, 0);

    assert_eq!(player.update_winnings(Payout::Natural, 10, RoundingMode::Down), 25);
    assert_eq!(player.update_winnings(Payout::Natural, 5, RoundingMode::Down), 12);
    assert_eq!(player.update_winnings(Payout::Natural, 5, RoundingMode::Up), 13);
    assert_eq!(player.update_winnings(Payout::Natural, 5, RoundingMode::Nearest), 13);
    assert_eq!(player.funds(), 63);
}

#[test]
fn debit_refuses_overdraw() {
    let mut player = Participant::player(2, 20);

    assert!(player.debit(15));
    assert!(!player.debit(6));
    assert_eq!(player.funds(), 5);
}

#[test]
fn participant_labels() {
    let player = Participant::player(3, 0);
    let dealer = Participant::dealer();

    assert_eq!(player.to_string(), "Player 3");
    assert_eq!(player.number(), Some(3));
    assert_eq!(dealer.to_string(), "Dealer");
    assert_eq!(dealer.role(), Role::Dealer);
    assert_eq!(dealer.number(), None);
}

#[test]
fn dealer_shows_first_card_once_per_round() {
    let mut dealer = Participant::dealer();
    dealer.first_hand_mut().add_card(card(Suit::Clubs, Face::Ace));
    dealer.first_hand_mut().add_card(card(Suit::Hearts, Face::Six));

    assert_eq!(dealer.render_hand(0), "Dealer's visible card is: ACE of CLUBS");
    assert_eq!(
        dealer.render_hand(0),
        "Dealer's cards: ACE of CLUBS, 6 of HEARTS (value: 17)"
    );

    dealer.reset();
    assert_eq!(
        dealer.reveal(),
        Reveal::FirstCardOnly {
            first_printing: true
        }
    );
    assert!(dealer.first_hand().is_empty());
}

#[test]
fn player_always_shows_full_hand() {
    let mut player = Participant::player(1, 100);
    player.first_hand_mut().add_card(card(Suit::Hearts, Face::Ten));
    player.first_hand_mut().add_card(card(Suit::Spades, Face::Seven));

    assert_eq!(
        player.render_hand(0),
        "Player 1's cards: 10 of HEARTS, 7 of SPADES (value: 17)"
    );
}

#[test]
fn split_inserts_second_hand() {
    let mut player = Participant::player(1, 100);
    player.first_hand_mut().add_card(card(Suit::Hearts, Face::Nine));
    player.first_hand_mut().add_card(card(Suit::Hearts, Face::Nine));
    player.first_hand_mut().set_bet(10);

    assert!(player.split());
    assert_eq!(player.hands().len(), 2);
    assert_eq!(player.hand(1).map(Hand::bet), Some(10));

    player.set_single_card_move(true);
    player.reset();
    assert_eq!(player.hands().len(), 1);
    assert!(!player.single_card_move());
}

#[test]
fn lenient_integers() {
    assert_eq!(parse_lenient_integer("42"), 42);
    assert_eq!(parse_lenient_integer("  12abc"), 12);
    assert_eq!(parse_lenient_integer("+3"), 3);
    assert_eq!(parse_lenient_integer(""), 0);
    assert_eq!(parse_lenient_integer("-"), 0);
    assert_eq!(parse_lenient_integer("99999999999999999999999"), i64::MAX);
}

#[test]
fn refund_covers_split_hands_and_insurance() {
    let mut player = Participant::player(1, 100);
    // Two stakes of 10 after the split, plus 5 of insurance.
    assert!(player.debit(25));
    player.first_hand_mut().add_card(card(Suit::Hearts, Face::Nine));
    player.first_hand_mut().add_card(card(Suit::Hearts, Face::Nine));
    player.first_hand_mut().set_bet(10);
    player.first_hand_mut().set_insurance_bet(5);
    assert!(player.split());
    assert_eq!(player.refund_stakes(), 25);
    assert_eq!(player.funds(), 100);
    assert_eq!(player.hands().len(), 1);
    assert!(player.first_hand().is_empty());
}
