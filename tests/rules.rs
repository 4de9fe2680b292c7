//! Scoring, shoe, and strategy tests.

use std::collections::HashSet;

use bjtable::{Card, DECK_SIZE, Hand, Move, Rank, Shoe, Suit, advise, is_soft, score};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank) -> Card {
    Card::new(Suit::Hearts, rank)
}

fn hand(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(rank));
    }
    hand
}

#[test]
fn soft_ace_law() {
    assert_eq!(hand(&[Rank::Ace, Rank::Six]).score(), 17);
    assert!(hand(&[Rank::Ace, Rank::Six]).is_soft());

    let demoted = hand(&[Rank::Ace, Rank::Six, Rank::Six]);
    assert_eq!(demoted.score(), 13);
    assert!(!demoted.is_soft());

    let two_aces = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(two_aces.score(), 21);
    assert!(two_aces.is_soft());
}

#[test]
fn face_cards_count_ten_and_empty_scores_zero() {
    assert_eq!(score(&[]), 0);
    assert_eq!(hand(&[Rank::King, Rank::Queen, Rank::Ace]).score(), 21);
    assert_eq!(hand(&[Rank::Jack, Rank::Five]).score(), 15);
    assert!(hand(&[Rank::Jack, Rank::Queen, Rank::Two]).is_bust());
}

#[test]
fn face_down_cards_are_not_scored() {
    let cards = [card(Rank::Six), card(Rank::Ace).face_down()];
    assert_eq!(score(&cards), 6);
    assert!(!is_soft(&cards));

    let mut dealer = Hand::new();
    dealer.add_card(card(Rank::Six));
    dealer.add_card(card(Rank::Ace).face_down());
    assert!(dealer.reveal());
    assert!(!dealer.reveal());
    assert_eq!(dealer.score(), 17);
}

#[test]
fn scores_stay_bounded_for_three_card_hands() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            for c in Rank::ALL {
                let value = score(&[card(a), card(b), card(c)]);
                assert!(value <= 31, "{a:?} {b:?} {c:?} scored {value}");
            }
        }
    }
}

#[test]
fn shoe_holds_each_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut shoe = Shoe::new(&mut rng);
    assert_eq!(shoe.len(), DECK_SIZE);

    let mut seen = HashSet::new();
    while let Ok(card) = shoe.draw() {
        assert!(card.is_face_up());
        assert!(seen.insert((card.suit, card.rank)));
    }

    assert_eq!(seen.len(), DECK_SIZE);
    assert!(shoe.is_empty());
    assert!(shoe.draw().is_err());
}

#[test]
fn shuffles_differ_between_shoes() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let first = Shoe::new(&mut rng);
    let second = Shoe::new(&mut rng);
    assert_ne!(first, second);
}

#[test]
fn stacked_shoe_deals_in_order() {
    let mut shoe = Shoe::from_cards(&[card(Rank::Two), card(Rank::Three)]);
    assert_eq!(shoe.draw().unwrap().rank, Rank::Two);
    assert_eq!(shoe.draw().unwrap().rank, Rank::Three);
    assert!(shoe.draw().is_err());
}

#[test]
fn advice_extremes() {
    let up = card(Rank::Two);
    assert_eq!(advise(&hand(&[Rank::Ten, Rank::Seven]), &up).action, Move::Stand);
    assert_eq!(advise(&hand(&[Rank::Three, Rank::Five]), &up).action, Move::Hit);
    // Soft 17 is caught by the stand rule before the soft rules.
    assert_eq!(advise(&hand(&[Rank::Ace, Rank::Six]), &up).action, Move::Stand);
}

#[test]
fn advice_soft_hands() {
    let soft_18 = hand(&[Rank::Ace, Rank::Seven]);
    assert_eq!(advise(&soft_18, &card(Rank::Nine)).action, Move::Hit);
    assert_eq!(advise(&soft_18, &card(Rank::Ace)).action, Move::Hit);
    assert_eq!(advise(&soft_18, &card(Rank::Eight)).action, Move::Stand);

    let soft_16 = hand(&[Rank::Ace, Rank::Five]);
    let advice = advise(&soft_16, &card(Rank::Four));
    assert_eq!(advice.action, Move::Hit);
    assert_eq!(advice.text, "Hit on soft 17 or lower");
}

#[test]
fn advice_hard_stiff_hands() {
    let sixteen = hand(&[Rank::Ten, Rank::Six]);
    assert_eq!(advise(&sixteen, &card(Rank::Seven)).action, Move::Hit);
    assert_eq!(advise(&sixteen, &card(Rank::Six)).action, Move::Stand);

    // A demoted ace makes the hand hard.
    let thirteen = hand(&[Rank::Ace, Rank::Six, Rank::Six]);
    let advice = advise(&thirteen, &card(Rank::King));
    assert_eq!(advice.action, Move::Hit);
    assert_eq!(advice.to_string(), "Hit on 13-14 vs 7 or higher");

    let twelve = hand(&[Rank::Ten, Rank::Two]);
    assert_eq!(advise(&twelve, &card(Rank::Three)).action, Move::Hit);
    assert_eq!(advise(&twelve, &card(Rank::Four)).action, Move::Stand);
    assert_eq!(advise(&twelve, &card(Rank::Six)).action, Move::Stand);
    assert_eq!(advise(&twelve, &card(Rank::Seven)).action, Move::Hit);
}

#[test]
fn advice_doubling_hands() {
    let eleven = advise(&hand(&[Rank::Five, Rank::Six]), &card(Rank::Ace));
    assert_eq!(eleven.action, Move::Double);
    assert_eq!(eleven.without_double(), Move::Hit);

    let ten = hand(&[Rank::Six, Rank::Four]);
    assert_eq!(advise(&ten, &card(Rank::Queen)).action, Move::Hit);
    assert_eq!(advise(&ten, &card(Rank::Ace)).action, Move::Hit);
    assert_eq!(advise(&ten, &card(Rank::Nine)).action, Move::Double);

    let nine = hand(&[Rank::Five, Rank::Four]);
    assert_eq!(advise(&nine, &card(Rank::Two)).action, Move::Hit);
    assert_eq!(advise(&nine, &card(Rank::Three)).action, Move::Double);
    assert_eq!(advise(&nine, &card(Rank::Six)).action, Move::Double);
    assert_eq!(advise(&nine, &card(Rank::Seven)).action, Move::Hit);
}
