//! Тесты оценки рук: классификация 5 карт, порядок ключей, выбор лучшей из 5–7.

use poker_odds::domain::card::{Card, Rank, Suit};
use poker_odds::eval::{evaluate_best_hand, Combination, HandCategory, HandKey};
use poker_odds::infra::DeterministicRng;
use poker_odds::engine::RandomSource;
use poker_odds::domain::deck::Deck;

use Rank::*;

/// Утилита: список карт из строки токенов.
fn cards(s: &str) -> Vec<Card> {
    Card::parse_list(s).expect("valid card tokens")
}

fn key_of(s: &str) -> HandKey {
    let five: [Card; 5] = cards(s).try_into().expect("exactly 5 cards");
    Combination::new(five).key()
}

//
// ---- Классификация ----
//

#[test]
fn royal_flush_has_no_tie_break() {
    assert_eq!(key_of("10S JS QS KS AS").as_tuple(), vec![1000]);
}

#[test]
fn wheel_straight_is_five_high() {
    assert_eq!(key_of("AS 2C 3D 4H 5S").as_tuple(), vec![500, 5]);
}

#[test]
fn suited_wheel_is_five_high_straight_flush() {
    assert_eq!(key_of("AS 2S 3S 4S 5S").as_tuple(), vec![900, 5]);
}

#[test]
fn king_high_straight_flush_is_not_royal() {
    assert_eq!(key_of("9H 10H JH QH KH"), HandKey::StraightFlush(King));
}

#[test]
fn tie_break_values_per_category() {
    assert_eq!(key_of("7S 7H 4D 4C 2S").as_tuple(), vec![300, 7, 4, 2]);
    assert_eq!(key_of("QS QH QD 3C 9S").as_tuple(), vec![400, 12, 9, 3]);
    assert_eq!(key_of("8S 8H 8D 3C 3S").as_tuple(), vec![700, 8, 3]);
    assert_eq!(key_of("3S 3H 3D 3C AS").as_tuple(), vec![800, 3, 14]);
    assert_eq!(key_of("JS JH 2D 9C 5S").as_tuple(), vec![200, 11, 9, 5, 2]);
    assert_eq!(key_of("2D 7D 9D JD KD").as_tuple(), vec![600, 13, 11, 9, 7, 2]);
    assert_eq!(key_of("2D 7S 9D JC KD").as_tuple(), vec![100, 13, 11, 9, 7, 2]);
}

#[test]
fn category_code_is_always_one_of_ten() {
    let codes: Vec<u16> = HandCategory::ALL.iter().map(|c| c.code()).collect();
    let mut rng = DeterministicRng::from_seed(2024);

    for _ in 0..2_000 {
        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);
        let five: [Card; 5] = deck.draw_n(5).try_into().unwrap();
        let key = Combination::new(five).key();
        assert!(codes.contains(&key.category().code()));
        assert_eq!(key.tie_break().len(), key.category().tie_break_len());
    }
}

//
// ---- Порядок ----
//

#[test]
fn two_pair_low_pair_beats_kicker() {
    // {7,7,4,4,2} > {7,7,3,3,9}
    assert!(key_of("7S 7H 4D 4C 2S") > key_of("7D 7C 3S 3H 9D"));
}

#[test]
fn higher_category_always_wins() {
    let ladder = [
        "AS KD QH JC 9S",  // high card
        "2S 2H 3D 4C 5H",  // pair
        "2S 2H 3D 3C 4H",  // two pair
        "2S 2H 2D 3C 4H",  // trips
        "AS 2C 3D 4H 5S",  // wheel
        "2H 3H 4H 5H 7H",  // weakest flush
        "2S 2H 2D 3C 3H",  // weakest boat
        "2S 2H 2D 2C 3H",  // weakest quads
        "AC 2C 3C 4C 5C",  // steel wheel
        "10C JC QC KC AC", // royal
    ];
    let keys: Vec<HandKey> = ladder.iter().map(|h| key_of(h)).collect();
    for w in keys.windows(2) {
        assert!(w[1] > w[0], "{:?} should beat {:?}", w[1], w[0]);
        assert!(w[1].category().code() > w[0].category().code());
    }
}

#[test]
fn any_quads_beat_any_full_house() {
    assert!(key_of("2S 2H 2D 2C 3S") > key_of("AS AH AD KC KS"));
}

#[test]
fn ace_high_straight_beats_wheel() {
    assert!(key_of("10S JH QD KC AS") > key_of("AS 2C 3D 4H 5S"));
    assert!(key_of("2S 3C 4D 5H 6S") > key_of("AS 2C 3D 4H 5S"));
}

//
// ---- Лучшая рука из 5–7 карт ----
//

#[test]
fn best_hand_picks_straight_flush_over_quads() {
    let board = cards("9C 10C JC QC 2D");
    let (sf, _) = evaluate_best_hand(&cards("8C KC"), &board).unwrap();
    let (quads, _) = evaluate_best_hand(&cards("KD KH"), &cards("KC KS 3C 3D 7S")).unwrap();
    assert_eq!(sf, HandKey::StraightFlush(King));
    assert_eq!(quads, HandKey::FourOfAKind(King, Seven));
    assert!(sf > quads);
}

#[test]
fn best_hand_two_trips_make_a_boat() {
    let (key, combo) = evaluate_best_hand(&cards("AS AH"), &cards("AD KC KS KH QD")).unwrap();
    assert_eq!(key, HandKey::FullHouse(Ace, King));
    assert_eq!(combo.sorted_ranks(), [Ace, Ace, Ace, King, King]);
}

#[test]
fn best_hand_three_pairs_keep_best_kicker() {
    let (key, _) = evaluate_best_hand(&cards("AS AH"), &cards("KD KC QS QH JD")).unwrap();
    assert_eq!(key, HandKey::TwoPair(Ace, King, Queen));
}

#[test]
fn best_hand_with_fewer_board_cards() {
    let (key, _) = evaluate_best_hand(&cards("5H 5D"), &cards("5S 9C 9D")).unwrap();
    assert_eq!(key, HandKey::FullHouse(Five, Nine));

    let (key, _) = evaluate_best_hand(&cards("AH KH"), &cards("2C 7D 9S JS")).unwrap();
    assert_eq!(key, HandKey::HighCard([Ace, King, Jack, Nine, Seven]));
}

#[test]
fn best_combination_cards_come_from_input() {
    let hole = cards("AH 4H");
    let board = cards("KH 9H 2H 2C 2S");
    let (key, combo) = evaluate_best_hand(&hole, &board).unwrap();
    assert_eq!(key.category(), HandCategory::Flush);
    for c in combo.cards() {
        assert!(hole.contains(c) || board.contains(c));
        assert_eq!(c.suit, Suit::Hearts);
    }
}
