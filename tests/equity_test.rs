//! Точный перебор дозакладок борда.
//!
//! Эти тесты проверяют:
//! - сумму вероятностей = 1;
//! - точные значения на тёрне (аутсы / размер колоды);
//! - учёт сброшенных карт;
//! - ошибку при нехватке карт в колоде;
//! - совпадение параллельного и последовательного перебора.

use poker_odds::domain::card::Card;
use poker_odds::domain::deck::Deck;
use poker_odds::domain::hand::{HoleCards, Street};
use poker_odds::engine::{
    compute_equity, compute_win_probabilities, CombinatoricsError, EquityConfig, OddsError,
};

fn cards(s: &str) -> Vec<Card> {
    Card::parse_list(s).expect("valid card tokens")
}

fn hole(s: &str) -> HoleCards {
    let c = cards(s);
    [c[0], c[1]]
}

//
// TEST 1 — AA vs KK на префлопе, полный перебор C(48, 5)
//
#[test]
fn aces_beat_kings_preflop() {
    let players = [hole("AS AH"), hole("KS KH")];
    let report = compute_equity(&players, &[], &[], &EquityConfig::default()).unwrap();

    assert_eq!(report.street, Street::Preflop);
    assert_eq!(report.boards, 1_712_304);
    let sum: f64 = report.equities.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
    assert!(report.equities[0] > report.equities[1]);
    assert!(report.equities[0] > 0.80 && report.equities[0] < 0.85);
    assert_eq!(report.ties[0], report.ties[1]);
}

//
// TEST 2 — точные аутсы на тёрне
//
#[test]
fn two_outers_on_the_turn() {
    // У второго сет королей, первому нужен один из двух оставшихся тузов.
    let players = [hole("AS AH"), hole("KS KH")];
    let board = cards("KD 7C 2H 3S");
    let probs = compute_win_probabilities(&players, &board, &[]).unwrap();
    assert_eq!(probs, vec![2.0 / 44.0, 42.0 / 44.0]);
}

#[test]
fn dropped_cards_leave_the_deck() {
    let players = [hole("AS AH"), hole("KS KH")];
    let board = cards("KD 7C 2H 3S");
    let report =
        compute_equity(&players, &board, &cards("AD"), &EquityConfig::sequential()).unwrap();
    assert_eq!(report.boards, 43);
    assert_eq!(report.equities, vec![1.0 / 43.0, 42.0 / 43.0]);
    assert_eq!(report.wins, vec![1, 42]);
}

#[test]
fn always_split_when_board_plays() {
    // Каре тузов на борде, кикеры у игроков одинаковые по рангам.
    let players = [hole("2C 3D"), hole("2D 3C")];
    let report =
        compute_equity(&players, &cards("AC AD AH AS"), &[], &EquityConfig::default()).unwrap();
    assert_eq!(report.boards, 44);
    assert_eq!(report.equities, vec![0.5, 0.5]);
    assert_eq!(report.ties, vec![44, 44]);
    assert_eq!(report.wins, vec![0, 0]);
}

//
// TEST 3 — сумма по трём игрокам на флопе
//
#[test]
fn three_way_flop_sums_to_one() {
    let players = [hole("AS KS"), hole("QD QC"), hole("8H 9H")];
    let board = cards("2S 7S 10H");
    let probs = compute_win_probabilities(&players, &board, &[]).unwrap();
    assert_eq!(probs.len(), 3);
    assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
}

#[test]
fn parallel_matches_sequential_on_the_flop() {
    let players = [hole("AS KS"), hole("QD QC"), hole("8H 9H"), hole("2C 2D")];
    let board = cards("2S 7S 10H");
    let seq = compute_equity(&players, &board, &[], &EquityConfig::sequential()).unwrap();
    let par = compute_equity(
        &players,
        &board,
        &[],
        &EquityConfig {
            parallel: true,
            min_parallel_boards: 0,
            threads: None,
        },
    )
    .unwrap();
    assert_eq!(seq.equities, par.equities);
    assert_eq!(seq.wins, par.wins);
    assert_eq!(seq.ties, par.ties);
    assert_eq!(seq.boards, 820); // C(41, 2)
}

//
// TEST 4 — ошибки
//
#[test]
fn deck_too_small_is_a_combinatorics_error() {
    let players = [hole("AS AH")];
    // Оставляем в колоде только 3 карты, а нужно 5.
    let keep = cards("2C 3C 4C");
    let dropped: Vec<Card> = Deck::standard_52()
        .cards
        .into_iter()
        .filter(|c| !keep.contains(c) && !players[0].contains(c))
        .collect();

    let err = compute_win_probabilities(&players, &[], &dropped).unwrap_err();
    assert_eq!(
        err,
        OddsError::Combinatorics(CombinatoricsError::NotEnoughItems { n: 3, k: 5 })
    );
    assert!(err.to_string().starts_with("cannot choose 5 from fewer than 5 items"));
}

#[test]
fn too_many_board_cards() {
    let err =
        compute_win_probabilities(&[hole("AS AH")], &cards("2C 3C 4C 5C 6C 7C"), &[]).unwrap_err();
    assert_eq!(err, OddsError::TooManyBoardCards(6));
}

#[test]
fn no_players() {
    assert_eq!(
        compute_win_probabilities(&[], &cards("2C 3C 4C"), &[]),
        Err(OddsError::NoPlayers)
    );
}
