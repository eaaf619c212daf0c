use thiserror::Error;

use crate::domain::card::Card;
use crate::eval::combination::Combination;
use crate::eval::hand_rank::HandKey;

/// Ошибки подбора лучшей руки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("need at least 5 cards to form a hand, got {0}")]
    NotEnoughCards(usize),

    #[error("at most 7 cards (2 hole + 5 board) can be evaluated, got {0}")]
    TooManyCards(usize),
}

/// Главная функция: вычислить лучшую 5-карточную руку из hole + board.
///
/// Ожидается:
///   - `hole.len() == 2`
///   - `board.len()` от 0 до 5
///
/// Но в целом функция корректно работает для любых 5–7 карт.
/// Возвращает ключ лучшей руки и саму комбинацию.
pub fn evaluate_best_hand(
    hole: &[Card],
    board: &[Card],
) -> Result<(HandKey, Combination), EvalError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    match all_cards.len() {
        n if n < 5 => Err(EvalError::NotEnoughCards(n)),
        n if n > 7 => Err(EvalError::TooManyCards(n)),
        _ => {
            let best = best_of_all_5card_combinations(&all_cards);
            Ok((best.key(), best))
        }
    }
}

/// Перебираем все комбинации 5 карт из N (N=5–7) и выбираем лучшую.
///
/// Сравниваются только `HandKey`: категория всегда раньше тай-брейка.
/// При равных ключах остаётся первая найденная комбинация — мультимножество рангов
/// у равных ключей одинаковое.
fn best_of_all_5card_combinations(cards: &[Card]) -> Combination {
    let n = cards.len();
    debug_assert!((5..=7).contains(&n));

    let mut best = Combination::new([cards[0], cards[1], cards[2], cards[3], cards[4]]);

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let candidate =
                            Combination::new([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if candidate.key() > best.key() {
                            best = candidate;
                        }
                    }
                }
            }
        }
    }

    best
}
