use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::HoleCards;
use crate::engine::errors::OddsError;
use crate::eval::{evaluate_best_hand, Combination, HandKey};

/// Лучшая рука одного игрока на полном борде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestHand {
    pub key: HandKey,
    pub combination: Combination,
}

/// Итог шоудауна на известном 5-карточном борде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Showdown {
    /// Лучшая рука каждого игрока, в порядке входа.
    pub hands: Vec<BestHand>,
    /// Индексы победителей (несколько — сплит).
    pub winners: Vec<usize>,
    /// Доля банка каждого игрока: 1/|winners| у победителей, 0 у остальных.
    pub shares: Vec<f64>,
}

impl Showdown {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Определить победителей на полностью открытом борде.
pub fn resolve_showdown(players: &[HoleCards], board: &[Card]) -> Result<Showdown, OddsError> {
    if players.is_empty() {
        return Err(OddsError::NoPlayers);
    }
    if board.len() != 5 {
        return Err(OddsError::IncompleteBoard(board.len()));
    }

    let hands = players
        .iter()
        .map(|hole| {
            evaluate_best_hand(hole, board).map(|(key, combination)| BestHand { key, combination })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let winners = winner_indices(&hands);
    let share = 1.0 / winners.len() as f64;
    let mut shares = vec![0.0; hands.len()];
    for &i in &winners {
        shares[i] = share;
    }

    log::trace!(
        "showdown on {}: winners {:?}",
        board.iter().map(Card::to_string).collect::<Vec<_>>().join(" "),
        winners
    );

    Ok(Showdown {
        hands,
        winners,
        shares,
    })
}

/// Победители: все, чья рука делит банк с максимальной по `HandKey`.
///
/// Ничья определяется каноническим правилом `Combination::ties_with`
/// (категория + мультимножество рангов). Внутри одной категории оно совпадает
/// с равенством `HandKey`, что проверяется в debug-сборке.
pub(crate) fn winner_indices(hands: &[BestHand]) -> Vec<usize> {
    let Some(top) = hands.iter().max_by_key(|h| h.key) else {
        return Vec::new();
    };

    hands
        .iter()
        .enumerate()
        .filter(|(_, h)| {
            let tied = h.combination.ties_with(&top.combination);
            debug_assert_eq!(tied, h.key == top.key);
            tied
        })
        .map(|(i, _)| i)
        .collect()
}
