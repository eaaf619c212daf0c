use std::collections::HashSet;

use crate::domain::card::Card;
use crate::domain::hand::HoleCards;
use crate::engine::errors::OddsError;

/// Проверка раздачи перед расчётом: каждая карта встречается не больше одного раза
/// среди карманных, борда и сброшенных, борд не длиннее 5 карт.
///
/// Ядро (`resolve_showdown`, `compute_equity`) эту проверку не делает — её вызывает API/CLI.
pub fn validate_deal(
    players: &[HoleCards],
    board: &[Card],
    dropped: &[Card],
) -> Result<(), OddsError> {
    if players.is_empty() {
        return Err(OddsError::NoPlayers);
    }
    if board.len() > 5 {
        return Err(OddsError::TooManyBoardCards(board.len()));
    }

    let mut seen = HashSet::with_capacity(players.len() * 2 + board.len() + dropped.len());
    for card in players.iter().flatten().chain(board).chain(dropped) {
        if !seen.insert(*card) {
            return Err(OddsError::DuplicateCard(*card));
        }
    }
    Ok(())
}
