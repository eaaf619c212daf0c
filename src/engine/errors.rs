use thiserror::Error;

use crate::domain::card::Card;
use crate::engine::combinatorics::CombinatoricsError;
use crate::eval::EvalError;

/// Ошибки расчёта шоудауна и вероятностей.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OddsError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("board has {0} cards, at most 5 are allowed")]
    TooManyBoardCards(usize),

    #[error("showdown needs exactly 5 board cards, got {0}")]
    IncompleteBoard(usize),

    #[error("card {0} is dealt more than once")]
    DuplicateCard(Card),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Combinatorics(#[from] CombinatoricsError),
}
