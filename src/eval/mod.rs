//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основная функция:
//!   `evaluate_best_hand(hole, board) -> (HandKey, Combination)`

pub mod combination;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use combination::Combination;
pub use evaluator::{evaluate_best_hand, EvalError};
pub use hand_rank::{describe_hand, HandCategory, HandKey};
