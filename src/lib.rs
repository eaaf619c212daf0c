//! Точные вероятности в Texas Hold'em.
//!
//! Два вычислительных входа:
//!   - `evaluate_best_hand(hole, board)` – лучшая 5-карточная рука игрока;
//!   - `compute_win_probabilities(players, board, dropped)` – доля банка каждого
//!     игрока, посчитанная полным перебором всех дозакладок борда (не Монте-Карло).
//!
//! Всё остальное (разбор токенов, DTO, CLI) — обвязка вокруг этих двух функций.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use domain::{Card, HoleCards, Rank, Street, Suit};
pub use engine::{
    compute_equity, compute_win_probabilities, resolve_showdown, EquityConfig, EquityReport,
    OddsError, Showdown,
};
pub use eval::{describe_hand, evaluate_best_hand, Combination, EvalError, HandCategory, HandKey};
