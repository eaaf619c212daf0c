//! Расчётный движок: шоудаун на известном борде и точные вероятности победы.
//!
//! Основные операции:
//!   - `resolve_showdown` – победители и доли банка на полном борде
//!   - `compute_win_probabilities` – доли банка перебором всех дозакладок
//!   - `compute_equity` – то же, с отчётом (число досок, победы/сплиты) и настройками

pub mod combinatorics;
pub mod config;
pub mod equity;
pub mod errors;
pub mod showdown;
pub mod validation;

pub use combinatorics::{binomial, CombinatoricsError};
pub use config::EquityConfig;
pub use equity::{compute_equity, compute_win_probabilities, EquityReport};
pub use errors::OddsError;
pub use showdown::{resolve_showdown, BestHand, Showdown};
pub use validation::validate_deal;

/// Источник случайности для раздачи случайных рук.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
