//! Доменная модель: карты, колода, карманные карты и улицы.

pub mod card;
pub mod deck;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
