use serde::{Deserialize, Serialize};

use crate::domain::card::CardParseError;
use crate::engine::OddsError;

/// Ошибки внешнего API (то, что отдаём клиенту / печатаем в CLI).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильная форма запроса (например, у игрока не 2 карты).
    BadRequest(String),

    /// Не разобрался токен карты.
    InvalidCards(String),

    /// Ошибка расчёта (дубликаты, мало карт и т.п.).
    Engine(String),
}

impl From<OddsError> for ApiError {
    fn from(err: OddsError) -> Self {
        ApiError::Engine(err.to_string())
    }
}

impl From<CardParseError> for ApiError {
    fn from(err: CardParseError) -> Self {
        ApiError::InvalidCards(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            ApiError::InvalidCards(msg) => write!(f, "invalid cards: {msg}"),
            ApiError::Engine(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
