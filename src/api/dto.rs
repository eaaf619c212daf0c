use serde::{Deserialize, Serialize};

use crate::domain::hand::Street;
use crate::eval::HandCategory;

/// Запрос оценки лучшей руки. Карты — токены вида "AS", "10H".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluateRequest {
    pub hole: Vec<String>,
    #[serde(default)]
    pub board: Vec<String>,
}

/// Лучшая рука игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluateResponse {
    pub category: HandCategory,
    /// Код категории: 100 (старшая карта) .. 1000 (роял-флеш).
    pub code: u16,
    pub tie_break: Vec<u8>,
    pub description: String,
    /// 5 карт, из которых собрана рука.
    pub cards: Vec<String>,
}

/// Запрос вероятностей: руки игроков, известная часть борда, сброшенные карты.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EquityRequest {
    pub players: Vec<Vec<String>>,
    #[serde(default)]
    pub board: Vec<String>,
    #[serde(default)]
    pub dropped: Vec<String>,
}

/// Вероятность и статистика одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerEquityDto {
    pub hole: Vec<String>,
    pub equity: f64,
    pub wins: u64,
    pub ties: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityResponse {
    pub street: Street,
    pub boards: u64,
    pub players: Vec<PlayerEquityDto>,
}
