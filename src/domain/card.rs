use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты. Буквы совпадают с форматом токена: `S`, `C`, `D`, `H`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Spades,   // ♠
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    /// Бит масти в 4-битной маске мастей.
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Ранг карты. Дискриминант = числовой ранг (2..14, Ace = 14).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Все ранги по возрастанию.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Числовое значение ранга: 2..14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Обратное к `value()`. Вне диапазона 2..14 — `None`.
    pub fn from_value(v: u8) -> Option<Rank> {
        match v {
            2..=14 => Some(Rank::ALL[(v - 2) as usize]),
            _ => None,
        }
    }

    /// Токен ранга: "2".."10", "J", "Q", "K", "A".
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Разобрать список токенов, разделённых пробелами и/или запятыми: `"AS, 10H KD"`.
    pub fn parse_list(s: &str) -> Result<Vec<Card>, CardParseError> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect()
    }
}

/// Ошибка разбора токена карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("empty card token")]
    Empty,

    #[error("invalid rank in card token {0:?}")]
    InvalidRank(String),

    #[error("invalid suit in card token {0:?}")]
    InvalidSuit(String),
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl fmt::Display for Card {
    /// Формат вида `AH`, `10D`, `7C`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "AH", "10D", "7C".
///
/// Принимается только верхний регистр и только "10" для десятки:
/// никаких "T", "1", строчных мастей и т.п.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_ch = s.chars().last().ok_or(CardParseError::Empty)?;
        let r_tok = &s[..s.len() - s_ch.len_utf8()];

        let suit = match s_ch {
            'S' => Suit::Spades,
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            _ => return Err(CardParseError::InvalidSuit(s.to_string())),
        };

        let rank = Rank::ALL
            .into_iter()
            .find(|r| r.token() == r_tok)
            .ok_or_else(|| CardParseError::InvalidRank(s.to_string()))?;

        Ok(Card { rank, suit })
    }
}
