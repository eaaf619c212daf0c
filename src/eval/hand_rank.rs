use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе.
///
/// Числовые коды (`code()`) монотонно растут с силой: 100 (старшая карта) .. 1000 (роял-флеш).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub const fn code(self) -> u16 {
        (self as u16 + 1) * 100
    }

    /// Сколько значений тай-брейка несёт ключ этой категории.
    pub const fn tie_break_len(self) -> usize {
        match self {
            HandCategory::HighCard | HandCategory::Flush => 5,
            HandCategory::OnePair => 4,
            HandCategory::TwoPair | HandCategory::ThreeOfAKind => 3,
            HandCategory::FullHouse | HandCategory::FourOfAKind => 2,
            HandCategory::Straight | HandCategory::StraightFlush => 1,
            HandCategory::RoyalFlush => 0,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        };
        f.write_str(name)
    }
}

/// Ключ сравнения 5-карточной руки: категория + тай-брейк фиксированной длины.
///
/// Порядок вариантов совпадает с `HandCategory`, поэтому derived `Ord` сначала
/// сравнивает категорию и только при равенстве — ранги внутри варианта.
/// Тай-брейки разных категорий никогда не сравниваются позиционно.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandKey {
    /// Пять рангов по убыванию.
    HighCard([Rank; 5]),
    /// Пара, затем три кикера по убыванию.
    OnePair(Rank, [Rank; 3]),
    /// Старшая пара, младшая пара, кикер.
    TwoPair(Rank, Rank, Rank),
    /// Сет, затем два кикера по убыванию.
    ThreeOfAKind(Rank, [Rank; 2]),
    /// Старшая карта стрита (для wheel — пятёрка).
    Straight(Rank),
    /// Пять рангов по убыванию.
    Flush([Rank; 5]),
    /// Тройка, пара.
    FullHouse(Rank, Rank),
    /// Каре, кикер.
    FourOfAKind(Rank, Rank),
    /// Старшая карта (для wheel — пятёрка).
    StraightFlush(Rank),
    RoyalFlush,
}

impl HandKey {
    pub fn category(&self) -> HandCategory {
        match self {
            HandKey::HighCard(..) => HandCategory::HighCard,
            HandKey::OnePair(..) => HandCategory::OnePair,
            HandKey::TwoPair(..) => HandCategory::TwoPair,
            HandKey::ThreeOfAKind(..) => HandCategory::ThreeOfAKind,
            HandKey::Straight(..) => HandCategory::Straight,
            HandKey::Flush(..) => HandCategory::Flush,
            HandKey::FullHouse(..) => HandCategory::FullHouse,
            HandKey::FourOfAKind(..) => HandCategory::FourOfAKind,
            HandKey::StraightFlush(..) => HandCategory::StraightFlush,
            HandKey::RoyalFlush => HandCategory::RoyalFlush,
        }
    }

    /// Тай-брейк в числовом виде (ранги 2..14), в порядке сравнения.
    pub fn tie_break(&self) -> Vec<u8> {
        let ranks: Vec<Rank> = match *self {
            HandKey::HighCard(r) | HandKey::Flush(r) => r.to_vec(),
            HandKey::OnePair(p, k) => std::iter::once(p).chain(k).collect(),
            HandKey::TwoPair(hi, lo, k) => vec![hi, lo, k],
            HandKey::ThreeOfAKind(t, k) => std::iter::once(t).chain(k).collect(),
            HandKey::Straight(h) | HandKey::StraightFlush(h) => vec![h],
            HandKey::FullHouse(a, b) | HandKey::FourOfAKind(a, b) => vec![a, b],
            HandKey::RoyalFlush => Vec::new(),
        };
        ranks.into_iter().map(Rank::value).collect()
    }

    /// Кортеж `(код категории, тай-брейк…)`, например `[500, 5]` для wheel-стрита.
    pub fn as_tuple(&self) -> Vec<u16> {
        std::iter::once(self.category().code())
            .chain(self.tie_break().into_iter().map(u16::from))
            .collect()
    }
}

impl fmt::Display for HandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_hand(self))
    }
}

/// Человеческое описание руки: "Two pair, 7 and 4, kicker 2".
pub fn describe_hand(key: &HandKey) -> String {
    let cat = key.category();
    match *key {
        HandKey::HighCard(r) => format!("{cat}, {}", join_ranks(&r)),
        HandKey::OnePair(p, k) => format!("{cat} of {p}, kickers {}", join_ranks(&k)),
        HandKey::TwoPair(hi, lo, k) => format!("{cat}, {hi} and {lo}, kicker {k}"),
        HandKey::ThreeOfAKind(t, k) => format!("{cat} {t}, kickers {}", join_ranks(&k)),
        HandKey::Straight(h) | HandKey::StraightFlush(h) => format!("{cat}, {h} high"),
        HandKey::Flush(r) => format!("{cat}, {}", join_ranks(&r)),
        HandKey::FullHouse(t, p) => format!("{cat}, {t} full of {p}"),
        HandKey::FourOfAKind(q, k) => format!("{cat} {q}, kicker {k}"),
        HandKey::RoyalFlush => cat.to_string(),
    }
}

fn join_ranks(ranks: &[Rank]) -> String {
    ranks
        .iter()
        .map(|r| r.token())
        .collect::<Vec<_>>()
        .join(" ")
}
