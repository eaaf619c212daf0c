use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Карманные карты игрока.
pub type HoleCards = [Card; 2];

/// Улица раздачи — определяется числом открытых карт борда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// 0 → Preflop, 3 → Flop, 4 → Turn, 5 → River.
    ///
    /// Частично открытый флоп (1–2 карты) в холдеме не бывает, но считать по нему
    /// можно — относим его к префлопу.
    pub fn from_board_len(n: usize) -> Option<Street> {
        match n {
            0..=2 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }

    /// Сколько карт борда открыто на этой улице.
    pub const fn n_revealed(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };
        f.write_str(name)
    }
}
