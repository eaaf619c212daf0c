use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::eval::hand_rank::{HandCategory, HandKey};
use crate::eval::lookup_tables::{
    detect_straight, rank_to_bit, ranks_desc, RankMask, BROADWAY,
};

/// Маска мастей: 4 бита, по одному на `Suit`.
pub type SuitMask = u8;

/// Ровно 5 карт плюс всё, что из них выводится для классификации:
/// группировка ранг → масти, множество рангов, множество мастей и итоговый `HandKey`.
///
/// Уникальность карт внутри комбинации не проверяется — это гарантирует вызывающий код.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Combination {
    cards: [Card; 5],
    /// Индекс = числовой ранг (2..14), значение = маска мастей этого ранга.
    suits_by_rank: [SuitMask; 15],
    ranks: RankMask,
    suits: SuitMask,
    key: HandKey,
}

impl Combination {
    pub fn new(cards: [Card; 5]) -> Self {
        let mut suits_by_rank = [0 as SuitMask; 15];
        let mut ranks: RankMask = 0;
        let mut suits: SuitMask = 0;

        for card in cards.iter() {
            suits_by_rank[card.rank.value() as usize] |= card.suit.bit();
            ranks |= rank_to_bit(card.rank);
            suits |= card.suit.bit();
        }

        let key = classify(&suits_by_rank, ranks, suits);

        Self {
            cards,
            suits_by_rank,
            ranks,
            suits,
            key,
        }
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn key(&self) -> HandKey {
        self.key
    }

    pub fn category(&self) -> HandCategory {
        self.key.category()
    }

    /// Множество различных рангов (13-битная маска, бит 0 = двойка).
    pub fn distinct_ranks(&self) -> RankMask {
        self.ranks
    }

    /// Множество различных мастей (4-битная маска).
    pub fn distinct_suits(&self) -> SuitMask {
        self.suits
    }

    /// Масти, в которых в комбинации присутствует данный ранг.
    pub fn suits_of(&self, rank: Rank) -> Vec<Suit> {
        let mask = self.suits_by_rank[rank.value() as usize];
        Suit::ALL
            .into_iter()
            .filter(|s| mask & s.bit() != 0)
            .collect()
    }

    /// Все 5 рангов (мультимножество) по убыванию.
    pub fn sorted_ranks(&self) -> [Rank; 5] {
        let mut ranks = self.cards.map(|c| c.rank);
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks
    }

    /// Каноническое правило ничьей: та же категория и то же мультимножество рангов.
    pub fn ties_with(&self, other: &Combination) -> bool {
        self.category() == other.category() && self.sorted_ranks() == other.sorted_ranks()
    }
}

/// Классификация строго по приоритету: флеш-семейство, 2 ранга (фулл-хаус / каре),
/// стрит, 3 ранга (сет / две пары), 4 ранга (пара), иначе старшая карта.
fn classify(suits_by_rank: &[SuitMask; 15], ranks: RankMask, suits: SuitMask) -> HandKey {
    let distinct = ranks.count_ones();

    // Флеш-семейство: все 5 карт одной масти.
    if suits.count_ones() == 1 {
        if ranks == BROADWAY {
            return HandKey::RoyalFlush;
        }
        if let Some(high) = straight_of_five(ranks) {
            return HandKey::StraightFlush(high);
        }
        return HandKey::Flush(five_desc(ranks));
    }

    // Для каждого ранга — сколько у него мастей (т.е. карт). Старшие ранги первыми.
    let of_count = |n: u32| {
        ranks_desc(ranks).filter(move |r| suits_by_rank[r.value() as usize].count_ones() == n)
    };

    if distinct == 2 {
        if let (Some(trips), Some(pair)) = (of_count(3).next(), of_count(2).next()) {
            return HandKey::FullHouse(trips, pair);
        }
        if let (Some(quads), Some(kicker)) = (of_count(4).next(), of_count(1).next()) {
            return HandKey::FourOfAKind(quads, kicker);
        }
    }

    if let Some(high) = straight_of_five(ranks) {
        return HandKey::Straight(high);
    }

    if distinct == 3 {
        if let Some(trips) = of_count(3).next() {
            let mut kickers = of_count(1);
            if let (Some(k1), Some(k2)) = (kickers.next(), kickers.next()) {
                return HandKey::ThreeOfAKind(trips, [k1, k2]);
            }
        }
        let mut pairs = of_count(2);
        if let (Some(hi), Some(lo), Some(kicker)) = (pairs.next(), pairs.next(), of_count(1).next()) {
            return HandKey::TwoPair(hi, lo, kicker);
        }
    }

    if distinct == 4 {
        if let Some(pair) = of_count(2).next() {
            let mut kickers = of_count(1);
            if let (Some(k1), Some(k2), Some(k3)) = (kickers.next(), kickers.next(), kickers.next()) {
                return HandKey::OnePair(pair, [k1, k2, k3]);
            }
        }
    }

    HandKey::HighCard(five_desc(ranks))
}

/// Стрит только из 5 различных рангов: 5 подряд или wheel.
fn straight_of_five(ranks: RankMask) -> Option<Rank> {
    if ranks.count_ones() == 5 {
        detect_straight(ranks)
    } else {
        None
    }
}

/// Пять различных рангов по убыванию. Для вырожденного входа (повторы карт)
/// недостающие позиции заполняются двойками.
fn five_desc(ranks: RankMask) -> [Rank; 5] {
    let mut out = [Rank::Two; 5];
    for (slot, rank) in out.iter_mut().zip(ranks_desc(ranks)) {
        *slot = rank;
    }
    out
}
