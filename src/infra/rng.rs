use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::HoleCards;
use crate::engine::RandomSource;

/// RNG на `thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и воспроизводимых раздач.
/// Одинаковый seed — одинаковая колода.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Случайная раздача: карманные карты игроков и открытая часть борда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RandomDeal {
    pub players: Vec<HoleCards>,
    pub board: Vec<Card>,
}

/// Раздать `players` рук по 2 карты и `board_cards` карт борда из перемешанной колоды.
///
/// `None`, если в колоде не хватает карт.
pub fn deal_random<R: RandomSource>(
    players: usize,
    board_cards: usize,
    rng: &mut R,
) -> Option<RandomDeal> {
    let mut deck = Deck::standard_52();
    if players * 2 + board_cards > deck.len() {
        return None;
    }
    deck.shuffle(rng);

    let holes = (0..players)
        .map(|_| match deck.draw_n(2)[..] {
            [a, b] => Some([a, b]),
            _ => None,
        })
        .collect::<Option<Vec<HoleCards>>>()?;
    let board = deck.draw_n(board_cards);

    Some(RandomDeal {
        players: holes,
        board,
    })
}
