use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание делает вызывающий код через `RandomSource`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Spades 2..A, Clubs 2..A, Diamonds 2..A, Hearts 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Оставшаяся колода: 52 карты минус все `excluded`.
    ///
    /// Дубликаты в `excluded` не проверяются — карта просто исключается один раз.
    pub fn remaining<'a, I>(excluded: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut deck = Self::standard_52();
        let excluded: Vec<Card> = excluded.into_iter().copied().collect();
        deck.remove_cards(&excluded);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять n карт сверху.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            } else {
                break;
            }
        }
        taken
    }

    /// Убрать из колоды уже использованные карты.
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
