use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{HoleCards, Street};
use crate::engine::combinatorics::binomial;
use crate::engine::config::EquityConfig;
use crate::engine::errors::OddsError;
use crate::engine::showdown::resolve_showdown;

/// Результат точного перебора всех дозакладок борда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EquityReport {
    /// Улица, с которой считали (по числу известных карт борда).
    pub street: Street,
    /// Сколько вариантов борда перебрано.
    pub boards: u64,
    /// Ожидаемая доля банка каждого игрока. Сумма = 1.
    pub equities: Vec<f64>,
    /// На скольких бордах игрок выиграл единолично.
    pub wins: Vec<u64>,
    /// На скольких бордах игрок разделил банк.
    pub ties: Vec<u64>,
}

/// Точные вероятности победы (доля банка) для каждого игрока.
///
/// `dropped` — карты, вышедшие из игры, но не лежащие на борде; `&[]`, если таких нет.
pub fn compute_win_probabilities(
    players: &[HoleCards],
    known_board: &[Card],
    dropped: &[Card],
) -> Result<Vec<f64>, OddsError> {
    compute_equity(players, known_board, dropped, &EquityConfig::default())
        .map(|report| report.equities)
}

/// Полный перебор: все C(m, k) дозакладок оставшейся колоды, k = 5 - |борд|.
///
/// Счётчики целочисленные, деление выполняется один раз в конце, поэтому
/// параллельный и последовательный перебор дают побитово одинаковый результат.
pub fn compute_equity(
    players: &[HoleCards],
    known_board: &[Card],
    dropped: &[Card],
    config: &EquityConfig,
) -> Result<EquityReport, OddsError> {
    if players.is_empty() {
        return Err(OddsError::NoPlayers);
    }
    let street = Street::from_board_len(known_board.len())
        .ok_or(OddsError::TooManyBoardCards(known_board.len()))?;

    if street == Street::River {
        let showdown = resolve_showdown(players, known_board)?;
        let mut tally = Tally::new(players.len());
        tally.record(&showdown.winners);
        return Ok(EquityReport {
            street,
            boards: tally.boards,
            equities: showdown.shares,
            wins: tally.wins(),
            ties: tally.ties(),
        });
    }

    let deck = Deck::remaining(
        dropped
            .iter()
            .chain(known_board)
            .chain(players.iter().flatten()),
    );
    let k = 5 - known_board.len();
    let boards = binomial(deck.len(), k)?;

    log::debug!(
        "enumerating {} boards on the {} ({} players, {} cards left, {} to come)",
        boards,
        street,
        players.len(),
        deck.len(),
        k
    );

    let tally = if config.runs_parallel(boards) {
        match config.threads {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| OddsError::ThreadPool(e.to_string()))?
                .install(|| tally_parallel(players, known_board, &deck.cards, k))?,
            None => tally_parallel(players, known_board, &deck.cards, k)?,
        }
    } else {
        tally_completions(players, known_board, deck.cards.iter().combinations(k))?
    };
    debug_assert_eq!(tally.boards, boards);

    let report = EquityReport {
        street,
        boards: tally.boards,
        equities: tally.equities(),
        wins: tally.wins(),
        ties: tally.ties(),
    };
    log::info!(
        "{} boards on the {}: equities {:?}",
        report.boards,
        report.street,
        report.equities
    );
    Ok(report)
}

/// Дозакладки делятся по индексу первой карты: map — подсчёт одной части,
/// reduce — поэлементная сумма счётчиков.
fn tally_parallel(
    players: &[HoleCards],
    known_board: &[Card],
    deck: &[Card],
    k: usize,
) -> Result<Tally, OddsError> {
    (0..deck.len())
        .into_par_iter()
        .map(|first| {
            let completions = deck[first + 1..]
                .iter()
                .combinations(k - 1)
                .map(|rest| std::iter::once(&deck[first]).chain(rest));
            tally_completions(players, known_board, completions)
        })
        .try_reduce(|| Tally::new(players.len()), |a, b| Ok(a.merge(b)))
}

fn tally_completions<'a, I, C>(
    players: &[HoleCards],
    known_board: &[Card],
    completions: I,
) -> Result<Tally, OddsError>
where
    I: Iterator<Item = C>,
    C: IntoIterator<Item = &'a Card>,
{
    let mut tally = Tally::new(players.len());
    let mut board = Vec::with_capacity(5);
    for completion in completions {
        board.clear();
        board.extend_from_slice(known_board);
        board.extend(completion.into_iter().copied());
        let showdown = resolve_showdown(players, &board)?;
        tally.record(&showdown.winners);
    }
    Ok(tally)
}

/// Целочисленные итоги перебора.
///
/// `splits[p][w - 1]` — на скольких бордах игрок `p` оказался среди `w` победителей.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Tally {
    boards: u64,
    splits: Vec<Vec<u64>>,
}

impl Tally {
    fn new(players: usize) -> Self {
        Self {
            boards: 0,
            splits: vec![vec![0; players]; players],
        }
    }

    fn record(&mut self, winners: &[usize]) {
        self.boards += 1;
        let w = winners.len();
        for &p in winners {
            self.splits[p][w - 1] += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.boards += other.boards;
        for (mine, theirs) in self.splits.iter_mut().zip(other.splits) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        self
    }

    fn equities(&self) -> Vec<f64> {
        let boards = self.boards as f64;
        self.splits
            .iter()
            .map(|row| {
                let pots: f64 = row
                    .iter()
                    .enumerate()
                    .map(|(i, &n)| n as f64 / (i + 1) as f64)
                    .sum();
                pots / boards
            })
            .collect()
    }

    fn wins(&self) -> Vec<u64> {
        self.splits.iter().map(|row| row[0]).collect()
    }

    fn ties(&self) -> Vec<u64> {
        self.splits.iter().map(|row| row[1..].iter().sum()).collect()
    }
}
