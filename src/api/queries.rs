use crate::api::dto::{
    EquityRequest, EquityResponse, EvaluateRequest, EvaluateResponse, PlayerEquityDto,
};
use crate::api::errors::ApiError;
use crate::domain::card::Card;
use crate::domain::hand::HoleCards;
use crate::engine::{compute_equity, validate_deal, EquityConfig, OddsError};
use crate::eval::{describe_hand, evaluate_best_hand};

/// Оценить лучшую руку по токенам карт.
pub fn evaluate(req: &EvaluateRequest) -> Result<EvaluateResponse, ApiError> {
    let hole = parse_cards(&req.hole)?;
    let board = parse_cards(&req.board)?;
    if hole.len() != 2 {
        return Err(ApiError::BadRequest(format!(
            "expected 2 hole cards, got {}",
            hole.len()
        )));
    }
    validate_deal(&[[hole[0], hole[1]]], &board, &[])?;

    let (key, combination) =
        evaluate_best_hand(&hole, &board).map_err(OddsError::from)?;

    Ok(EvaluateResponse {
        category: key.category(),
        code: key.category().code(),
        tie_break: key.tie_break(),
        description: describe_hand(&key),
        cards: combination.cards().iter().map(Card::to_string).collect(),
    })
}

/// Посчитать точные вероятности по токенам карт (с проверкой дубликатов).
pub fn equity(req: &EquityRequest, config: &EquityConfig) -> Result<EquityResponse, ApiError> {
    let players = req
        .players
        .iter()
        .map(|tokens| parse_hole(tokens))
        .collect::<Result<Vec<_>, _>>()?;
    let board = parse_cards(&req.board)?;
    let dropped = parse_cards(&req.dropped)?;

    validate_deal(&players, &board, &dropped)?;
    let report = compute_equity(&players, &board, &dropped, config)?;

    let players = players
        .iter()
        .enumerate()
        .map(|(i, hole)| PlayerEquityDto {
            hole: hole.iter().map(Card::to_string).collect(),
            equity: report.equities[i],
            wins: report.wins[i],
            ties: report.ties[i],
        })
        .collect();

    Ok(EquityResponse {
        street: report.street,
        boards: report.boards,
        players,
    })
}

fn parse_cards(tokens: &[String]) -> Result<Vec<Card>, ApiError> {
    tokens
        .iter()
        .map(|t| t.trim().parse::<Card>().map_err(ApiError::from))
        .collect()
}

fn parse_hole(tokens: &[String]) -> Result<HoleCards, ApiError> {
    let cards = parse_cards(tokens)?;
    match cards[..] {
        [a, b] => Ok([a, b]),
        _ => Err(ApiError::BadRequest(format!(
            "each player needs exactly 2 hole cards, got {}",
            cards.len()
        ))),
    }
}
