use poker_odds::api::{
    self, ApiError, EquityRequest, EquityResponse, EvaluateRequest,
};
use poker_odds::domain::hand::Street;
use poker_odds::engine::EquityConfig;
use poker_odds::eval::HandCategory;

/// Утилита: токены из строки.
fn tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

fn equity_request(players: &[&str], board: &str, dropped: &str) -> EquityRequest {
    EquityRequest {
        players: players.iter().map(|p| tokens(p)).collect(),
        board: tokens(board),
        dropped: tokens(dropped),
    }
}

//
// ---- evaluate ----
//

#[test]
fn evaluate_reports_category_key_and_cards() {
    let resp = api::evaluate(&EvaluateRequest {
        hole: tokens("AS KS"),
        board: tokens("QS JS 10S 2D 3C"),
    })
    .unwrap();

    assert_eq!(resp.category, HandCategory::RoyalFlush);
    assert_eq!(resp.code, 1000);
    assert!(resp.tie_break.is_empty());
    let mut cards = resp.cards.clone();
    cards.sort();
    assert_eq!(cards, tokens("10S AS JS KS QS"));
}

#[test]
fn evaluate_with_short_board() {
    let resp = api::evaluate(&EvaluateRequest {
        hole: tokens("9C 9D"),
        board: tokens("9H 4S 4D"),
    })
    .unwrap();
    assert_eq!(resp.category, HandCategory::FullHouse);
    assert_eq!(resp.tie_break, vec![9, 4]);
}

#[test]
fn evaluate_rejects_bad_input() {
    let err = api::evaluate(&EvaluateRequest {
        hole: tokens("AS"),
        board: tokens("2C 3C 4C"),
    })
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    let err = api::evaluate(&EvaluateRequest {
        hole: tokens("AS AS"),
        board: tokens("2C 3C 4C"),
    })
    .unwrap_err();
    assert!(matches!(err, ApiError::Engine(_)));

    let err = api::evaluate(&EvaluateRequest {
        hole: tokens("AS ZZ"),
        board: vec![],
    })
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCards(_)));
}

//
// ---- equity ----
//

#[test]
fn equity_on_the_turn() {
    let req = equity_request(&["AS AH", "KS KH"], "KD 7C 2H 3S", "");
    let resp = api::equity(&req, &EquityConfig::default()).unwrap();

    assert_eq!(resp.street, Street::Turn);
    assert_eq!(resp.boards, 44);
    assert_eq!(resp.players[0].hole, tokens("AS AH"));
    assert_eq!(resp.players[0].wins, 2);
    assert_eq!(resp.players[1].wins, 42);
    assert_eq!(resp.players[0].equity, 2.0 / 44.0);
}

#[test]
fn equity_rejects_duplicates_everywhere() {
    let config = EquityConfig::sequential();

    // Карта у двух игроков.
    let err = api::equity(&equity_request(&["AS AH", "AS KH"], "", ""), &config).unwrap_err();
    assert!(matches!(err, ApiError::Engine(_)));

    // Карта и на борде, и в сбросе.
    let err =
        api::equity(&equity_request(&["AS AH"], "2C 3C 4C", "2C"), &config).unwrap_err();
    assert!(matches!(err, ApiError::Engine(ref msg) if msg.contains("2C")));
}

#[test]
fn equity_rejects_three_card_hand() {
    let err = api::equity(
        &equity_request(&["AS AH KD"], "2C 3C 4C", ""),
        &EquityConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn equity_rejects_six_card_board() {
    let err = api::equity(
        &equity_request(&["AS AH"], "2C 3C 4C 5C 6C 7C", ""),
        &EquityConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::Engine(_)));
}

//
// ---- JSON ----
//

#[test]
fn requests_deserialize_with_defaults() {
    let req: EquityRequest = serde_json::from_str(r#"{"players": [["AS","AH"],["KS","KH"]]}"#)
        .unwrap();
    assert!(req.board.is_empty());
    assert!(req.dropped.is_empty());

    let config: EquityConfig = serde_json::from_str(r#"{"parallel": false}"#).unwrap();
    assert!(!config.parallel);
    assert_eq!(config.min_parallel_boards, EquityConfig::default().min_parallel_boards);
}

#[test]
fn response_serializes_roundtrip() {
    let req = equity_request(&["AS AH", "KS KH"], "2C 7D 9H JC 3S", "");
    let resp = api::equity(&req, &EquityConfig::default()).unwrap();
    assert_eq!(resp.boards, 1);

    let json = serde_json::to_string(&resp).unwrap();
    let back: EquityResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, resp);
}
