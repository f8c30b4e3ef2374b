//! Tests for the REST interface.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use strictly_hangman::api::{ErrorResponse, HealthResponse, NewGameResponse};
use strictly_hangman::{
    GameErrorKind, GameRegistry, GameSnapshot, GuessOutcome, ScriptedWords, create_app,
};
use tower::ServiceExt;

fn test_registry(words: &[&str]) -> GameRegistry {
    GameRegistry::new(Arc::new(ScriptedWords::new(words.iter().copied())))
}

/// Helper to make a GET request and return response body as string
async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Helper to make a POST request with JSON body and return response
async fn post_json(app: Router, uri: &str, json: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn new_game(registry: &GameRegistry) -> NewGameResponse {
    let (status, body) = post_json(create_app(registry.clone()), "/newgame", "").await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_str(&body).unwrap()
}

async fn guess(registry: &GameRegistry, game_id: i64, letter: &str) -> (StatusCode, String) {
    let body = format!(
        r#"{{"game_id": {}, "letter": "{}", "player": "tester"}}"#,
        game_id, letter
    );
    post_json(create_app(registry.clone()), "/guess", &body).await
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(create_app(test_registry(&["cat"])), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let response: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response.status, "ok");
}

#[tokio::test]
async fn test_new_game_assigns_sequential_ids() {
    let registry = test_registry(&["cat"]);

    let first = new_game(&registry).await;
    let second = new_game(&registry).await;

    assert_eq!(first.game_id, 0);
    assert_eq!(second.game_id, 1);
    assert_eq!(second.message, "Game 1 Created");
    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn test_list_games() {
    let registry = test_registry(&["cat", "ox"]);
    new_game(&registry).await;
    new_game(&registry).await;

    let (status, body) = get(create_app(registry.clone()), "/games").await;

    assert_eq!(status, StatusCode::OK);
    let games: Vec<GameSnapshot> = serde_json::from_str(&body).unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].revealed(), "___");
    assert_eq!(games[1].revealed(), "__");
    assert!(games.iter().all(|g| *g.active() && g.winner().is_none()));
}

#[tokio::test]
async fn test_get_single_game() {
    let registry = test_registry(&["cat"]);
    new_game(&registry).await;

    let (status, body) = get(create_app(registry.clone()), "/games/0").await;
    assert_eq!(status, StatusCode::OK);
    let game: GameSnapshot = serde_json::from_str(&body).unwrap();
    assert_eq!(*game.id(), 0);

    let (status, body) = get(create_app(registry.clone()), "/games/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(error.error, GameErrorKind::OutOfRange);
}

#[tokio::test]
async fn test_guess_flow_to_win() {
    let registry = test_registry(&["cat"]);
    new_game(&registry).await;

    let (status, body) = guess(&registry, 0, "c").await;
    assert_eq!(status, StatusCode::OK);
    let outcome: GuessOutcome = serde_json::from_str(&body).unwrap();
    assert_eq!(*outcome.hits(), 1);
    assert_eq!(outcome.revealed(), "c__");

    let (_, body) = guess(&registry, 0, "z").await;
    let outcome: GuessOutcome = serde_json::from_str(&body).unwrap();
    assert_eq!(*outcome.remaining_turns(), 7);

    guess(&registry, 0, "a").await;
    let (status, body) = guess(&registry, 0, "t").await;
    assert_eq!(status, StatusCode::OK);
    let outcome: GuessOutcome = serde_json::from_str(&body).unwrap();
    assert!(!*outcome.active());
    assert_eq!(outcome.winner().as_deref(), Some("tester"));
    assert!(
        outcome
            .detail()
            .iter()
            .any(|line| line == "tester is the winner of Game 0!")
    );
}

#[tokio::test]
async fn test_guess_defaults_player_to_guest() {
    let registry = test_registry(&["a"]);
    new_game(&registry).await;

    let (status, body) = post_json(
        create_app(registry.clone()),
        "/guess",
        r#"{"game_id": 0, "letter": "a"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let outcome: GuessOutcome = serde_json::from_str(&body).unwrap();
    assert_eq!(outcome.winner().as_deref(), Some("guest"));
}

#[tokio::test]
async fn test_guess_error_statuses() {
    let registry = test_registry(&["ab"]);
    new_game(&registry).await;

    let (status, body) = guess(&registry, 9, "a").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(error.error, GameErrorKind::OutOfRange);

    let (status, body) = guess(&registry, -1, "a").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("out_of_range"));

    let (status, body) = guess(&registry, 0, "ab").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(error.error, GameErrorKind::InvalidInput);

    let (status, _) = guess(&registry, 0, "a").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = guess(&registry, 0, "a").await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: ErrorResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(error.error, GameErrorKind::LetterAlreadyGuessed);

    let (status, _) = guess(&registry, 0, "b").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = guess(&registry, 0, "c").await;
    assert_eq!(status, StatusCode::CONFLICT);
    let error: ErrorResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(error.error, GameErrorKind::GameOver);
}

#[tokio::test]
async fn test_new_game_word_failure_is_service_unavailable() {
    let registry = test_registry(&[]);

    let (status, body) = post_json(create_app(registry.clone()), "/newgame", "").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let error: ErrorResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(error.error, GameErrorKind::WordUnavailable);
    assert!(registry.is_empty());
}

#[tokio::test]
async fn test_blank_player_is_credited_as_guest() {
    let registry = test_registry(&["a"]);
    new_game(&registry).await;

    let (status, body) = post_json(
        create_app(registry.clone()),
        "/guess",
        r#"{"game_id": 0, "letter": "a", "player": "  "}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let outcome: GuessOutcome = serde_json::from_str(&body).unwrap();
    assert_eq!(outcome.winner().as_deref(), Some("guest"));
}

#[tokio::test]
async fn test_malformed_guess_body_is_invalid_input() {
    let registry = test_registry(&["cat"]);
    new_game(&registry).await;

    for body in [
        r#"{"game_id": 0}"#,
        r#"{"game_id": "x", "letter": "c"}"#,
        "not json",
    ] {
        let (status, response) = post_json(create_app(registry.clone()), "/guess", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        let error: ErrorResponse = serde_json::from_str(&response).unwrap();
        assert_eq!(error.error, GameErrorKind::InvalidInput, "body {}", body);
        assert!(!error.message.is_empty());
    }

    let snapshot = registry.snapshot(0).unwrap();
    assert_eq!(*snapshot.remaining_turns(), strictly_hangman::MAX_TURNS);
}

#[tokio::test]
async fn test_non_numeric_game_path_is_invalid_input() {
    let registry = test_registry(&["cat"]);
    new_game(&registry).await;

    let (status, body) = get(create_app(registry), "/games/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(error.error, GameErrorKind::InvalidInput);
}
