//! Tests for the MCP tool server.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode};
use std::sync::Arc;
use strictly_hangman::{
    GameRegistry, GameServer, GameSnapshot, GetGameRequest, GuessRequest, ScriptedWords,
};

fn test_server(words: &[&str]) -> GameServer {
    GameServer::new(GameRegistry::new(Arc::new(ScriptedWords::new(
        words.iter().copied(),
    ))))
}

fn guess(game_id: i64, letter: &str) -> Parameters<GuessRequest> {
    Parameters(GuessRequest::new(
        game_id,
        letter.to_string(),
        "agent".to_string(),
    ))
}

#[tokio::test]
async fn test_new_game_creates_in_shared_registry() {
    let server = test_server(&["cat"]);

    let result = server.new_game().await.expect("Tool call failed");
    assert_ne!(result.is_error, Some(true));
    assert_eq!(server.registry().len(), 1);

    server.new_game().await.expect("Tool call failed");
    assert_eq!(server.registry().len(), 2);
}

#[tokio::test]
async fn test_two_servers_share_one_registry() {
    let registry = GameRegistry::new(Arc::new(ScriptedWords::new(["cat"])));
    let first = GameServer::new(registry.clone());
    let second = GameServer::new(registry.clone());

    first.new_game().await.expect("Tool call failed");
    second
        .guess(guess(0, "c"))
        .await
        .expect("Tool call failed");

    assert_eq!(registry.snapshot(0).expect("Game exists").revealed(), "c__");
}

#[tokio::test]
async fn test_guess_to_win() {
    let server = test_server(&["ox"]);
    server.new_game().await.expect("Tool call failed");

    for letter in ["o", "x"] {
        let result = server.guess(guess(0, letter)).await.expect("Tool call failed");
        assert_ne!(result.is_error, Some(true));
    }

    let snapshot = server.registry().snapshot(0).expect("Game exists");
    assert!(!*snapshot.active());
    assert_eq!(snapshot.winner().as_deref(), Some("agent"));
}

#[tokio::test]
async fn test_rule_rejections_are_tool_errors() {
    let server = test_server(&["a"]);
    server.new_game().await.expect("Tool call failed");

    server.guess(guess(0, "b")).await.expect("Tool call failed");

    let repeated = server.guess(guess(0, "b")).await.expect("Tool call failed");
    assert_eq!(repeated.is_error, Some(true));

    server.guess(guess(0, "a")).await.expect("Tool call failed");

    let finished = server.guess(guess(0, "c")).await.expect("Tool call failed");
    assert_eq!(finished.is_error, Some(true));
}

#[tokio::test]
async fn test_bad_arguments_are_invalid_params() {
    let server = test_server(&["cat"]);
    server.new_game().await.expect("Tool call failed");

    let err = server
        .guess(guess(5, "c"))
        .await
        .expect_err("Game 5 does not exist");
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

    let err = server
        .guess(guess(0, "cc"))
        .await
        .expect_err("Not a single letter");
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

    let err = server
        .get_game(Parameters(GetGameRequest { game_id: -2 }))
        .await
        .expect_err("Negative id");
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_word_failure_is_internal_error() {
    let server = test_server(&[]);

    let err = server.new_game().await.expect_err("No words available");
    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert!(server.registry().is_empty());
}

fn text_of(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| content.as_text())
        .map(|text| text.text.clone())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_list_games_renders_table() {
    let server = test_server(&["cat"]);
    let empty = server.list_games().await.expect("Tool call failed");
    assert_ne!(empty.is_error, Some(true));
    assert_eq!(text_of(&empty), "No games yet");

    server.new_game().await.expect("Tool call failed");
    let listed = server.list_games().await.expect("Tool call failed");
    assert_ne!(listed.is_error, Some(true));

    let text = text_of(&listed);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2, "table was {:?}", text);
    assert_eq!(lines[0], GameSnapshot::TABLE_HEADER);
    assert!(lines[1].contains("N/A"));
    assert!(lines[1].contains("true"));
    assert!(lines[1].ends_with("_,_,_"));
}
