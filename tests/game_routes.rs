mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{delete, get, id_of, patch, post, send, test_config, test_store};
use serde_json::json;

fn player(name: &str, game_id: Option<i64>) -> serde_json::Value {
    json!({
        "name": name,
        "score": null,
        "is_winner": false,
        "round_id": null,
        "game_id": game_id
    })
}

#[actix_web::test]
async fn game_list_nests_players_and_decks() -> anyhow::Result<()> {
    let config = test_config();
    let store = test_store(&config).await;
    let app = test::init_service(midnight_backend::app(store, config)).await;

    let (status, game) = send(
        &app,
        post("/game", json!({ "name": "midnight", "players": [], "deck": [] })).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let game_id = id_of(&game);

    send(&app, post("/player", player("Ann", Some(game_id))).to_request()).await;
    send(&app, post("/player", player("Bo", Some(game_id))).to_request()).await;
    send(&app, post("/player", player("Cy", None)).to_request()).await;

    let (_, deck) = send(
        &app,
        post("/deck", json!({ "cards": [], "shuffled": false, "game_id": game_id })).to_request(),
    )
    .await;
    let deck_id = id_of(&deck);

    for value in 1..=3 {
        let body = json!({
            "suit": "diamonds",
            "rank": value.to_string(),
            "value": value,
            "deck_id": deck_id,
            "is_drawn": false
        });
        send(&app, post("/card", body).to_request()).await;
    }

    let (status, games) = send(&app, get("/game").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    let games = games.as_array().expect("game list");
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["name"], "midnight");
    assert_eq!(games[0]["players"].as_array().map(Vec::len), Some(2));
    assert_eq!(games[0]["deck"].as_array().map(Vec::len), Some(1));
    // Decks nested in a game are flat
    assert_eq!(
        games[0]["deck"][0],
        json!({ "id": deck_id, "shuffled": false, "game_id": game_id })
    );

    let (_, decks) = send(&app, get("/deck").to_request()).await;
    assert_eq!(decks[0]["cards"].as_array().map(Vec::len), Some(3));

    let (_, detail) = send(&app, get(&format!("/game/{game_id}")).to_request()).await;
    assert_eq!(detail, games[0]);
    Ok(())
}

#[actix_web::test]
async fn create_game_claims_players_and_decks() -> anyhow::Result<()> {
    let config = test_config();
    let store = test_store(&config).await;
    let app = test::init_service(midnight_backend::app(store, config)).await;

    let (_, ann) = send(&app, post("/player", player("Ann", None)).to_request()).await;
    let (_, deck) = send(&app, post("/deck", json!({ "cards": [] })).to_request()).await;

    let body = json!({ "name": "table one", "players": [id_of(&ann)], "deck": [id_of(&deck)] });
    let (status, game) = send(&app, post("/game", body).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(game["players"][0]["id"], ann["id"]);
    assert_eq!(game["deck"][0]["id"], deck["id"]);

    let ann_id = id_of(&ann);
    let (_, ann) = send(&app, get(&format!("/player/{ann_id}")).to_request()).await;
    assert_eq!(ann["game_id"], game["id"]);
    Ok(())
}

#[actix_web::test]
async fn game_requires_a_name() -> anyhow::Result<()> {
    let config = test_config();
    let store = test_store(&config).await;
    let app = test::init_service(midnight_backend::app(store, config)).await;

    let body = json!({ "players": [], "deck": [] });
    let (status, error) = send(&app, post("/game", body).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "missing field `name`");

    let (_, games) = send(&app, get("/game").to_request()).await;
    assert_eq!(games, json!([]));
    Ok(())
}

#[actix_web::test]
async fn deleting_a_game_keeps_its_players() -> anyhow::Result<()> {
    let config = test_config();
    let store = test_store(&config).await;
    let app = test::init_service(midnight_backend::app(store, config)).await;

    let (_, game) = send(
        &app,
        post("/game", json!({ "name": "short", "players": [], "deck": [] })).to_request(),
    )
    .await;
    let game_id = id_of(&game);
    let (_, ann) = send(&app, post("/player", player("Ann", Some(game_id))).to_request()).await;

    let (_, renamed) = send(
        &app,
        patch(&format!("/game/{game_id}"), json!({ "name": "shorter" })).to_request(),
    )
    .await;
    assert_eq!(renamed["name"], "shorter");
    assert_eq!(renamed["players"].as_array().map(Vec::len), Some(1));

    let (status, echoed) = send(&app, delete(&format!("/game/{game_id}")).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(echoed, json!(game_id.to_string()));

    let ann_id = id_of(&ann);
    let (_, ann) = send(&app, get(&format!("/player/{ann_id}")).to_request()).await;
    assert_eq!(ann["game_id"], game_id);

    let (_, gone) = send(&app, get(&format!("/game/{game_id}")).to_request()).await;
    assert_eq!(gone, json!({}));
    Ok(())
}

#[actix_web::test]
async fn game_without_deck_key_is_rejected() -> anyhow::Result<()> {
    let config = test_config();
    let store = test_store(&config).await;
    let app = test::init_service(midnight_backend::app(store, config)).await;

    for body in [json!({ "name": "x" }), json!({ "name": "x", "players": [] })] {
        let (status, error) = send(&app, post("/game", body).to_request()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error["error"].as_str().unwrap_or_default().starts_with("missing field"));
    }

    let (status, error) = send(
        &app,
        post("/game", json!({ "name": "x", "players": [] })).to_request(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error, json!({ "error": "missing field `deck`" }));

    let (_, games) = send(&app, get("/game").to_request()).await;
    assert_eq!(games, json!([]));
    Ok(())
}

#[actix_web::test]
async fn long_game_names_are_stored_whole() -> anyhow::Result<()> {
    let config = test_config();
    let store = test_store(&config).await;
    let app = test::init_service(midnight_backend::app(store, config)).await;

    let name = "a very long midnight game name ".repeat(4);
    let body = json!({ "name": name, "players": [], "deck": [] });
    let (status, game) = send(&app, post("/game", body).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(game["name"], name.as_str());
    Ok(())
}
