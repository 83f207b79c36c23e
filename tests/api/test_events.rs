//! Event CRUD, filtering and cascade behavior.

use actix_web::test;
use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_create_event_nests_game_and_organizer() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let me = gamer_id(&app, &token).await;
    let game = create_game(&app, &token, "Catan").await;

    let req = test::TestRequest::post()
        .uri("/events")
        .insert_header(auth(&token))
        .set_json(json!({
            "gameId": game,
            "description": "  Friday night  ",
            "date": "2024-06-07",
            "time": "18:30",
        }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 201, "{:?}", body);
    assert_eq!(body["description"], "Friday night");
    assert_eq!(body["date"], "2024-06-07");
    assert_eq!(body["time"], "18:30:00");
    assert_eq!(body["game"]["id"].as_i64(), Some(game));
    assert_eq!(body["game"]["title"], "Catan");
    assert_eq!(body["organizer"]["id"].as_i64(), Some(me));
    assert_eq!(body["organizer"]["user"]["last_name"], "alice");
    assert_eq!(body["attendee_count"], 0);
    assert_eq!(body["joined"], false);
}

#[actix_rt::test]
async fn test_create_event_for_missing_game_persists_nothing() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let token = register_gamer(&app, "alice").await;

    let req = test::TestRequest::post()
        .uri("/events")
        .insert_header(auth(&token))
        .set_json(json!({
            "gameId": 42,
            "description": "Nobody plays this",
            "date": "2024-06-07",
            "time": "18:30",
        }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 404, "{:?}", body);
    assert_eq!(body["reason"], "Game 42 not found");

    let events = pool.list_events(&Default::default()).await.unwrap();
    assert!(events.is_empty());
}

#[actix_rt::test]
async fn test_invalid_date_is_bad_request() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let token = register_gamer(&app, "alice").await;
    let game = create_game(&app, &token, "Catan").await;

    let req = test::TestRequest::post()
        .uri("/events")
        .insert_header(auth(&token))
        .set_json(json!({
            "gameId": game,
            "description": "Game night",
            "date": "07/06/2024",
            "time": "18:30",
        }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_malformed_body_is_bad_request() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let token = register_gamer(&app, "alice").await;

    let req = test::TestRequest::post()
        .uri("/events")
        .insert_header(auth(&token))
        .set_json(json!({ "description": "no game" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 400, "{:?}", body);
    assert_eq!(body["error"], "INVALID_INPUT");
}

#[actix_rt::test]
async fn test_list_events_filters_by_game() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let catan = create_game(&app, &token, "Catan").await;
    let chess = create_game(&app, &token, "Chess").await;
    let first = create_event(&app, &token, catan, "2024-05-01", "19:00").await;
    create_event(&app, &token, chess, "2024-05-02", "19:00").await;
    let third = create_event(&app, &token, catan, "2024-05-03", "19:00").await;

    let req = test::TestRequest::get()
        .uri(&format!("/events?gameId={}", catan))
        .insert_header(auth(&token))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 200);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, third]);

    let req = test::TestRequest::get()
        .uri("/events")
        .insert_header(auth(&token))
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[actix_rt::test]
async fn test_events_require_token() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let req = test::TestRequest::get().uri("/events").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 401);
    assert_eq!(body["error"], "UNAUTHORIZED");

    let req = test::TestRequest::get()
        .uri("/events")
        .insert_header(auth("lvl_not-a-real-token"))
        .to_request();
    assert_eq!(send(&app, req).await.0, 401);

    let req = test::TestRequest::get()
        .uri("/events")
        .insert_header(("Authorization", "Bearer something"))
        .to_request();
    assert_eq!(send(&app, req).await.0, 401);
}

/// Whoever saves an event becomes its organizer.
#[actix_rt::test]
async fn test_update_event_reassigns_organizer() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let alice = register_gamer(&app, "alice").await;
    let bob = register_gamer(&app, "bob").await;
    let bob_id = gamer_id(&app, &bob).await;
    let catan = create_game(&app, &alice, "Catan").await;
    let chess = create_game(&app, &alice, "Chess").await;
    let event = create_event(&app, &alice, catan, "2024-05-01", "19:00").await;

    let req = test::TestRequest::put()
        .uri(&format!("/events/{}", event))
        .insert_header(auth(&bob))
        .set_json(json!({
            "gameId": chess,
            "description": "Moved to chess",
            "date": "2024-05-02",
            "time": "20:15:00",
        }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 204, "{:?}", body);

    let req = test::TestRequest::get()
        .uri(&format!("/events/{}", event))
        .insert_header(auth(&alice))
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body["organizer"]["id"].as_i64(), Some(bob_id));
    assert_eq!(body["game"]["id"].as_i64(), Some(chess));
    assert_eq!(body["description"], "Moved to chess");
    assert_eq!(body["time"], "20:15:00");
}

#[actix_rt::test]
async fn test_update_missing_event_is_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let token = register_gamer(&app, "alice").await;
    let game = create_game(&app, &token, "Catan").await;

    let req = test::TestRequest::put()
        .uri("/events/77")
        .insert_header(auth(&token))
        .set_json(json!({
            "gameId": game,
            "description": "Ghost",
            "date": "2024-05-02",
            "time": "20:15",
        }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 404);
    assert_eq!(body["reason"], "Event 77 not found");
}

#[actix_rt::test]
async fn test_delete_event_removes_registrations() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let game = create_game(&app, &token, "Catan").await;
    let event = create_event(&app, &token, game, "2024-05-01", "19:00").await;

    let req = test::TestRequest::post()
        .uri(&format!("/events/{}/signup", event))
        .insert_header(auth(&token))
        .to_request();
    assert_eq!(send(&app, req).await.0, 201);

    let req = test::TestRequest::delete()
        .uri(&format!("/events/{}", event))
        .insert_header(auth(&token))
        .to_request();
    assert_eq!(send(&app, req).await.0, 204);
    assert_eq!(pool.count_registrations(event as i32).await.unwrap(), 0);

    let req = test::TestRequest::get()
        .uri(&format!("/events/{}", event))
        .insert_header(auth(&token))
        .to_request();
    assert_eq!(send(&app, req).await.0, 404);

    let req = test::TestRequest::delete()
        .uri(&format!("/events/{}", event))
        .insert_header(auth(&token))
        .to_request();
    assert_eq!(send(&app, req).await.0, 404);
}

/// Deleting a game takes its events and their registrations with it.
#[actix_rt::test]
async fn test_delete_game_cascades_to_events() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let catan = create_game(&app, &token, "Catan").await;
    let chess = create_game(&app, &token, "Chess").await;
    let doomed = create_event(&app, &token, catan, "2024-05-01", "19:00").await;
    let kept = create_event(&app, &token, chess, "2024-05-01", "19:00").await;

    let req = test::TestRequest::post()
        .uri(&format!("/events/{}/signup", doomed))
        .insert_header(auth(&token))
        .to_request();
    assert_eq!(send(&app, req).await.0, 201);

    let req = test::TestRequest::delete()
        .uri(&format!("/games/{}", catan))
        .insert_header(auth(&token))
        .to_request();
    assert_eq!(send(&app, req).await.0, 204);

    assert!(pool.get_event_by_id(doomed as i32).await.unwrap().is_none());
    assert_eq!(pool.count_registrations(doomed as i32).await.unwrap(), 0);
    assert!(pool.get_event_by_id(kept as i32).await.unwrap().is_some());
}

#[actix_rt::test]
async fn test_non_numeric_id_is_bad_request() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let token = register_gamer(&app, "alice").await;

    let req = test::TestRequest::get()
        .uri("/events/tomorrow")
        .insert_header(auth(&token))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "INVALID_INPUT");
}
