//! Event signup: join, duplicate join, leave, and unsupported verbs.

use actix_web::test;
use serde_json::json;

use super::test_helpers::*;

/// Join, join again, leave, leave again.
#[actix_rt::test]
async fn test_signup_lifecycle() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let me = gamer_id(&app, &token).await;
    let game = create_game(&app, &token, "Catan").await;
    let event = create_event(&app, &token, game, "2024-05-01", "19:00").await;
    let uri = format!("/events/{}/signup", event);

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(auth(&token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 201, "Join should succeed: {:?}", body);
    assert_eq!(body["event_id"].as_i64(), Some(event));
    assert_eq!(body["gamer_id"].as_i64(), Some(me));
    assert_eq!(pool.count_registrations(event as i32).await.unwrap(), 1);

    // Second join is rejected and leaves the single record in place
    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(auth(&token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 422, "Duplicate join should conflict: {:?}", body);
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(pool.count_registrations(event as i32).await.unwrap(), 1);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(auth(&token))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, 204);
    assert_eq!(pool.count_registrations(event as i32).await.unwrap(), 0);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(auth(&token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 404, "Leaving twice should be not found: {:?}", body);
}

/// One gamer owns the game, another organizes, the first signs up.
#[actix_rt::test]
async fn test_chess_night_scenario() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let gamer_a = register_gamer(&app, "gamer_a").await;
    let gamer_b = register_gamer(&app, "gamer_b").await;
    let a_id = gamer_id(&app, &gamer_a).await;

    let req = test::TestRequest::post()
        .uri("/games")
        .insert_header(auth(&gamer_a))
        .set_json(json!({
            "title": "Chess",
            "maker": "Staunton",
            "skillLevel": 3,
            "numberOfPlayers": 2,
            "gameTypeId": 1,
        }))
        .to_request();
    let (status, chess) = send(&app, req).await;
    assert_eq!(status, 201);

    let req = test::TestRequest::post()
        .uri("/events")
        .insert_header(auth(&gamer_b))
        .set_json(json!({
            "gameId": chess["id"],
            "description": "Casual match",
            "date": "2024-01-01",
            "time": "18:00",
        }))
        .to_request();
    let (status, event) = send(&app, req).await;
    assert_eq!(status, 201);
    let event_id = event["id"].as_i64().unwrap() as i32;
    let uri = format!("/events/{}/signup", event_id);

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(auth(&gamer_a))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 201);
    assert_eq!(body["gamer_id"].as_i64(), Some(a_id));
    assert_eq!(pool.count_registrations(event_id).await.unwrap(), 1);

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(auth(&gamer_a))
        .to_request();
    assert_eq!(send(&app, req).await.0, 422);
    assert_eq!(pool.count_registrations(event_id).await.unwrap(), 1);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(auth(&gamer_a))
        .to_request();
    assert_eq!(send(&app, req).await.0, 204);
    assert_eq!(pool.count_registrations(event_id).await.unwrap(), 0);
}

#[actix_rt::test]
async fn test_leave_without_join_is_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let organizer = register_gamer(&app, "organizer").await;
    let visitor = register_gamer(&app, "visitor").await;
    let game = create_game(&app, &organizer, "Chess").await;
    let event = create_event(&app, &organizer, game, "2024-05-01", "19:00").await;

    // Another gamer's registration must not be touched
    let req = test::TestRequest::post()
        .uri(&format!("/events/{}/signup", event))
        .insert_header(auth(&organizer))
        .to_request();
    assert_eq!(send(&app, req).await.0, 201);

    let req = test::TestRequest::delete()
        .uri(&format!("/events/{}/signup", event))
        .insert_header(auth(&visitor))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(pool.count_registrations(event as i32).await.unwrap(), 1);
}

#[actix_rt::test]
async fn test_join_unknown_event_is_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let token = register_gamer(&app, "alice").await;

    let req = test::TestRequest::post()
        .uri("/events/999/signup")
        .insert_header(auth(&token))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 404, "{:?}", body);
    assert_eq!(body["reason"], "Event 999 not found");
}

#[actix_rt::test]
async fn test_other_verbs_on_signup_not_allowed() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let game = create_game(&app, &token, "Catan").await;
    let event = create_event(&app, &token, game, "2024-05-01", "19:00").await;
    let uri = format!("/events/{}/signup", event);

    for req in [
        test::TestRequest::get().uri(&uri),
        test::TestRequest::put().uri(&uri),
    ] {
        let (status, body) = send(&app, req.insert_header(auth(&token)).to_request()).await;
        assert_eq!(status, 405);
        assert_eq!(body["error"], "METHOD_NOT_ALLOWED");
    }

    assert_eq!(pool.count_registrations(event as i32).await.unwrap(), 0);
}

/// `joined` is relative to the viewer while `attendee_count` is shared.
#[actix_rt::test]
async fn test_joined_flag_is_per_viewer() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let alice = register_gamer(&app, "alice").await;
    let bob = register_gamer(&app, "bob").await;
    let game = create_game(&app, &alice, "Catan").await;
    let event = create_event(&app, &alice, game, "2024-05-01", "19:00").await;

    let req = test::TestRequest::post()
        .uri(&format!("/events/{}/signup", event))
        .insert_header(auth(&bob))
        .to_request();
    assert_eq!(send(&app, req).await.0, 201);

    let req = test::TestRequest::get()
        .uri(&format!("/events/{}", event))
        .insert_header(auth(&alice))
        .to_request();
    let (_, as_alice) = send(&app, req).await;
    assert_eq!(as_alice["joined"], false);
    assert_eq!(as_alice["attendee_count"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/events/{}", event))
        .insert_header(auth(&bob))
        .to_request();
    let (_, as_bob) = send(&app, req).await;
    assert_eq!(as_bob["joined"], true);
    assert_eq!(as_bob["attendee_count"], 1);
}
