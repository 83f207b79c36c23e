//! Profile endpoint and health checks.

use actix_web::test;

use super::test_helpers::*;

#[actix_rt::test]
async fn test_profile_lists_joined_events_in_schedule_order() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let game = create_game(&app, &token, "Catan").await;
    let late = create_event(&app, &token, game, "2024-05-02", "09:00").await;
    let early = create_event(&app, &token, game, "2024-05-01", "21:00").await;
    let earliest = create_event(&app, &token, game, "2024-05-01", "08:00").await;
    create_event(&app, &token, game, "2024-04-01", "08:00").await;

    for event in [late, early, earliest] {
        let req = test::TestRequest::post()
            .uri(&format!("/events/{}/signup", event))
            .insert_header(auth(&token))
            .to_request();
        assert_eq!(send(&app, req).await.0, 201);
    }

    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(auth(&token))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 200);
    let ids: Vec<i64> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![earliest, early, late]);
    assert_eq!(body["events"][0]["game"]["title"], "Catan");
}

#[actix_rt::test]
async fn test_profile_requires_token() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let req = test::TestRequest::get().uri("/profile").to_request();
    assert_eq!(send(&app, req).await.0, 401);
}

#[actix_rt::test]
async fn test_health_and_ready() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/ready").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body["database"], "connected");
}
