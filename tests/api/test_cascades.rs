//! Foreign-key behavior at the database level: cascading deletes and
//! inserts that reference rows which no longer exist.

use actix_web::test;
use chrono::{NaiveDate, NaiveTime};
use levelup_lib::db::{NewEvent, NewGame};
use levelup_lib::entity::{auth_token, event, event_gamer, game, game_type, gamer, user};
use levelup_lib::error::AppError;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::test_helpers::*;

fn new_event(game_id: i32) -> NewEvent {
    NewEvent {
        game_id,
        description: "Late arrival".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
    }
}

/// Removing a gamer takes its games, organized events and registrations.
#[actix_rt::test]
async fn test_delete_gamer_cascades() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let alice = register_gamer(&app, "alice").await;
    let bob = register_gamer(&app, "bob").await;
    let alice_id = gamer_id(&app, &alice).await as i32;

    let alice_game = create_game(&app, &alice, "Catan").await as i32;
    let alice_event = create_event(&app, &alice, alice_game as i64, "2024-05-01", "19:00").await;
    let bob_game = create_game(&app, &bob, "Chess").await;
    let bob_event = create_event(&app, &bob, bob_game, "2024-05-02", "19:00").await;
    // Alice organizes on Bob's game too
    let alice_on_bob_game = create_event(&app, &alice, bob_game, "2024-05-03", "19:00").await;

    for (token, event_id) in [(&bob, alice_event), (&alice, bob_event)] {
        let req = test::TestRequest::post()
            .uri(&format!("/events/{}/signup", event_id))
            .insert_header(auth(token))
            .to_request();
        assert_eq!(send(&app, req).await.0, 201);
    }

    let conn = pool.connection();
    gamer::Entity::delete_by_id(alice_id)
        .exec(conn)
        .await
        .unwrap();

    assert!(game::Entity::find_by_id(alice_game).one(conn).await.unwrap().is_none());
    for gone in [alice_event, alice_on_bob_game] {
        assert!(event::Entity::find_by_id(gone as i32).one(conn).await.unwrap().is_none());
    }
    assert!(event::Entity::find_by_id(bob_event as i32).one(conn).await.unwrap().is_some());

    let alice_registrations = event_gamer::Entity::find()
        .filter(event_gamer::Column::GamerId.eq(alice_id))
        .count(conn)
        .await
        .unwrap();
    assert_eq!(alice_registrations, 0);
    assert_eq!(event_gamer::Entity::find().count(conn).await.unwrap(), 0);
}

/// Removing a user takes its gamer and session tokens.
#[actix_rt::test]
async fn test_delete_user_cascades() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(serde_json::json!({ "username": "alice", "password": "correct-horse" }))
        .to_request();
    assert_eq!(send(&app, req).await.0, 200);

    let conn = pool.connection();
    let account = pool.find_user_by_username("alice").await.unwrap().unwrap();
    assert_eq!(auth_token::Entity::find().count(conn).await.unwrap(), 2);

    user::Entity::delete_by_id(account.id).exec(conn).await.unwrap();

    assert_eq!(gamer::Entity::find().count(conn).await.unwrap(), 0);
    assert_eq!(auth_token::Entity::find().count(conn).await.unwrap(), 0);

    let req = test::TestRequest::get()
        .uri("/profile")
        .insert_header(auth(&token))
        .to_request();
    assert_eq!(send(&app, req).await.0, 401);
}

/// Removing a game type takes the games of that type.
#[actix_rt::test]
async fn test_delete_game_type_cascades() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let board_game = create_game(&app, &token, "Catan").await as i32;

    let conn = pool.connection();
    let result = game_type::Entity::delete_by_id(1).exec(conn).await.unwrap();
    assert_eq!(result.rows_affected, 1);

    assert!(game::Entity::find_by_id(board_game).one(conn).await.unwrap().is_none());
    assert_eq!(game_type::Entity::find().count(conn).await.unwrap(), 3);
}

/// A join whose event vanished after the lookup is reported as missing.
#[actix_rt::test]
async fn test_registration_for_deleted_event_is_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let me = gamer_id(&app, &token).await as i32;

    let result = pool.insert_registration(4242, me).await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref what)) if what == "Event 4242"),
        "{:?}",
        result
    );
    assert_eq!(event_gamer::Entity::find().count(pool.connection()).await.unwrap(), 0);
}

/// An event whose game vanished after the lookup is reported as missing.
#[actix_rt::test]
async fn test_event_for_deleted_game_is_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let me = gamer_id(&app, &token).await as i32;

    let result = pool.insert_event(me, new_event(4242)).await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref what)) if what == "Game 4242"),
        "{:?}",
        result
    );
    assert!(pool.list_events(&Default::default()).await.unwrap().is_empty());
}

/// A game whose type vanished after the lookup is reported as missing.
#[actix_rt::test]
async fn test_game_for_deleted_type_is_not_found() {
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let token = register_gamer(&app, "alice").await;
    let me = gamer_id(&app, &token).await as i32;

    let result = pool
        .insert_game(
            me,
            NewGame {
                title: "Mystery".to_string(),
                maker: "Nobody".to_string(),
                skill_level: 1,
                number_of_players: 2,
                game_type_id: 99,
            },
        )
        .await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref what)) if what == "Game type 99"),
        "{:?}",
        result
    );
}
