use std::collections::HashSet;

use axum::http::StatusCode;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};
use serde_json::Value;

use holocron_catalog::domain::repository::FavoriteRepository;
use holocron_catalog::domain::types::FavoriteTarget;
use holocron_catalog_schema::favorites::{self, ItemType};
use holocron_catalog_schema::users;

use crate::helpers::{TestApp, spawn_app, user_header, user_id_name};

fn assert_rows_consistent(rows: &[favorites::Model]) {
    for row in rows {
        match row.item_type {
            ItemType::Person => {
                assert!(row.person_id.is_some(), "{row:?}");
                assert!(row.planet_id.is_none(), "{row:?}");
            }
            ItemType::Planet => {
                assert!(row.planet_id.is_some(), "{row:?}");
                assert!(row.person_id.is_none(), "{row:?}");
            }
        }
    }
}

async fn insert_raw(
    app: &TestApp,
    user_id: i32,
    item_type: ItemType,
    person_id: Option<i32>,
    planet_id: Option<i32>,
) -> Result<favorites::Model, sea_orm::DbErr> {
    favorites::ActiveModel {
        user_id: Set(user_id),
        item_type: Set(item_type),
        person_id: Set(person_id),
        planet_id: Set(planet_id),
        ..Default::default()
    }
    .insert(app.db())
    .await
}

// ── Add / remove over HTTP ───────────────────────────────────────────────────

#[tokio::test]
async fn should_run_tatooine_scenario() {
    let app = spawn_app().await;
    let user = app.seed_user("jose@canusee.com").await;
    assert_eq!(user.id, 1);

    let planet_id = app.create_planet("Tatooine").await;
    assert_eq!(planet_id, 1);

    let response = app.favorite_planet(1, planet_id).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let favorite: Value = response.json();
    assert_eq!(favorite["user_id"], 1);
    assert_eq!(favorite["item_type"], "planet");
    assert_eq!(favorite["planet"]["id"], 1);
    assert_eq!(favorite["planet"]["name"], "Tatooine");
    assert!(favorite.get("person").is_none());

    let response = app.server.delete(&format!("/planets/{planet_id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    assert!(app.favorites_of(1).await.is_empty());
    assert_eq!(app.favorite_count().await, 0);
}

#[tokio::test]
async fn should_reject_duplicate_favorite_with_409() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    for name in ["Tatooine", "Alderaan", "Yavin IV", "Hoth", "Dagobah"] {
        app.create_planet(name).await;
    }

    let first = app.favorite_planet(1, 5).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = app.favorite_planet(1, 5).await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let error: Value = second.json();
    assert_eq!(error["kind"], "FAVORITE_ALREADY_EXISTS");
    assert_eq!(error["message"], "favorite already exists");

    assert_eq!(app.favorite_count().await, 1);
}

#[tokio::test]
async fn should_return_404_for_missing_target() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;

    let response = app.favorite_planet(1, 9).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["kind"], "PLANET_NOT_FOUND");

    let response = app.favorite_person(1, 9).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["kind"], "PERSON_NOT_FOUND");

    assert_eq!(app.favorite_count().await, 0);
}

#[tokio::test]
async fn should_return_404_when_removing_unknown_favorite() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    let planet_id = app.create_planet("Bespin").await;

    let response = app
        .server
        .delete(&format!("/favorite/planet/{planet_id}"))
        .add_header(user_id_name(), user_header(1))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["kind"], "FAVORITE_NOT_FOUND");
}

#[tokio::test]
async fn should_remove_favorite() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    let person_id = app.create_person("Lando Calrissian").await;
    app.favorite_person(1, person_id).await;

    let response = app
        .server
        .delete(&format!("/favorite/people/{person_id}"))
        .add_header(user_id_name(), user_header(1))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["msg"].is_string());
    assert_eq!(app.favorite_count().await, 0);

    // the person itself is untouched
    let response = app.server.get(&format!("/people/{person_id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_keep_person_and_planet_with_same_id_apart() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    let person_id = app.create_person("Wedge Antilles").await;
    let planet_id = app.create_planet("Corellia").await;
    assert_eq!(person_id, planet_id);

    assert_eq!(
        app.favorite_person(1, person_id).await.status_code(),
        StatusCode::CREATED
    );
    assert_eq!(
        app.favorite_planet(1, planet_id).await.status_code(),
        StatusCode::CREATED
    );

    let response = app
        .server
        .delete(&format!("/favorite/planet/{planet_id}"))
        .add_header(user_id_name(), user_header(1))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let favorites = app.favorites_of(1).await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["item_type"], "person");
    assert_eq!(favorites[0]["person"]["name"], "Wedge Antilles");
}

#[tokio::test]
async fn should_list_favorites_in_ascending_order() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    let hoth = app.create_planet("Hoth").await;
    let yoda = app.create_person("Yoda").await;
    let endor = app.create_planet("Endor").await;

    app.favorite_planet(1, endor).await;
    app.favorite_person(1, yoda).await;
    app.favorite_planet(1, hoth).await;

    let favorites = app.favorites_of(1).await;
    let ids: Vec<i64> = favorites.iter().map(|f| f["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(favorites.len(), 3);
    assert_eq!(favorites[0]["planet"]["name"], "Endor");
    assert_eq!(favorites[1]["person"]["name"], "Yoda");
    assert_eq!(favorites[2]["planet"]["name"], "Hoth");
}

#[tokio::test]
async fn should_scope_favorites_to_user() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    app.seed_user("mara@canusee.com").await;
    let planet_id = app.create_planet("Naboo").await;

    assert_eq!(
        app.favorite_planet(1, planet_id).await.status_code(),
        StatusCode::CREATED
    );
    assert_eq!(
        app.favorite_planet(2, planet_id).await.status_code(),
        StatusCode::CREATED
    );

    let mine = app.favorites_of(2).await;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["user_id"], 2);
}

// ── Cascades ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_cascade_exactly_the_target_favorites_on_delete() {
    let app = spawn_app().await;
    for email in ["a@canusee.com", "b@canusee.com", "c@canusee.com"] {
        app.seed_user(email).await;
    }
    let doomed = app.create_planet("Alderaan").await;
    let kept = app.create_planet("Dantooine").await;
    let person = app.create_person("Bail Organa").await;

    for user_id in 1..=3 {
        app.favorite_planet(user_id, doomed).await;
    }
    app.favorite_planet(1, kept).await;
    app.favorite_person(2, person).await;
    assert_eq!(app.favorite_count().await, 5);

    let response = app.server.delete(&format!("/planets/{doomed}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let rows = app.favorite_rows().await;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.planet_id != Some(doomed)));
    assert_rows_consistent(&rows);
}

#[tokio::test]
async fn should_cascade_person_favorites_on_delete() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    let person = app.create_person("Greedo").await;
    app.favorite_person(1, person).await;

    let response = app.server.delete(&format!("/people/{person}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    assert_eq!(app.favorite_count().await, 0);
    assert!(app.favorites_of(1).await.is_empty());
}

#[tokio::test]
async fn should_cascade_through_repository() {
    let app = spawn_app().await;
    app.seed_user("a@canusee.com").await;
    app.seed_user("b@canusee.com").await;
    let planet = app.create_planet("Kashyyyk").await;
    let person = app.create_person("Tarfful").await;
    app.favorite_planet(1, planet).await;
    app.favorite_planet(2, planet).await;
    app.favorite_person(1, person).await;

    let repo = app.state.favorite_repo();
    let removed = repo
        .cascade_on_target_deleted(FavoriteTarget::Planet(planet))
        .await
        .unwrap();
    assert_eq!(removed, 2);

    let removed = repo.cascade_on_user_deleted(1).await.unwrap();
    assert_eq!(removed, 1);
    assert_eq!(app.favorite_count().await, 0);

    let removed = repo.cascade_on_user_deleted(1).await.unwrap();
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn should_cascade_in_schema_when_user_row_deleted() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    let planet = app.create_planet("Mustafar").await;
    app.favorite_planet(1, planet).await;

    users::Entity::delete_by_id(1).exec(app.db()).await.unwrap();

    assert_eq!(app.favorite_count().await, 0);
}

// ── Invariants ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_rows_consistent_under_add_remove_sequence() {
    let app = spawn_app().await;
    app.seed_user("a@canusee.com").await;
    app.seed_user("b@canusee.com").await;
    for name in ["Rey", "Finn", "Poe"] {
        app.create_person(name).await;
    }
    for name in ["Jakku", "Takodana", "Starkiller"] {
        app.create_planet(name).await;
    }

    // (add?, user, target); expected status per step
    let steps = [
        (true, 1, FavoriteTarget::Person(1), StatusCode::CREATED),
        (true, 1, FavoriteTarget::Planet(1), StatusCode::CREATED),
        (true, 2, FavoriteTarget::Person(1), StatusCode::CREATED),
        (true, 1, FavoriteTarget::Person(1), StatusCode::CONFLICT),
        (false, 1, FavoriteTarget::Planet(2), StatusCode::NOT_FOUND),
        (true, 1, FavoriteTarget::Planet(2), StatusCode::CREATED),
        (false, 1, FavoriteTarget::Person(1), StatusCode::OK),
        (true, 2, FavoriteTarget::Planet(3), StatusCode::CREATED),
        (false, 2, FavoriteTarget::Planet(1), StatusCode::NOT_FOUND),
        (true, 1, FavoriteTarget::Person(1), StatusCode::CREATED),
        (true, 2, FavoriteTarget::Person(3), StatusCode::CREATED),
        (false, 2, FavoriteTarget::Person(1), StatusCode::OK),
        (true, 1, FavoriteTarget::Planet(9), StatusCode::NOT_FOUND),
    ];

    for (step, (add, user_id, target, expected)) in steps.into_iter().enumerate() {
        let segment = match target {
            FavoriteTarget::Person(id) => format!("/favorite/people/{id}"),
            FavoriteTarget::Planet(id) => format!("/favorite/planet/{id}"),
        };
        let request = if add {
            app.server.post(&segment)
        } else {
            app.server.delete(&segment)
        };
        let response = request
            .add_header(user_id_name(), user_header(user_id))
            .await;
        assert_eq!(response.status_code(), expected, "step {step}");
        assert_rows_consistent(&app.favorite_rows().await);
    }

    let rows = app.favorite_rows().await;
    assert_eq!(rows.len(), 5);
}

fn row_key(row: &favorites::Model) -> (i32, FavoriteTarget) {
    let target = match row.item_type {
        ItemType::Person => FavoriteTarget::Person(row.person_id.unwrap()),
        ItemType::Planet => FavoriteTarget::Planet(row.planet_id.unwrap()),
    };
    (row.user_id, target)
}

fn target_path(target: FavoriteTarget) -> (String, String) {
    match target {
        FavoriteTarget::Person(id) => (format!("/favorite/people/{id}"), format!("/people/{id}")),
        FavoriteTarget::Planet(id) => (format!("/favorite/planet/{id}"), format!("/planets/{id}")),
    }
}

#[tokio::test]
async fn should_keep_rows_consistent_under_random_sequences() {
    const USERS: i32 = 3;
    const TARGETS: i32 = 3;
    const STEPS: usize = 80;

    for seed in 0..4u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let app = spawn_app().await;
        for n in 1..=USERS {
            app.seed_user(&format!("user{n}@canusee.com")).await;
        }
        let mut live = HashSet::new();
        for n in 1..=TARGETS {
            live.insert(FavoriteTarget::Person(app.create_person(&format!("Person {n}")).await));
            live.insert(FavoriteTarget::Planet(app.create_planet(&format!("Planet {n}")).await));
        }
        let mut model: HashSet<(i32, FavoriteTarget)> = HashSet::new();

        for step in 0..STEPS {
            // ids past the seeded range hit unknown users and targets
            let user_id = rng.random_range(1..=USERS + 1);
            let id = rng.random_range(1..=TARGETS + 2);
            let target = if rng.random_bool(0.5) {
                FavoriteTarget::Person(id)
            } else {
                FavoriteTarget::Planet(id)
            };
            let (favorite_path, entity_path) = target_path(target);
            let user_known = user_id <= USERS;
            let key = (user_id, target);

            let (response, expected) = match rng.random_range(0..10) {
                0 => {
                    let response = app.server.delete(&entity_path).await;
                    let expected = if live.remove(&target) {
                        model.retain(|(_, t)| *t != target);
                        StatusCode::OK
                    } else {
                        StatusCode::NOT_FOUND
                    };
                    (response, expected)
                }
                1..=5 => {
                    let response = app
                        .server
                        .post(&favorite_path)
                        .add_header(user_id_name(), user_header(user_id))
                        .await;
                    let expected = if !user_known || !live.contains(&target) {
                        StatusCode::NOT_FOUND
                    } else if model.insert(key) {
                        StatusCode::CREATED
                    } else {
                        StatusCode::CONFLICT
                    };
                    (response, expected)
                }
                _ => {
                    let response = app
                        .server
                        .delete(&favorite_path)
                        .add_header(user_id_name(), user_header(user_id))
                        .await;
                    let expected = if user_known && model.remove(&key) {
                        StatusCode::OK
                    } else {
                        StatusCode::NOT_FOUND
                    };
                    (response, expected)
                }
            };
            assert_eq!(response.status_code(), expected, "seed {seed} step {step} {key:?}");

            let rows = app.favorite_rows().await;
            assert_rows_consistent(&rows);
            let stored: HashSet<_> = rows.iter().map(row_key).collect();
            assert_eq!(stored.len(), rows.len(), "seed {seed} step {step}");
            assert_eq!(stored, model, "seed {seed} step {step}");
        }
    }
}

#[tokio::test]
async fn should_reject_inconsistent_rows_in_schema() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    let person = app.create_person("Jyn Erso").await;
    let planet = app.create_planet("Scarif").await;

    // discriminator disagrees with the populated column
    assert!(
        insert_raw(&app, 1, ItemType::Planet, Some(person), None)
            .await
            .is_err()
    );
    assert!(
        insert_raw(&app, 1, ItemType::Person, None, Some(planet))
            .await
            .is_err()
    );
    // both targets
    assert!(
        insert_raw(&app, 1, ItemType::Person, Some(person), Some(planet))
            .await
            .is_err()
    );
    // no target
    assert!(insert_raw(&app, 1, ItemType::Person, None, None).await.is_err());

    assert_eq!(app.favorite_count().await, 0);
}

#[tokio::test]
async fn should_enforce_uniqueness_in_schema() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    let planet = app.create_planet("Lothal").await;

    insert_raw(&app, 1, ItemType::Planet, None, Some(planet))
        .await
        .unwrap();
    assert!(
        insert_raw(&app, 1, ItemType::Planet, None, Some(planet))
            .await
            .is_err()
    );
    assert_eq!(app.favorite_count().await, 1);
}

#[tokio::test]
async fn should_reject_favorite_for_unknown_target_in_schema() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;

    assert!(
        insert_raw(&app, 1, ItemType::Planet, None, Some(404))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn should_map_repository_errors() {
    let app = spawn_app().await;
    app.seed_user("jose@canusee.com").await;
    let planet = app.create_planet("Ryloth").await;

    let repo = app.state.favorite_repo();
    repo.add(1, FavoriteTarget::Planet(planet)).await.unwrap();

    let duplicate = repo.add(1, FavoriteTarget::Planet(planet)).await;
    assert!(matches!(
        duplicate,
        Err(holocron_catalog::error::CatalogServiceError::FavoriteAlreadyExists)
    ));

    // skipping target resolution, the storage layer still refuses dangling targets
    let dangling = repo.add(1, FavoriteTarget::Person(77)).await;
    assert!(matches!(
        dangling,
        Err(holocron_catalog::error::CatalogServiceError::PersonNotFound)
    ));

    // an unknown owner is reported as such, not as a missing target
    let orphan = repo.add(42, FavoriteTarget::Planet(planet)).await;
    assert!(matches!(
        orphan,
        Err(holocron_catalog::error::CatalogServiceError::UserNotFound)
    ));
    let orphan = repo.add(42, FavoriteTarget::Person(77)).await;
    assert!(matches!(
        orphan,
        Err(holocron_catalog::error::CatalogServiceError::UserNotFound)
    ));
    assert_eq!(app.favorite_count().await, 1);
}
