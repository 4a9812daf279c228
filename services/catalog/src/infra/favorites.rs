//! Persistence for the favorite association.
//!
//! The domain speaks `FavoriteTarget`; the table stores a discriminator plus two
//! nullable foreign keys. Flattening and unflattening happen only in this module,
//! so no other code can build a row whose discriminator disagrees with its keys.

use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use holocron_catalog_schema::favorites::{self, ItemType};
use holocron_catalog_schema::{people, planets, users};
use holocron_core::sea_ext::{ConstraintViolation as _, flatten_transaction_error};

use crate::domain::repository::FavoriteRepository;
use crate::domain::types::{Favorite, FavoriteItem, FavoriteTarget, Person, Planet};
use crate::error::CatalogServiceError;
use crate::infra::db::{person_from_model, planet_from_model};

/// Row columns for a target: `(item_type, person_id, planet_id)`.
pub(crate) fn flatten(target: FavoriteTarget) -> (ItemType, Option<i32>, Option<i32>) {
    match target {
        FavoriteTarget::Person(id) => (ItemType::Person, Some(id), None),
        FavoriteTarget::Planet(id) => (ItemType::Planet, None, Some(id)),
    }
}

/// Target of a stored row, or `None` if the row is inconsistent.
pub(crate) fn unflatten(model: &favorites::Model) -> Option<FavoriteTarget> {
    match (model.item_type, model.person_id, model.planet_id) {
        (ItemType::Person, Some(id), None) => Some(FavoriteTarget::Person(id)),
        (ItemType::Planet, None, Some(id)) => Some(FavoriteTarget::Planet(id)),
        _ => None,
    }
}

fn target_condition(target: FavoriteTarget) -> Condition {
    let (item_type, person_id, planet_id) = flatten(target);
    let condition = Condition::all().add(favorites::Column::ItemType.eq(item_type));
    match (person_id, planet_id) {
        (Some(id), _) => condition.add(favorites::Column::PersonId.eq(id)),
        (_, Some(id)) => condition.add(favorites::Column::PlanetId.eq(id)),
        (None, None) => condition,
    }
}

/// Delete every favorite pointing at `target` on the given connection.
///
/// Entity deletes call this inside their own transaction so the cascade commits
/// or rolls back together with the entity row.
pub(crate) async fn purge_target<C: ConnectionTrait>(
    conn: &C,
    target: FavoriteTarget,
) -> Result<u64, DbErr> {
    let result = favorites::Entity::delete_many()
        .filter(target_condition(target))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Delete every favorite owned by `user_id` on the given connection.
pub(crate) async fn purge_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<u64, DbErr> {
    let result = favorites::Entity::delete_many()
        .filter(favorites::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

async fn load_item<C: ConnectionTrait>(
    conn: &C,
    target: FavoriteTarget,
) -> Result<Option<FavoriteItem>, DbErr> {
    let item = match target {
        FavoriteTarget::Person(id) => people::Entity::find_by_id(id)
            .one(conn)
            .await?
            .map(|m| FavoriteItem::Person(person_from_model(m))),
        FavoriteTarget::Planet(id) => planets::Entity::find_by_id(id)
            .one(conn)
            .await?
            .map(|m| FavoriteItem::Planet(planet_from_model(m))),
    };
    Ok(item)
}

fn target_not_found(target: FavoriteTarget) -> CatalogServiceError {
    match target {
        FavoriteTarget::Person(_) => CatalogServiceError::PersonNotFound,
        FavoriteTarget::Planet(_) => CatalogServiceError::PlanetNotFound,
    }
}

fn add_error(err: DbErr, target: FavoriteTarget) -> CatalogServiceError {
    if err.is_unique_violation() {
        return CatalogServiceError::FavoriteAlreadyExists;
    }
    // target removed after the caller resolved it
    if err.is_foreign_key_violation() || matches!(err, DbErr::RecordNotFound(_)) {
        return target_not_found(target);
    }
    anyhow::Error::new(err).context("add favorite").into()
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl DbFavoriteRepository {
    async fn user_exists(&self, user_id: i32) -> Result<bool, CatalogServiceError> {
        let user = users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("load favorite owner")?;
        Ok(user.is_some())
    }
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<Favorite>, CatalogServiceError> {
        self.db
            .transaction::<_, Vec<Favorite>, DbErr>(|txn| {
                Box::pin(async move {
                    let rows = favorites::Entity::find()
                        .filter(favorites::Column::UserId.eq(user_id))
                        .order_by_asc(favorites::Column::Id)
                        .all(txn)
                        .await?;

                    let person_ids: Vec<i32> = rows.iter().filter_map(|r| r.person_id).collect();
                    let planet_ids: Vec<i32> = rows.iter().filter_map(|r| r.planet_id).collect();

                    let people: HashMap<i32, Person> = if person_ids.is_empty() {
                        HashMap::new()
                    } else {
                        people::Entity::find()
                            .filter(people::Column::Id.is_in(person_ids))
                            .all(txn)
                            .await?
                            .into_iter()
                            .map(|m| (m.id, person_from_model(m)))
                            .collect()
                    };
                    let planets: HashMap<i32, Planet> = if planet_ids.is_empty() {
                        HashMap::new()
                    } else {
                        planets::Entity::find()
                            .filter(planets::Column::Id.is_in(planet_ids))
                            .all(txn)
                            .await?
                            .into_iter()
                            .map(|m| (m.id, planet_from_model(m)))
                            .collect()
                    };

                    let mut resolved = Vec::with_capacity(rows.len());
                    for row in rows {
                        let item = match unflatten(&row) {
                            Some(FavoriteTarget::Person(id)) => {
                                people.get(&id).cloned().map(FavoriteItem::Person)
                            }
                            Some(FavoriteTarget::Planet(id)) => {
                                planets.get(&id).cloned().map(FavoriteItem::Planet)
                            }
                            None => {
                                tracing::warn!(favorite_id = row.id, "inconsistent favorite row");
                                None
                            }
                        };
                        if let Some(item) = item {
                            resolved.push(Favorite {
                                id: row.id,
                                user_id: row.user_id,
                                item,
                            });
                        }
                    }
                    Ok(resolved)
                })
            })
            .await
            .context("list favorites for user")
            .map_err(Into::into)
    }

    async fn add(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Favorite, CatalogServiceError> {
        let (item_type, person_id, planet_id) = flatten(target);
        let result = self
            .db
            .transaction::<_, Favorite, DbErr>(|txn| {
                Box::pin(async move {
                    let row = favorites::ActiveModel {
                        user_id: Set(user_id),
                        item_type: Set(item_type),
                        person_id: Set(person_id),
                        planet_id: Set(planet_id),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;
                    let item = load_item(txn, target).await?.ok_or_else(|| {
                        DbErr::RecordNotFound(format!("favorite target {target:?}"))
                    })?;
                    Ok(Favorite {
                        id: row.id,
                        user_id: row.user_id,
                        item,
                    })
                })
            })
            .await
            .map_err(flatten_transaction_error);

        let err = match result {
            Ok(favorite) => return Ok(favorite),
            Err(err) => err,
        };
        // both foreign keys share one error; tell them apart by the owner row
        if err.is_foreign_key_violation() && !self.user_exists(user_id).await? {
            return Err(CatalogServiceError::UserNotFound);
        }
        Err(add_error(err, target))
    }

    async fn remove(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<bool, CatalogServiceError> {
        let result = favorites::Entity::delete_many()
            .filter(favorites::Column::UserId.eq(user_id))
            .filter(target_condition(target))
            .exec(&self.db)
            .await
            .context("remove favorite")?;
        Ok(result.rows_affected > 0)
    }

    async fn cascade_on_target_deleted(
        &self,
        target: FavoriteTarget,
    ) -> Result<u64, CatalogServiceError> {
        let deleted = purge_target(&self.db, target)
            .await
            .context("delete favorites for target")?;
        Ok(deleted)
    }

    async fn cascade_on_user_deleted(&self, user_id: i32) -> Result<u64, CatalogServiceError> {
        let deleted = purge_user(&self.db, user_id)
            .await
            .context("delete favorites for user")?;
        Ok(deleted)
    }
}
