use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel as _, QueryOrder, TransactionTrait, Value,
};

use holocron_catalog_schema::{people, planets, users};
use holocron_core::sea_ext::ConstraintViolation as _;

use crate::domain::repository::{PersonRepository, PlanetRepository, UserRepository};
use crate::domain::types::{
    FavoriteTarget, NewPerson, NewPlanet, Person, PersonChanges, Planet, PlanetChanges, User,
};
use crate::error::CatalogServiceError;
use crate::infra::favorites::purge_target;

/// Overwrite `slot` when a change is present.
fn apply<V>(slot: &mut ActiveValue<V>, change: Option<&V>)
where
    V: Into<Value> + Clone,
{
    if let Some(value) = change {
        *slot = Set(value.clone());
    }
}

fn update_error(err: DbErr, what: &'static str) -> Result<(), CatalogServiceError> {
    match err {
        DbErr::RecordNotUpdated => Ok(()),
        e => Err(anyhow::Error::new(e).context(what).into()),
    }
}

// ── Person repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPersonRepository {
    pub db: DatabaseConnection,
}

impl PersonRepository for DbPersonRepository {
    async fn list(&self) -> Result<Vec<Person>, CatalogServiceError> {
        let models = people::Entity::find()
            .order_by_asc(people::Column::Id)
            .all(&self.db)
            .await
            .context("list people")?;
        Ok(models.into_iter().map(person_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, CatalogServiceError> {
        let model = people::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find person by id")?;
        Ok(model.map(person_from_model))
    }

    async fn create(&self, person: &NewPerson) -> Result<Person, CatalogServiceError> {
        let model = people::ActiveModel {
            name: Set(person.name.clone()),
            height: Set(person.height),
            mass: Set(person.mass),
            birth_year: Set(person.birth_year.clone()),
            hair_color: Set(person.hair_color.clone()),
            skin_color: Set(person.skin_color.clone()),
            eye_color: Set(person.eye_color.clone()),
            gender: Set(person.gender.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create person")?;
        Ok(person_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: &PersonChanges,
    ) -> Result<Option<Person>, CatalogServiceError> {
        let Some(model) = people::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find person for update")?
        else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(person_from_model(model)));
        }

        let mut person = model.into_active_model();
        apply(&mut person.name, changes.name.as_ref());
        apply(&mut person.height, changes.height.as_ref());
        apply(&mut person.mass, changes.mass.as_ref());
        apply(&mut person.birth_year, changes.birth_year.as_ref());
        apply(&mut person.hair_color, changes.hair_color.as_ref());
        apply(&mut person.skin_color, changes.skin_color.as_ref());
        apply(&mut person.eye_color, changes.eye_color.as_ref());
        apply(&mut person.gender, changes.gender.as_ref());

        match person.update(&self.db).await {
            Ok(model) => Ok(Some(person_from_model(model))),
            // deleted between the lookup and the update
            Err(e) => update_error(e, "update person").map(|()| None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let deleted = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    let favorites = purge_target(txn, FavoriteTarget::Person(id)).await?;
                    let result = people::Entity::delete_by_id(id).exec(txn).await?;
                    tracing::debug!(person_id = id, favorites, "cascaded person favorites");
                    Ok(result.rows_affected)
                })
            })
            .await
            .context("delete person")?;
        Ok(deleted > 0)
    }
}

pub(crate) fn person_from_model(model: people::Model) -> Person {
    Person {
        id: model.id,
        name: model.name,
        height: model.height,
        mass: model.mass,
        birth_year: model.birth_year,
        hair_color: model.hair_color,
        skin_color: model.skin_color,
        eye_color: model.eye_color,
        gender: model.gender,
    }
}

// ── Planet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanetRepository {
    pub db: DatabaseConnection,
}

impl PlanetRepository for DbPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, CatalogServiceError> {
        let models = planets::Entity::find()
            .order_by_asc(planets::Column::Id)
            .all(&self.db)
            .await
            .context("list planets")?;
        Ok(models.into_iter().map(planet_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, CatalogServiceError> {
        let model = planets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet by id")?;
        Ok(model.map(planet_from_model))
    }

    async fn create(&self, planet: &NewPlanet) -> Result<Planet, CatalogServiceError> {
        let model = planets::ActiveModel {
            name: Set(planet.name.clone()),
            diameter: Set(planet.diameter),
            rotation_period: Set(planet.rotation_period),
            orbital_period: Set(planet.orbital_period),
            gravity: Set(planet.gravity.clone()),
            population: Set(planet.population),
            surface_water: Set(planet.surface_water),
            climate: Set(planet.climate.clone()),
            terrain: Set(planet.terrain.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create planet")?;
        Ok(planet_from_model(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: &PlanetChanges,
    ) -> Result<Option<Planet>, CatalogServiceError> {
        let Some(model) = planets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet for update")?
        else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(planet_from_model(model)));
        }

        let mut planet = model.into_active_model();
        apply(&mut planet.name, changes.name.as_ref());
        apply(&mut planet.diameter, changes.diameter.as_ref());
        apply(&mut planet.rotation_period, changes.rotation_period.as_ref());
        apply(&mut planet.orbital_period, changes.orbital_period.as_ref());
        apply(&mut planet.gravity, changes.gravity.as_ref());
        apply(&mut planet.population, changes.population.as_ref());
        apply(&mut planet.surface_water, changes.surface_water.as_ref());
        apply(&mut planet.climate, changes.climate.as_ref());
        apply(&mut planet.terrain, changes.terrain.as_ref());

        match planet.update(&self.db).await {
            Ok(model) => Ok(Some(planet_from_model(model))),
            Err(e) => update_error(e, "update planet").map(|()| None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let deleted = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    let favorites = purge_target(txn, FavoriteTarget::Planet(id)).await?;
                    let result = planets::Entity::delete_by_id(id).exec(txn).await?;
                    tracing::debug!(planet_id = id, favorites, "cascaded planet favorites");
                    Ok(result.rows_affected)
                })
            })
            .await
            .context("delete planet")?;
        Ok(deleted > 0)
    }
}

pub(crate) fn planet_from_model(model: planets::Model) -> Planet {
    Planet {
        id: model.id,
        name: model.name,
        diameter: model.diameter,
        rotation_period: model.rotation_period,
        orbital_period: model.orbital_period,
        gravity: model.gravity,
        population: model.population,
        surface_water: model.surface_water,
        climate: model.climate,
        terrain: model.terrain,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, CatalogServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_first(&self) -> Result<Option<User>, CatalogServiceError> {
        let model = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .one(&self.db)
            .await
            .context("find first user")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, email: &str) -> Result<User, CatalogServiceError> {
        let result = users::ActiveModel {
            email: Set(email.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(user_from_model(model)),
            Err(e) if e.is_unique_violation() => Err(CatalogServiceError::EmailAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
    }
}
