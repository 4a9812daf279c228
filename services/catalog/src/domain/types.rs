use crate::error::CatalogServiceError;

/// A person in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub birth_year: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
}

/// A validated person awaiting insertion.
#[derive(Debug, Clone, Default)]
pub struct NewPerson {
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub birth_year: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
}

/// Partial update for a person. `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub height: Option<Option<i32>>,
    pub mass: Option<Option<i32>>,
    pub birth_year: Option<Option<String>>,
    pub hair_color: Option<Option<String>>,
    pub skin_color: Option<Option<String>>,
    pub eye_color: Option<Option<String>>,
    pub gender: Option<Option<String>>,
}

impl NewPerson {
    pub fn validate(&self) -> Result<(), CatalogServiceError> {
        if !validate_name(&self.name) {
            return Err(CatalogServiceError::MissingName);
        }
        check_len("name", Some(self.name.as_str()), limits::NAME)?;
        check_len("birth_year", self.birth_year.as_deref(), limits::SHORT)?;
        check_len("hair_color", self.hair_color.as_deref(), limits::COLOR)?;
        check_len("skin_color", self.skin_color.as_deref(), limits::COLOR)?;
        check_len("eye_color", self.eye_color.as_deref(), limits::COLOR)?;
        check_len("gender", self.gender.as_deref(), limits::SHORT)
    }
}

impl PersonChanges {
    pub fn validate(&self) -> Result<(), CatalogServiceError> {
        if self.name.as_deref().is_some_and(|name| !validate_name(name)) {
            return Err(CatalogServiceError::MissingName);
        }
        check_len("name", self.name.as_deref(), limits::NAME)?;
        check_len("birth_year", flat(&self.birth_year), limits::SHORT)?;
        check_len("hair_color", flat(&self.hair_color), limits::COLOR)?;
        check_len("skin_color", flat(&self.skin_color), limits::COLOR)?;
        check_len("eye_color", flat(&self.eye_color), limits::COLOR)?;
        check_len("gender", flat(&self.gender), limits::SHORT)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.height.is_none()
            && self.mass.is_none()
            && self.birth_year.is_none()
            && self.hair_color.is_none()
            && self.skin_color.is_none()
            && self.eye_color.is_none()
            && self.gender.is_none()
    }
}

/// A planet in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub surface_water: Option<i32>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

/// A validated planet awaiting insertion.
#[derive(Debug, Clone, Default)]
pub struct NewPlanet {
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub surface_water: Option<i32>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

/// Partial update for a planet. `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub diameter: Option<Option<i32>>,
    pub rotation_period: Option<Option<i32>>,
    pub orbital_period: Option<Option<i32>>,
    pub gravity: Option<Option<String>>,
    pub population: Option<Option<i64>>,
    pub surface_water: Option<Option<i32>>,
    pub climate: Option<Option<String>>,
    pub terrain: Option<Option<String>>,
}

impl NewPlanet {
    pub fn validate(&self) -> Result<(), CatalogServiceError> {
        if !validate_name(&self.name) {
            return Err(CatalogServiceError::MissingName);
        }
        check_len("name", Some(self.name.as_str()), limits::NAME)?;
        check_len("gravity", self.gravity.as_deref(), limits::GRAVITY)?;
        check_len("climate", self.climate.as_deref(), limits::NAME)?;
        check_len("terrain", self.terrain.as_deref(), limits::NAME)
    }
}

impl PlanetChanges {
    pub fn validate(&self) -> Result<(), CatalogServiceError> {
        if self.name.as_deref().is_some_and(|name| !validate_name(name)) {
            return Err(CatalogServiceError::MissingName);
        }
        check_len("name", self.name.as_deref(), limits::NAME)?;
        check_len("gravity", flat(&self.gravity), limits::GRAVITY)?;
        check_len("climate", flat(&self.climate), limits::NAME)?;
        check_len("terrain", flat(&self.terrain), limits::NAME)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.diameter.is_none()
            && self.rotation_period.is_none()
            && self.orbital_period.is_none()
            && self.gravity.is_none()
            && self.population.is_none()
            && self.surface_water.is_none()
            && self.climate.is_none()
            && self.terrain.is_none()
    }
}

/// Identity record favorites are attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
}

/// Which catalog entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Person,
    Planet,
}

impl FavoriteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Planet => "planet",
        }
    }
}

/// Reference to the target of a favorite: exactly one entity of exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Person(i32),
    Planet(i32),
}

impl FavoriteTarget {
    pub fn new(kind: FavoriteKind, id: i32) -> Self {
        match kind {
            FavoriteKind::Person => Self::Person(id),
            FavoriteKind::Planet => Self::Planet(id),
        }
    }

    pub fn kind(self) -> FavoriteKind {
        match self {
            Self::Person(_) => FavoriteKind::Person,
            Self::Planet(_) => FavoriteKind::Planet,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            Self::Person(id) | Self::Planet(id) => id,
        }
    }
}

/// The live entity a favorite resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteItem {
    Person(Person),
    Planet(Planet),
}

impl FavoriteItem {
    pub fn target(&self) -> FavoriteTarget {
        match self {
            Self::Person(p) => FavoriteTarget::Person(p.id),
            Self::Planet(p) => FavoriteTarget::Planet(p.id),
        }
    }
}

/// A user's favorite together with its resolved target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub item: FavoriteItem,
}

impl Favorite {
    pub fn kind(&self) -> FavoriteKind {
        self.item.target().kind()
    }

    pub fn target(&self) -> FavoriteTarget {
        self.item.target()
    }
}

/// Column widths, in characters.
pub mod limits {
    pub const NAME: usize = 120;
    pub const EMAIL: usize = 120;
    pub const COLOR: usize = 50;
    pub const GRAVITY: usize = 40;
    pub const SHORT: usize = 20;
}

fn flat(change: &Option<Option<String>>) -> Option<&str> {
    change.as_ref().and_then(|v| v.as_deref())
}

fn check_len(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), CatalogServiceError> {
    match value {
        Some(v) if v.chars().count() > max => Err(CatalogServiceError::FieldTooLong { field, max }),
        _ => Ok(()),
    }
}

/// Catalog names must contain at least one non-whitespace character.
pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Loose email check for seeded users: `local@domain`, at most 120 chars.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.chars().count() > limits::EMAIL {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}
