//! sea-orm entities for the catalog service.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
