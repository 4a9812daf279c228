pub mod discovery;
pub mod favorite;
pub mod health;
pub mod person;
pub mod planet;
pub mod user;

use serde::Serialize;

/// Confirmation body for deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
