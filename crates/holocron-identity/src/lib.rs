//! Caller identity shared by Holocron services.

pub mod identity;
