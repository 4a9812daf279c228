pub mod db;
pub mod favorites;
