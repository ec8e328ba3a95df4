pub mod config;
pub mod database;
pub mod entity;
pub mod relations;

pub use config::DatabaseConfig;
pub use database::init_db;
