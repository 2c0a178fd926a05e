pub mod config;
pub mod db;
pub mod graphql;
pub mod permissions;
pub mod routes;
pub mod types;
pub mod utils;
