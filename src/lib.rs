pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod observability;
pub mod query;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;
