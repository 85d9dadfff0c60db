pub mod app_state;
pub mod config;
pub mod models;
pub mod rate_limit;
pub mod routes;

pub use app_state::AppState;
pub use config::Config;
