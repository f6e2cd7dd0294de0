pub mod app;
pub mod config;
pub mod errors;
pub mod filter;
pub mod habits;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod state;
pub mod stats;
pub mod theme;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use habits::HabitStore;
pub use seed::load_store;
pub use state::AppState;
