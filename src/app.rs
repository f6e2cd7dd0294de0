use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/habits/:id/toggle", post(handlers::toggle_habit))
        .route("/category/:key", post(handlers::select_category))
        .route("/api/habits", get(handlers::list_habits))
        .route("/api/habits/:id/toggle", post(handlers::api_toggle))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/category", get(handlers::get_category).post(handlers::set_category))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
