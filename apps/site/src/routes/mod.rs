pub mod health;
pub mod page;
pub mod theme;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/data.json", get(page::handle_data))
        .route("/section/:name", get(page::handle_section))
        .route("/health", get(health::health_handler))
        .route("/api/v1/theme", get(theme::handle_get_theme))
        .route("/theme/toggle", post(theme::handle_toggle_theme))
        .with_state(state)
}
