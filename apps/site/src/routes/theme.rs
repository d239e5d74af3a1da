use axum::{extract::State, response::Redirect, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::theme::Theme;

#[derive(Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = *state.theme.read().await;
    Json(ThemeResponse { theme })
}

/// POST /theme/toggle
/// Flips the preference, persists it, and sends the browser back to the page.
pub async fn handle_toggle_theme(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mut current = state.theme.write().await;
    let next = current.toggled();

    let store = state.theme_store.clone();
    tokio::task::spawn_blocking(move || store.save(next))
        .await
        .map_err(anyhow::Error::from)??;

    *current = next;
    info!("Theme switched to {next}");
    Ok(Redirect::to("/"))
}
