use std::fmt::Write;

use axum::{
    extract::{Path, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{Html, IntoResponse, Redirect},
};

use crate::errors::AppError;
use crate::loader::{LoadState, Loader};
use crate::page::Page;
use crate::render::toc::activate;
use crate::state::AppState;

/// GET /
/// Loads the document and renders a fresh page. A failed load still answers
/// 200 with the error message in the name region.
pub async fn handle_page(State(state): State<AppState>) -> impl IntoResponse {
    let mut page = Page::new();
    let mut loader = Loader::new(state.source.clone());
    loader.load(&mut page).await;
    if loader.state() == LoadState::Failed {
        tracing::debug!("Serving page in failed state");
    }

    let theme = *state.theme.read().await;
    ([(CACHE_CONTROL, "no-store")], Html(page.to_html(theme)))
}

/// GET /section/:name
/// Deep link to a section. Redirects to its anchor on the page, or to the top
/// when no rendered section matches.
pub async fn handle_section(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Redirect {
    let mut page = Page::new();
    Loader::new(state.source.clone()).load(&mut page).await;

    match activate(&page, &name).and_then(|target| target.id()) {
        Some(id) => Redirect::to(&format!("/#{}", encode_fragment(id))),
        None => {
            tracing::debug!("No section matches '{name}'");
            Redirect::to("/")
        }
    }
}

/// Percent-encodes everything outside printable ASCII so the id is a valid
/// `Location` header value.
fn encode_fragment(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for byte in id.bytes() {
        if byte.is_ascii_graphic() && byte != b'%' {
            out.push(byte as char);
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// GET /data.json
/// Serves the local document uncached.
pub async fn handle_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let path = &state.config.data_path;
    let body = match tokio::fs::read(path).await {
        Ok(body) => body,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("{} not found", path.display())));
        }
        Err(e) => {
            return Err(AppError::Internal(
                anyhow::Error::new(e).context(format!("reading {}", path.display())),
            ));
        }
    };

    Ok((
        [(CONTENT_TYPE, "application/json"), (CACHE_CONTROL, "no-store")],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_fragment_keeps_ascii_ids() {
        assert_eq!(encode_fragment("section-work-experience"), "section-work-experience");
    }

    #[test]
    fn test_encode_fragment_escapes_non_ascii() {
        assert_eq!(encode_fragment("section-résumé"), "section-r%C3%A9sum%C3%A9");
        assert_eq!(encode_fragment("section-100%"), "section-100%25");
    }
}
