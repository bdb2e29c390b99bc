use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use proof_cellars_shared::{render, sitemap, StaticPage};

use crate::state::AppState;

fn not_found(state: &AppState) -> Response {
    (StatusCode::NOT_FOUND, Html(render::render_not_found(state.site()))).into_response()
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET /
pub async fn homepage(State(state): State<AppState>) -> Response {
    Html(render::render_home_page(state.site(), state.snapshot().faqs())).into_response()
}

/// GET /sell
pub async fn sell_index(State(state): State<AppState>) -> Response {
    Html(render::render_sell_index(state.site(), state.snapshot())).into_response()
}

/// GET /sell/:slug
pub async fn sell_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let snapshot = state.snapshot();
    match snapshot.get_sell(&slug) {
        Some(page) => Html(render::render_sell_page(state.site(), page, snapshot.faqs())).into_response(),
        None => {
            tracing::debug!("No sell page for slug={:?}", slug);
            not_found(&state)
        },
    }
}

/// GET /guides
pub async fn guides_index(State(state): State<AppState>) -> Response {
    Html(render::render_guides_index(state.site(), state.snapshot())).into_response()
}

/// GET /guides/:slug
pub async fn guide_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.snapshot().get_guide(&slug) {
        Some(guide) => Html(render::render_guide_page(state.site(), guide)).into_response(),
        None => {
            tracing::debug!("No guide for slug={:?}", slug);
            not_found(&state)
        },
    }
}

/// GET /faq
pub async fn faq_page(State(state): State<AppState>) -> Response {
    Html(render::render_faq_page(state.site(), state.snapshot().faqs())).into_response()
}

/// GET for one of the fixed pages.
pub async fn static_page(State(state): State<AppState>, page: StaticPage) -> Response {
    Html(render::render_static_page(state.site(), page)).into_response()
}

/// Fallback for every unmatched path.
pub async fn fallback(State(state): State<AppState>) -> Response {
    not_found(&state)
}

// ---------------------------------------------------------------------------
// Crawl files
// ---------------------------------------------------------------------------

/// GET /sitemap.xml
pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let xml = sitemap::sitemap_xml(state.site(), state.snapshot(), state.loaded_on());
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
        .into_response()
}

/// GET /robots.txt
pub async fn robots_txt(State(state): State<AppState>) -> Response {
    let body = sitemap::robots_txt(state.site());
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

/// GET /llms.txt
pub async fn llms_txt(State(state): State<AppState>) -> Response {
    let body = sitemap::llms_txt(state.site(), state.snapshot());
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}

/// GET /healthz
pub async fn healthz() -> &'static str {
    "ok"
}
