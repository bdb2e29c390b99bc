use axum::{extract::State, routing::get, Router};
use proof_cellars_shared::StaticPage;
use tower_http::trace::TraceLayer;

use crate::{seo, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new();
    for page in StaticPage::ALL {
        router = router.route(page.path(), get(move |state: State<AppState>| seo::static_page(state, page)));
    }

    router
        .route("/", get(seo::homepage))
        .route("/sell", get(seo::sell_index))
        .route("/sell/:slug", get(seo::sell_page))
        .route("/guides", get(seo::guides_index))
        .route("/guides/:slug", get(seo::guide_page))
        .route("/faq", get(seo::faq_page))
        .route("/sitemap.xml", get(seo::sitemap_xml))
        .route("/robots.txt", get(seo::robots_txt))
        .route("/llms.txt", get(seo::llms_txt))
        .route("/healthz", get(seo::healthz))
        .fallback(seo::fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
