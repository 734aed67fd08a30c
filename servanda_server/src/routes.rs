//! Route configuration for the site.

use axum::{
    Form, Router,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use servanda_core::{LocaleChoice, LocaleResolver, LocaleStore};
use servanda_render::render_page;
use tower_http::services::ServeDir;

use crate::cookies::JarCookies;
use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    Router::new()
        .route("/", get(index_handler))
        .route("/locale", post(locale_handler))
        .route("/healthz", get(health_handler))
        .nest_service("/pkg", ServeDir::new(static_dir.join("pkg")))
        .nest_service("/images", ServeDir::new(static_dir.join("images")))
        .fallback(fallback_handler)
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let store = LocaleStore::new(JarCookies::new(jar), state.secure_cookies);
    let resolved = LocaleResolver::new(&state.catalog).resolve(store.get_locale());
    tracing::debug!(
        locale = %resolved.locale,
        from_preference = resolved.from_preference,
        "rendering page"
    );

    let html = render_page(&resolved, &state.page);
    let language = HeaderValue::from_static(resolved.locale.code());

    (
        [
            (header::CONTENT_LANGUAGE, language),
            (header::VARY, HeaderValue::from_static("Cookie")),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
        ],
        Html(html),
    )
}

/// Body of the switcher form.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleForm {
    /// `en`, `nb` or `system`; anything else means `system`
    #[serde(default)]
    pub locale: String,
}

async fn locale_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LocaleForm>,
) -> impl IntoResponse {
    let choice = LocaleChoice::from_value(&form.locale);
    let mut store = LocaleStore::new(JarCookies::new(jar), state.secure_cookies)
        .with_max_age_days(state.cookie_max_age_days);
    store.apply(choice);
    tracing::info!(choice = choice.as_value(), "locale preference updated");

    (store.into_inner().into_jar(), Redirect::to("/"))
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "not found")
}
