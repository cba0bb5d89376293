pub mod appresult;
pub mod artists;
pub mod config;
pub mod db;
pub mod filters;
pub mod forms;
pub mod index;
pub mod logging;
pub mod res;
pub mod schedule;
pub mod search;
pub mod session;
pub mod shows;
pub mod venues;
pub mod widgets;

use axum::{Router, extract::FromRef, routing::get};
use sqlx::SqlitePool;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::SameSite};

pub use appresult::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

/// Every route, with the session and request-tracing layers applied.
pub fn app(app_state: AppState, session_secure: bool) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(1)));

    Router::new()
        .route("/", get(index::index))

        .merge(venues::router())
        .merge(artists::router())
        .merge(shows::router())

        .fallback(index::not_found)
        .with_state(app_state)
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
