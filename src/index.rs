use axum::{debug_handler, response::Response};
use tower_sessions::Session;

use crate::{AppResult, res, session::take_flashes};

#[debug_handler]
pub async fn index(session: Session) -> AppResult<Response> {
    Ok(res::home(&take_flashes(&session).await?))
}

#[debug_handler]
pub async fn not_found() -> Response {
    res::sorry("page")
}
