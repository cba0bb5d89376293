mod list;
mod new;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list::shows))
        .route("/shows/create", get(new::new_show_page).post(new::new_show))
}
