mod delete;
mod edit;
mod form;
mod list;
mod new;
mod page;
mod search;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list::venues))
        .route("/venues/search", post(search::search_venues))
        .route("/venues/create", get(new::new_venue_page).post(new::new_venue))
        .route("/venues/{id}", get(page::venue).delete(delete::delete_venue))
        .route("/venues/{id}/edit", get(edit::edit_venue_page).post(edit::edit_venue))
}
