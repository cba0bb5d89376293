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
        .route("/artists", get(list::artists))
        .route("/artists/search", post(search::search_artists))
        .route("/artists/create", get(new::new_artist_page).post(new::new_artist))
        .route("/artists/{id}", get(page::artist))
        .route("/artists/{id}/edit", get(edit::edit_artist_page).post(edit::edit_artist))
}
