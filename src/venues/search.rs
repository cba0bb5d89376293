use axum::{debug_handler, extract::State, response::Response, Form};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{db, search::{SearchForm, SearchResults}, session::take_flashes, AppResult};

#[debug_handler]
pub(crate) async fn search_venues(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(SearchForm { search_term }): Form<SearchForm>,
) -> AppResult<Response> {
    let hits = db::venues::search(&db_pool, &search_term).await?;
    let results = SearchResults::new(search_term, hits);

    Ok(results.render("venues", &take_flashes(&session).await?))
}
