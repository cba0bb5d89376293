use axum::{debug_handler, extract::State, response::{Html, IntoResponse, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{db, include_res, res::{self, escape}, session::take_flashes, AppResult};

/// Every artist, unpaged.
#[debug_handler]
pub(crate) async fn artists(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let mut items = String::new();
    for artist in db::artists::list(&db_pool).await? {
        items += &include_res!(str, "/pages/artists/item.html")
            .replace("{id}", &artist.id.to_string())
            .replace("{name}", &escape(&artist.fields.name));
    }

    let content = include_res!(str, "/pages/artists/artists.html")
        .replace("{artists}", &items);

    Ok(Html(res::page("Artists", &content, &take_flashes(&session).await?)).into_response())
}
