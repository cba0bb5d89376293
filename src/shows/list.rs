use axum::{debug_handler, extract::State, response::{Html, IntoResponse, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    db, filters, include_res,
    res::{self, escape, escape_opt},
    session::take_flashes,
    AppResult,
};

/// Only shows that have yet to start are listed.
#[debug_handler]
pub(crate) async fn shows(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let mut items = String::new();
    for show in db::shows::upcoming(&db_pool, db::now()).await? {
        let start_time = filters::datetime(&filters::show_time(show.start_time), "full")?;

        items += &include_res!(str, "/pages/shows/item.html")
            .replace("{venue_id}", &show.venue_id.to_string())
            .replace("{venue_name}", &escape(&show.venue_name))
            .replace("{artist_id}", &show.artist_id.to_string())
            .replace("{artist_name}", &escape(&show.artist_name))
            .replace("{artist_image_link}", &escape_opt(&show.artist_image_link))
            .replace("{start_time}", &start_time);
    }

    let content = include_res!(str, "/pages/shows/shows.html")
        .replace("{shows}", &items);

    Ok(Html(res::page("Shows", &content, &take_flashes(&session).await?)).into_response())
}
