use axum::{debug_handler, extract::State, response::{Html, IntoResponse, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{db, include_res, res::{self, escape}, session::take_flashes, AppResult};

#[debug_handler]
pub(crate) async fn venues(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let mut areas = String::new();
    for area in db::venues::by_area(&db_pool, db::now()).await? {
        let mut venues = String::new();
        for venue in area.venues {
            venues += &include_res!(str, "/pages/venues/item.html")
                .replace("{id}", &venue.id.to_string())
                .replace("{name}", &escape(&venue.name))
                .replace("{num_upcoming_shows}", &venue.num_upcoming_shows.to_string());
        }

        areas += &include_res!(str, "/pages/venues/area.html")
            .replace("{city}", &escape(&area.city))
            .replace("{state}", &escape(&area.state))
            .replace("{venues}", &venues);
    }

    let content = include_res!(str, "/pages/venues/venues.html")
        .replace("{areas}", &areas);

    Ok(Html(res::page("Venues", &content, &take_flashes(&session).await?)).into_response())
}
