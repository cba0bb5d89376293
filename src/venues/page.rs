use axum::{debug_handler, extract::{Path, State, rejection::PathRejection}, response::{Html, IntoResponse, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    appresult::record_id,
    db, include_res,
    res::{self, escape, escape_opt},
    schedule::Schedule,
    session::take_flashes,
    AppError, AppResult,
};

#[debug_handler]
pub(crate) async fn venue(
    State(db_pool): State<SqlitePool>,
    session: Session,
    venue_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let venue_id = record_id(venue_id, "venue")?;
    let venue = db::venues::get(&db_pool, venue_id)
        .await?
        .ok_or(AppError::NotFound("venue"))?;

    let shows = db::shows::for_venue(&db_pool, venue_id).await?;
    let schedule = Schedule::partition(shows, db::now());

    let fields = &venue.fields;
    let seeking = if fields.seeking_talent {
        format!(
            "<div class=\"seeking\"><p>Currently seeking talent</p><p>{}</p></div>",
            escape_opt(&fields.seeking_description)
        )
    } else {
        "<p class=\"not-seeking\">Not currently seeking talent</p>".to_owned()
    };

    let content = include_res!(str, "/pages/venues/venue.html")
        .replace("{id}", &venue.id.to_string())
        .replace("{name}", &escape(&fields.name))
        .replace("{genres}", &res::genres(&fields.genres))
        .replace("{city}", &escape(&fields.city))
        .replace("{state}", &escape(&fields.state))
        .replace("{address}", &escape_opt(&fields.address))
        .replace("{phone}", &escape_opt(&fields.phone))
        .replace("{website}", &escape_opt(&fields.website))
        .replace("{facebook_link}", &escape_opt(&fields.facebook_link))
        .replace("{image_link}", &escape_opt(&fields.image_link))
        .replace("{seeking}", &seeking)
        .replace("{upcoming_shows_count}", &schedule.upcoming_count().to_string())
        .replace("{past_shows_count}", &schedule.past_count().to_string())
        .replace("{upcoming_shows}", &res::show_cards("artists", &schedule.upcoming)?)
        .replace("{past_shows}", &res::show_cards("artists", &schedule.past)?);

    Ok(Html(res::page(&fields.name, &content, &take_flashes(&session).await?)).into_response())
}
