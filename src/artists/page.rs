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
pub(crate) async fn artist(
    State(db_pool): State<SqlitePool>,
    session: Session,
    artist_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let artist_id = record_id(artist_id, "artist")?;
    let artist = db::artists::get(&db_pool, artist_id)
        .await?
        .ok_or(AppError::NotFound("artist"))?;

    let schedule = Schedule::partition(db::shows::for_artist(&db_pool, artist_id).await?, db::now());

    let fields = &artist.fields;
    let seeking = if fields.seeking_venue {
        format!(
            "<div class=\"seeking\"><p>Currently seeking performance venues</p><p>{}</p></div>",
            escape_opt(&fields.seeking_description)
        )
    } else {
        "<p class=\"not-seeking\">Not currently seeking performance venues</p>".to_owned()
    };

    let content = include_res!(str, "/pages/artists/artist.html")
        .replace("{id}", &artist.id.to_string())
        .replace("{name}", &escape(&fields.name))
        .replace("{genres}", &res::genres(&fields.genres))
        .replace("{city}", &escape(&fields.city))
        .replace("{state}", &escape(&fields.state))
        .replace("{phone}", &escape_opt(&fields.phone))
        .replace("{website}", &escape_opt(&fields.website))
        .replace("{facebook_link}", &escape_opt(&fields.facebook_link))
        .replace("{image_link}", &escape_opt(&fields.image_link))
        .replace("{seeking}", &seeking)
        .replace("{upcoming_shows_count}", &schedule.upcoming_count().to_string())
        .replace("{past_shows_count}", &schedule.past_count().to_string())
        .replace("{upcoming_shows}", &res::show_cards("venues", &schedule.upcoming)?)
        .replace("{past_shows}", &res::show_cards("venues", &schedule.past)?);

    Ok(Html(res::page(&fields.name, &content, &take_flashes(&session).await?)).into_response())
}
