use axum::{debug_handler, extract::State, http::StatusCode, response::{Html, IntoResponse, Response}, Form};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    db,
    forms::{self, FormErrors, FormFields},
    include_res,
    res::{self, escape},
    session::take_flashes,
    widgets, AppResult,
};

fn show_form(form: &FormFields, errors: &FormErrors) -> String {
    let value = |key| escape(form.get(key).unwrap_or_default());

    include_res!(str, "/pages/forms/show.html")
        .replace("{errors}", &widgets::error_list(errors))
        .replace("{artist_id}", &value("artist_id"))
        .replace("{venue_id}", &value("venue_id"))
        .replace("{start_time}", &value("start_time"))
}

#[debug_handler]
pub(crate) async fn new_show_page(session: Session) -> AppResult<Response> {
    let content = show_form(&FormFields::default(), &FormErrors::default());
    Ok(Html(res::page("New show", &content, &take_flashes(&session).await?)).into_response())
}

#[debug_handler]
pub(crate) async fn new_show(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let show = match forms::show_from_form(&form) {
        Ok(show) => show,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(res::page("New show", &show_form(&form, &errors), &[])),
            )
                .into_response());
        }
    };

    match db::shows::create(&db_pool, &show).await {
        Ok(id) => {
            tracing::info!(id, artist_id = show.artist_id, venue_id = show.venue_id, "show listed");

            let mut flashes = take_flashes(&session).await?;
            flashes.push("Show was successfully listed!".to_owned());
            Ok(res::home(&flashes))
        }
        Err(err) if err.is_constraint() => {
            tracing::error!(error = %err, artist_id = show.artist_id, venue_id = show.venue_id, "show references missing records");
            Ok(res::failure(&format!(
                "An error occurred. Show could not be listed: artist {} or venue {} does not exist.",
                show.artist_id, show.venue_id
            )))
        }
        Err(err) => {
            tracing::error!(error = %err, artist_id = show.artist_id, venue_id = show.venue_id, "show could not be listed");
            Ok(res::failure("An error occurred. Show could not be listed."))
        }
    }
}
