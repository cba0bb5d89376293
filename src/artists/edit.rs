use axum::{debug_handler, extract::{Path, State, rejection::PathRejection}, response::{IntoResponse, Redirect, Response}, Form};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    appresult::record_id,
    db,
    forms::{self, FormFields},
    res,
    session::{flash, take_flashes},
    AppError, AppResult,
};

use super::form::ArtistFormPage;

#[debug_handler]
pub(crate) async fn edit_artist_page(
    State(db_pool): State<SqlitePool>,
    session: Session,
    artist_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let artist_id = record_id(artist_id, "artist")?;
    let artist = db::artists::get(&db_pool, artist_id)
        .await?
        .ok_or(AppError::NotFound("artist"))?;

    Ok(
        ArtistFormPage::edit_artist(artist_id, &artist.fields.name)
            .page(&artist.fields, &take_flashes(&session).await?)
    )
}

/// Replaces every field with the submission, then sends the browser to the artist's page.
#[debug_handler]
pub(crate) async fn edit_artist(
    State(db_pool): State<SqlitePool>,
    session: Session,
    artist_id: Result<Path<i64>, PathRejection>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let artist_id = record_id(artist_id, "artist")?;
    let current = db::artists::get(&db_pool, artist_id)
        .await?
        .ok_or(AppError::NotFound("artist"))?;

    let artist = forms::artist_from_form(&form);
    let errors = forms::validate_artist(&artist);
    if !errors.is_empty() {
        return Ok(ArtistFormPage::edit_artist(artist_id, &current.fields.name).rejected(&artist, &errors));
    }

    match db::artists::update(&db_pool, artist_id, &artist).await {
        Ok(true) => {
            tracing::info!(id = artist_id, name = %artist.name, "artist updated");
            flash(&session, format!("Artist {} was successfully updated!", artist.name)).await?;
            Ok(Redirect::to(&format!("/artists/{artist_id}")).into_response())
        }
        Ok(false) => Err(AppError::NotFound("artist")),
        Err(err) => {
            tracing::error!(error = %err, id = artist_id, name = %artist.name, "artist could not be updated");
            Ok(res::failure(&format!("An error occurred. Artist {} could not be updated.", artist.name)))
        }
    }
}
