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

use super::form::VenueFormPage;

#[debug_handler]
pub(crate) async fn edit_venue_page(
    State(db_pool): State<SqlitePool>,
    session: Session,
    venue_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let venue_id = record_id(venue_id, "venue")?;
    let venue = db::venues::get(&db_pool, venue_id)
        .await?
        .ok_or(AppError::NotFound("venue"))?;

    Ok(
        VenueFormPage::edit_venue(venue_id, &venue.fields.name)
            .page(&venue.fields, &take_flashes(&session).await?)
    )
}

#[debug_handler]
pub(crate) async fn edit_venue(
    State(db_pool): State<SqlitePool>,
    session: Session,
    venue_id: Result<Path<i64>, PathRejection>,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let venue_id = record_id(venue_id, "venue")?;
    let current = db::venues::get(&db_pool, venue_id)
        .await?
        .ok_or(AppError::NotFound("venue"))?;

    let venue = forms::venue_from_form(&form);
    let errors = forms::validate_venue(&venue);
    if !errors.is_empty() {
        return Ok(VenueFormPage::edit_venue(venue_id, &current.fields.name).rejected(&venue, &errors));
    }

    match db::venues::update(&db_pool, venue_id, &venue).await {
        Ok(true) => {
            tracing::info!(id = venue_id, name = %venue.name, "venue updated");
            flash(&session, format!("Venue {} was successfully updated!", venue.name)).await?;
            Ok(Redirect::to(&format!("/venues/{venue_id}")).into_response())
        }
        Ok(false) => Err(AppError::NotFound("venue")),
        Err(err) => {
            tracing::error!(error = %err, id = venue_id, name = %venue.name, "venue could not be updated");
            Ok(res::failure(&format!("An error occurred. Venue {} could not be updated.", venue.name)))
        }
    }
}
