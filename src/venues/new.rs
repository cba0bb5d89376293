use axum::{debug_handler, extract::State, response::Response, Form};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    db::{self, VenueFields},
    forms::{self, FormFields},
    res,
    session::take_flashes,
    AppResult,
};

use super::form::VenueFormPage;

#[debug_handler]
pub(crate) async fn new_venue_page(session: Session) -> AppResult<Response> {
    Ok(VenueFormPage::new_venue().page(&VenueFields::default(), &take_flashes(&session).await?))
}

#[debug_handler]
pub(crate) async fn new_venue(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let venue = forms::venue_from_form(&form);
    let errors = forms::validate_venue(&venue);
    if !errors.is_empty() {
        return Ok(VenueFormPage::new_venue().rejected(&venue, &errors));
    }

    match db::venues::create(&db_pool, &venue).await {
        Ok(id) => {
            tracing::info!(id, name = %venue.name, "venue listed");

            let mut flashes = take_flashes(&session).await?;
            flashes.push(format!("Venue {} was successfully listed!", venue.name));
            Ok(res::home(&flashes))
        }
        Err(err) => {
            tracing::error!(error = %err, name = %venue.name, "venue could not be listed");
            Ok(res::failure(&format!("An error occurred. Venue {} could not be listed.", venue.name)))
        }
    }
}
