use axum::{debug_handler, extract::State, response::Response, Form};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{
    db::{self, ArtistFields},
    forms::{self, FormFields},
    res,
    session::take_flashes,
    AppResult,
};

use super::form::ArtistFormPage;

#[debug_handler]
pub(crate) async fn new_artist_page(session: Session) -> AppResult<Response> {
    Ok(ArtistFormPage::new_artist().page(&ArtistFields::default(), &take_flashes(&session).await?))
}

#[debug_handler]
pub(crate) async fn new_artist(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(form): Form<FormFields>,
) -> AppResult<Response> {
    let artist = forms::artist_from_form(&form);
    let errors = forms::validate_artist(&artist);
    if !errors.is_empty() {
        return Ok(ArtistFormPage::new_artist().rejected(&artist, &errors));
    }

    match db::artists::create(&db_pool, &artist).await {
        Ok(id) => {
            tracing::info!(id, name = %artist.name, "artist listed");

            let mut flashes = take_flashes(&session).await?;
            flashes.push(format!("Artist {} was successfully listed!", artist.name));
            Ok(res::home(&flashes))
        }
        Err(err) => {
            tracing::error!(error = %err, name = %artist.name, "artist could not be listed");
            Ok(res::failure(&format!("An error occurred. Artist {} could not be listed.", artist.name)))
        }
    }
}
