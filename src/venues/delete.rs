use axum::{debug_handler, extract::{Path, State, rejection::PathRejection}, response::{IntoResponse, Redirect, Response}};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{appresult::record_id, db, res, session::flash, AppError, AppResult};

/// Responds with a redirect home; the venue's shows go with it.
#[debug_handler]
pub(crate) async fn delete_venue(
    State(db_pool): State<SqlitePool>,
    session: Session,
    venue_id: Result<Path<i64>, PathRejection>,
) -> AppResult<Response> {
    let venue_id = record_id(venue_id, "venue")?;
    match db::venues::delete(&db_pool, venue_id).await {
        Ok(Some(name)) => {
            tracing::info!(id = venue_id, %name, "venue deleted");
            flash(&session, format!("Venue {name} was successfully deleted.")).await?;
            Ok(Redirect::to("/").into_response())
        }
        Ok(None) => Err(AppError::NotFound("venue")),
        Err(err) => {
            tracing::error!(error = %err, id = venue_id, "venue could not be deleted");
            Ok(res::failure("An error occurred. The venue could not be deleted."))
        }
    }
}
