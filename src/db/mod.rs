pub mod artists;
pub mod shows;
pub mod venues;

use std::str::FromStr;

use sqlx::{
    FromRow, SqlitePool,
    error::ErrorKind,
    migrate::{MigrateError, Migrator},
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use thiserror::Error;
use time::{OffsetDateTime, PrimitiveDateTime};

pub use artists::{Artist, ArtistFields};
pub use shows::{NewShow, ShowListing, ShowWithArtist, ShowWithVenue};
pub use venues::{Area, AreaVenues, Venue, VenueFields, VenueSummary};

/// A name matched by a search, with the id to link to.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
}

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A NOT NULL, FOREIGN KEY, CHECK or UNIQUE rule rejected the write.
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("migration failed: {0}")]
    Migrate(#[from] MigrateError),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::UniqueViolation => {
                    return Self::Constraint(db_err.message().to_owned());
                }
                _ => {}
            }
        }
        Self::Sqlx(err)
    }
}

impl StoreError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

/// Opens the pool and brings the schema up to date.
pub async fn connect(database_url: &str) -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&db_pool).await?;

    Ok(db_pool)
}

/// Keeps the hits whose name contains `term`, ignoring case.
/// Folding covers non-ASCII letters, which SQLite `LIKE` leaves alone.
pub(crate) fn matching_names(hits: Vec<SearchHit>, term: &str) -> Vec<SearchHit> {
    let term = term.to_lowercase();
    hits.into_iter()
        .filter(|hit| hit.name.to_lowercase().contains(&term))
        .collect()
}

/// Current server time, second precision, UTC wall clock.
pub fn now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    let now = now.replace_nanosecond(0).unwrap_or(now);
    PrimitiveDateTime::new(now.date(), now.time())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(names: &[&str]) -> Vec<SearchHit> {
        names.iter()
            .enumerate()
            .map(|(i, name)| SearchHit { id: i as i64 + 1, name: (*name).to_owned() })
            .collect()
    }

    #[test]
    fn matching_names_folds_unicode_case() {
        let names = ["Café Du Nord", "ÉCLAIR HALL", "The Fillmore", "100% Club"];

        let ids = |term: &str| matching_names(hits(&names), term).iter().map(|h| h.id).collect::<Vec<_>>();
        assert_eq!(ids("CAFÉ"), [1]);
        assert_eq!(ids("éclair"), [2]);
        assert_eq!(ids("fill"), [3]);
        assert_eq!(ids("%"), [4]);
        assert_eq!(ids(""), [1, 2, 3, 4]);
    }

    #[test]
    fn now_has_no_subseconds() {
        assert_eq!(now().nanosecond(), 0);
    }
}
