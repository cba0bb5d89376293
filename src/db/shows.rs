use sqlx::{FromRow, SqlitePool};
use time::PrimitiveDateTime;

use super::StoreResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: PrimitiveDateTime,
}

/// A venue's show together with the performing artist.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShowWithArtist {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}

/// An artist's show together with the hosting venue.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShowWithVenue {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: PrimitiveDateTime,
}

pub async fn for_venue(db_pool: &SqlitePool, venue_id: i64) -> StoreResult<Vec<ShowWithArtist>> {
    Ok(
        sqlx::query_as(
            "SELECT a.id AS artist_id,a.name AS artist_name,a.image_link AS artist_image_link,s.start_time
            FROM shows s JOIN artists a ON a.id=s.artist_id
            WHERE s.venue_id=? ORDER BY s.start_time,s.id"
        )
            .bind(venue_id)
            .fetch_all(db_pool)
            .await?
    )
}

pub async fn for_artist(db_pool: &SqlitePool, artist_id: i64) -> StoreResult<Vec<ShowWithVenue>> {
    Ok(
        sqlx::query_as(
            "SELECT v.id AS venue_id,v.name AS venue_name,v.image_link AS venue_image_link,s.start_time
            FROM shows s JOIN venues v ON v.id=s.venue_id
            WHERE s.artist_id=? ORDER BY s.start_time,s.id"
        )
            .bind(artist_id)
            .fetch_all(db_pool)
            .await?
    )
}

/// Shows starting strictly after `now`; everything else is left out.
pub async fn upcoming(db_pool: &SqlitePool, now: PrimitiveDateTime) -> StoreResult<Vec<ShowListing>> {
    Ok(
        sqlx::query_as(
            "SELECT v.id AS venue_id,v.name AS venue_name,
                a.id AS artist_id,a.name AS artist_name,a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN artists a ON a.id=s.artist_id
            JOIN venues v ON v.id=s.venue_id
            WHERE s.start_time>? ORDER BY s.start_time,s.id"
        )
            .bind(now)
            .fetch_all(db_pool)
            .await?
    )
}

/// Unknown artist or venue ids are rejected by the foreign keys as a constraint error.
pub async fn create(db_pool: &SqlitePool, show: &NewShow) -> StoreResult<i64> {
    let mut tx = db_pool.begin().await?;

    let id = sqlx::query("INSERT INTO shows (artist_id,venue_id,start_time) VALUES (?,?,?)")
        .bind(show.artist_id)
        .bind(show.venue_id)
        .bind(show.start_time)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;
    Ok(id)
}
