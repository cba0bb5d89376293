use sqlx::{FromRow, SqlitePool, types::Json};
use time::PrimitiveDateTime;

use super::{SearchHit, StoreResult, matching_names};

/// Every editable column of a venue.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    #[sqlx(json)]
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Venue {
    pub id: i64,
    #[sqlx(flatten)]
    pub fields: VenueFields,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Area {
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// All venues with their upcoming show counts, grouped by city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaVenues {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

pub async fn by_area(db_pool: &SqlitePool, now: PrimitiveDateTime) -> StoreResult<Vec<AreaVenues>> {
    let mut listing = Vec::new();
    for area in areas(db_pool).await? {
        let venues = in_area(db_pool, &area, now).await?;
        listing.push(AreaVenues { city: area.city, state: area.state, venues });
    }
    Ok(listing)
}

pub async fn areas(db_pool: &SqlitePool) -> StoreResult<Vec<Area>> {
    Ok(
        sqlx::query_as("SELECT DISTINCT city,state FROM venues ORDER BY state,city")
            .fetch_all(db_pool)
            .await?
    )
}

/// Venues of one city, each with the number of its shows starting after `now`.
pub async fn in_area(
    db_pool: &SqlitePool,
    area: &Area,
    now: PrimitiveDateTime,
) -> StoreResult<Vec<VenueSummary>> {
    Ok(
        sqlx::query_as(
            "SELECT v.id,v.name,
                (SELECT COUNT(*) FROM shows s WHERE s.venue_id=v.id AND s.start_time>?) AS num_upcoming_shows
            FROM venues v WHERE v.city=? AND v.state=? ORDER BY v.id"
        )
            .bind(now)
            .bind(&area.city)
            .bind(&area.state)
            .fetch_all(db_pool)
            .await?
    )
}

/// Case-insensitive substring match on the name, in id order.
pub async fn search(db_pool: &SqlitePool, term: &str) -> StoreResult<Vec<SearchHit>> {
    let hits = sqlx::query_as("SELECT id,name FROM venues ORDER BY id")
        .fetch_all(db_pool)
        .await?;

    Ok(matching_names(hits, term))
}

pub async fn get(db_pool: &SqlitePool, id: i64) -> StoreResult<Option<Venue>> {
    Ok(
        sqlx::query_as(
            "SELECT id,name,city,state,address,phone,image_link,facebook_link,genres,website,seeking_talent,seeking_description
            FROM venues WHERE id=?"
        )
            .bind(id)
            .fetch_optional(db_pool)
            .await?
    )
}

pub async fn create(db_pool: &SqlitePool, venue: &VenueFields) -> StoreResult<i64> {
    let mut tx = db_pool.begin().await?;

    let id = sqlx::query(
        "INSERT INTO venues (name,city,state,address,phone,image_link,facebook_link,genres,website,seeking_talent,seeking_description)
        VALUES (?,?,?,?,?,?,?,?,?,?,?)"
    )
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(&venue.image_link)
        .bind(&venue.facebook_link)
        .bind(Json(&venue.genres))
        .bind(&venue.website)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;
    Ok(id)
}

/// Overwrites every editable column. `false` when no venue has `id`.
pub async fn update(db_pool: &SqlitePool, id: i64, venue: &VenueFields) -> StoreResult<bool> {
    let mut tx = db_pool.begin().await?;

    let updated = sqlx::query(
        "UPDATE venues SET name=?,city=?,state=?,address=?,phone=?,image_link=?,facebook_link=?,genres=?,website=?,seeking_talent=?,seeking_description=?
        WHERE id=?"
    )
        .bind(&venue.name)
        .bind(&venue.city)
        .bind(&venue.state)
        .bind(&venue.address)
        .bind(&venue.phone)
        .bind(&venue.image_link)
        .bind(&venue.facebook_link)
        .bind(Json(&venue.genres))
        .bind(&venue.website)
        .bind(venue.seeking_talent)
        .bind(&venue.seeking_description)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected() > 0;

    tx.commit().await?;
    Ok(updated)
}

/// Removes the venue and, through the foreign key, its shows.
/// Returns the deleted venue's name, `None` when there was nothing to delete.
pub async fn delete(db_pool: &SqlitePool, id: i64) -> StoreResult<Option<String>> {
    let mut tx = db_pool.begin().await?;

    let Some((name,)): Option<(String,)> = sqlx::query_as("SELECT name FROM venues WHERE id=?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
    else {
        return Ok(None);
    };

    sqlx::query("DELETE FROM venues WHERE id=?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some(name))
}
