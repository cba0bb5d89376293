use sqlx::{FromRow, SqlitePool, types::Json};

use super::{SearchHit, StoreResult, matching_names};

/// Every editable column of an artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct ArtistFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    #[sqlx(json)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Artist {
    pub id: i64,
    #[sqlx(flatten)]
    pub fields: ArtistFields,
}

pub async fn list(db_pool: &SqlitePool) -> StoreResult<Vec<Artist>> {
    Ok(
        sqlx::query_as(
            "SELECT id,name,city,state,phone,genres,image_link,facebook_link,website,seeking_venue,seeking_description
            FROM artists ORDER BY id"
        )
            .fetch_all(db_pool)
            .await?
    )
}

/// Case-insensitive substring match on the name, in id order.
pub async fn search(db_pool: &SqlitePool, term: &str) -> StoreResult<Vec<SearchHit>> {
    let hits = sqlx::query_as("SELECT id,name FROM artists ORDER BY id")
        .fetch_all(db_pool)
        .await?;

    Ok(matching_names(hits, term))
}

pub async fn get(db_pool: &SqlitePool, id: i64) -> StoreResult<Option<Artist>> {
    Ok(
        sqlx::query_as(
            "SELECT id,name,city,state,phone,genres,image_link,facebook_link,website,seeking_venue,seeking_description
            FROM artists WHERE id=?"
        )
            .bind(id)
            .fetch_optional(db_pool)
            .await?
    )
}

pub async fn create(db_pool: &SqlitePool, artist: &ArtistFields) -> StoreResult<i64> {
    let mut tx = db_pool.begin().await?;

    let id = sqlx::query(
        "INSERT INTO artists (name,city,state,phone,genres,image_link,facebook_link,website,seeking_venue,seeking_description)
        VALUES (?,?,?,?,?,?,?,?,?,?)"
    )
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(Json(&artist.genres))
        .bind(&artist.image_link)
        .bind(&artist.facebook_link)
        .bind(&artist.website)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;
    Ok(id)
}

pub async fn update(db_pool: &SqlitePool, id: i64, artist: &ArtistFields) -> StoreResult<bool> {
    let mut tx = db_pool.begin().await?;

    let updated = sqlx::query(
        "UPDATE artists SET name=?,city=?,state=?,phone=?,genres=?,image_link=?,facebook_link=?,website=?,seeking_venue=?,seeking_description=?
        WHERE id=?"
    )
        .bind(&artist.name)
        .bind(&artist.city)
        .bind(&artist.state)
        .bind(&artist.phone)
        .bind(Json(&artist.genres))
        .bind(&artist.image_link)
        .bind(&artist.facebook_link)
        .bind(&artist.website)
        .bind(artist.seeking_venue)
        .bind(&artist.seeking_description)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected() > 0;

    tx.commit().await?;
    Ok(updated)
}
