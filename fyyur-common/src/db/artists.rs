//! Artist persistence

use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;
use tracing::info;

use super::{Artist, ArtistDraft, CatalogRepository};
use crate::{Error, Result};

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website, seeking_venue, seeking_description";

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres: String = row.try_get("genres")?;

    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        genres: serde_json::from_str(&genres)?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        facebook_link: row.try_get("facebook_link")?,
        seeking_venue: row.try_get("seeking_venue")?,
        seeking_description: row.try_get("seeking_description")?,
        image_link: row.try_get("image_link")?,
    })
}

/// Insert an artist on an open connection or transaction, returning its id
pub async fn insert_artist(conn: &mut SqliteConnection, draft: &ArtistDraft) -> Result<i64> {
    let genres = serde_json::to_string(&draft.genres)?;

    let id = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres, image_link, facebook_link,
            website, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.phone)
    .bind(&genres)
    .bind(&draft.image_link)
    .bind(&draft.facebook_link)
    .bind(&draft.website)
    .bind(draft.seeking_venue)
    .bind(&draft.seeking_description)
    .execute(conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

impl CatalogRepository {
    /// All artists in id order
    pub async fn list_artists(&self) -> Result<Vec<Artist>> {
        let sql = format!("SELECT {} FROM artists ORDER BY id", ARTIST_COLUMNS);
        let rows = sqlx::query(&sql).fetch_all(self.pool()).await?;

        rows.iter().map(artist_from_row).collect()
    }

    /// Load artist by id, `None` if it does not exist
    pub async fn find_artist(&self, id: i64) -> Result<Option<Artist>> {
        let sql = format!("SELECT {} FROM artists WHERE id = ?", ARTIST_COLUMNS);
        let row = sqlx::query(&sql).bind(id).fetch_optional(self.pool()).await?;

        row.as_ref().map(artist_from_row).transpose()
    }

    /// Load artist by id
    pub async fn get_artist(&self, id: i64) -> Result<Artist> {
        self.find_artist(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("artist {}", id)))
    }

    /// Insert a new artist in its own transaction, returning its id
    pub async fn create_artist(&self, draft: &ArtistDraft) -> Result<i64> {
        let mut tx = self.pool().begin().await?;
        let id = insert_artist(&mut tx, draft).await?;
        tx.commit().await?;

        info!(artist_id = id, "Created artist '{}'", draft.name);
        Ok(id)
    }

    /// Replace every editable field of an existing artist
    pub async fn update_artist(&self, id: i64, draft: &ArtistDraft) -> Result<()> {
        let genres = serde_json::to_string(&draft.genres)?;
        let mut tx = self.pool().begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE artists SET
                name = ?, city = ?, state = ?, phone = ?, genres = ?,
                image_link = ?, facebook_link = ?, website = ?,
                seeking_venue = ?, seeking_description = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.phone)
        .bind(&genres)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website)
        .bind(draft.seeking_venue)
        .bind(&draft.seeking_description)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("artist {}", id)));
        }

        tx.commit().await?;

        info!(artist_id = id, "Updated artist '{}'", draft.name);
        Ok(())
    }
}
