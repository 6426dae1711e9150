//! Venue persistence

use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;
use tracing::info;

use super::{CatalogRepository, Venue, VenueDraft};
use crate::{Error, Result};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, \
     facebook_link, website, seeking_talent, seeking_description, genres";

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let genres: String = row.try_get("genres")?;

    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        genres: serde_json::from_str(&genres)?,
        address: row.try_get("address")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        website: row.try_get("website")?,
        facebook_link: row.try_get("facebook_link")?,
        seeking_talent: row.try_get("seeking_talent")?,
        seeking_description: row.try_get("seeking_description")?,
        image_link: row.try_get("image_link")?,
    })
}

/// Insert a venue on an open connection or transaction, returning its id
pub async fn insert_venue(conn: &mut SqliteConnection, draft: &VenueDraft) -> Result<i64> {
    let genres = serde_json::to_string(&draft.genres)?;

    let id = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, image_link, facebook_link,
            website, seeking_talent, seeking_description, genres
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.city)
    .bind(&draft.state)
    .bind(&draft.address)
    .bind(&draft.phone)
    .bind(&draft.image_link)
    .bind(&draft.facebook_link)
    .bind(&draft.website)
    .bind(draft.seeking_talent)
    .bind(&draft.seeking_description)
    .bind(&genres)
    .execute(conn)
    .await?
    .last_insert_rowid();

    Ok(id)
}

impl CatalogRepository {
    /// All venues in id order
    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        let sql = format!("SELECT {} FROM venues ORDER BY id", VENUE_COLUMNS);
        let rows = sqlx::query(&sql).fetch_all(self.pool()).await?;

        rows.iter().map(venue_from_row).collect()
    }

    /// Load venue by id, `None` if it does not exist
    pub async fn find_venue(&self, id: i64) -> Result<Option<Venue>> {
        let sql = format!("SELECT {} FROM venues WHERE id = ?", VENUE_COLUMNS);
        let row = sqlx::query(&sql).bind(id).fetch_optional(self.pool()).await?;

        row.as_ref().map(venue_from_row).transpose()
    }

    /// Load venue by id
    pub async fn get_venue(&self, id: i64) -> Result<Venue> {
        self.find_venue(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("venue {}", id)))
    }

    /// Insert a new venue in its own transaction, returning its id
    pub async fn create_venue(&self, draft: &VenueDraft) -> Result<i64> {
        let mut tx = self.pool().begin().await?;
        let id = insert_venue(&mut tx, draft).await?;
        tx.commit().await?;

        info!(venue_id = id, "Created venue '{}'", draft.name);
        Ok(id)
    }

    /// Replace every editable field of an existing venue
    pub async fn update_venue(&self, id: i64, draft: &VenueDraft) -> Result<()> {
        let genres = serde_json::to_string(&draft.genres)?;
        let mut tx = self.pool().begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE venues SET
                name = ?, city = ?, state = ?, address = ?, phone = ?,
                image_link = ?, facebook_link = ?, website = ?,
                seeking_talent = ?, seeking_description = ?, genres = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.city)
        .bind(&draft.state)
        .bind(&draft.address)
        .bind(&draft.phone)
        .bind(&draft.image_link)
        .bind(&draft.facebook_link)
        .bind(&draft.website)
        .bind(draft.seeking_talent)
        .bind(&draft.seeking_description)
        .bind(&genres)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("venue {}", id)));
        }

        tx.commit().await?;

        info!(venue_id = id, "Updated venue '{}'", draft.name);
        Ok(())
    }
}
