//! Show persistence
//!
//! Shows are insert-only. Reads come in two shapes: bare `Show` rows used
//! for upcoming-show counting, and `ShowRow` joins carrying the venue and
//! artist display fields.

use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;
use tracing::{info, warn};

use super::{CatalogRepository, Show, ShowDraft, ShowRow};
use crate::{Error, Result};

const SHOW_ROW_SELECT: &str = r#"
    SELECT s.id AS show_id, s.start_time AS start_time,
           v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
           a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

fn show_row_from_row(row: &SqliteRow) -> Result<ShowRow> {
    Ok(ShowRow {
        show_id: row.try_get("show_id")?,
        start_time: row.try_get("start_time")?,
        venue_id: row.try_get("venue_id")?,
        venue_name: row.try_get("venue_name")?,
        venue_image_link: row.try_get("venue_image_link")?,
        artist_id: row.try_get("artist_id")?,
        artist_name: row.try_get("artist_name")?,
        artist_image_link: row.try_get("artist_image_link")?,
    })
}

/// Insert a show on an open connection or transaction, returning its id
///
/// Both referenced records are checked on the same connection; a missing
/// one fails with `Error::Precondition` and writes nothing.
pub async fn insert_show(conn: &mut SqliteConnection, draft: &ShowDraft) -> Result<i64> {
    let artist: Option<i64> = sqlx::query_scalar("SELECT id FROM artists WHERE id = ?")
        .bind(draft.artist_id)
        .fetch_optional(&mut *conn)
        .await?;
    let venue: Option<i64> = sqlx::query_scalar("SELECT id FROM venues WHERE id = ?")
        .bind(draft.venue_id)
        .fetch_optional(&mut *conn)
        .await?;

    if artist.is_none() || venue.is_none() {
        warn!(
            artist_id = draft.artist_id,
            venue_id = draft.venue_id,
            artist_found = artist.is_some(),
            venue_found = venue.is_some(),
            "Rejected show referencing a missing record"
        );
        return Err(Error::Precondition(format!(
            "artist {} or venue {} does not exist",
            draft.artist_id, draft.venue_id
        )));
    }

    let id = sqlx::query("INSERT INTO shows (start_time, artist_id, venue_id) VALUES (?, ?, ?)")
        .bind(draft.start_time)
        .bind(draft.artist_id)
        .bind(draft.venue_id)
        .execute(conn)
        .await?
        .last_insert_rowid();

    Ok(id)
}

impl CatalogRepository {
    /// All shows, unjoined
    pub async fn list_shows(&self) -> Result<Vec<Show>> {
        let rows = sqlx::query(
            "SELECT id, artist_id, venue_id, start_time FROM shows ORDER BY start_time, id",
        )
        .fetch_all(self.pool())
        .await?;

        rows.iter()
            .map(|row| {
                Ok(Show {
                    id: row.try_get("id")?,
                    artist_id: row.try_get("artist_id")?,
                    venue_id: row.try_get("venue_id")?,
                    start_time: row.try_get("start_time")?,
                })
            })
            .collect()
    }

    /// Every show joined with its venue and artist, ordered by start time
    pub async fn show_rows(&self) -> Result<Vec<ShowRow>> {
        let sql = format!("{} ORDER BY s.start_time, s.id", SHOW_ROW_SELECT);
        let rows = sqlx::query(&sql).fetch_all(self.pool()).await?;

        rows.iter().map(show_row_from_row).collect()
    }

    /// Shows hosted by one venue
    pub async fn show_rows_for_venue(&self, venue_id: i64) -> Result<Vec<ShowRow>> {
        let sql = format!("{} WHERE s.venue_id = ? ORDER BY s.start_time, s.id", SHOW_ROW_SELECT);
        let rows = sqlx::query(&sql).bind(venue_id).fetch_all(self.pool()).await?;

        rows.iter().map(show_row_from_row).collect()
    }

    /// Shows played by one artist
    pub async fn show_rows_for_artist(&self, artist_id: i64) -> Result<Vec<ShowRow>> {
        let sql = format!("{} WHERE s.artist_id = ? ORDER BY s.start_time, s.id", SHOW_ROW_SELECT);
        let rows = sqlx::query(&sql).bind(artist_id).fetch_all(self.pool()).await?;

        rows.iter().map(show_row_from_row).collect()
    }

    /// Insert a new show in its own transaction, returning its id
    pub async fn create_show(&self, draft: &ShowDraft) -> Result<i64> {
        let mut tx = self.pool().begin().await?;
        let id = insert_show(&mut tx, draft).await?;
        tx.commit().await?;

        info!(
            show_id = id,
            artist_id = draft.artist_id,
            venue_id = draft.venue_id,
            "Created show"
        );
        Ok(id)
    }

    /// Number of stored shows
    pub async fn count_shows(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_memory_database, ArtistDraft, VenueDraft};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap()
    }

    async fn seeded() -> (CatalogRepository, i64, i64) {
        let pool = init_memory_database().await.unwrap();
        let repo = CatalogRepository::new(pool);

        let venue_id = repo
            .create_venue(&VenueDraft {
                name: "The Dueling Pianos Bar".to_string(),
                genres: vec!["Classical".to_string()],
                address: "335 Delancey Street".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                phone: "914-003-1132".to_string(),
                facebook_link: "https://www.facebook.com/theduelingpianos".to_string(),
                image_link: "https://images.example.com/pianos.jpg".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let artist_id = repo
            .create_artist(&ArtistDraft {
                name: "The Wild Sax Band".to_string(),
                genres: vec!["Jazz".to_string()],
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                phone: "432-325-5432".to_string(),
                image_link: "https://images.example.com/sax.jpg".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        (repo, venue_id, artist_id)
    }

    #[tokio::test]
    async fn test_create_show_and_read_joined_rows() {
        let (repo, venue_id, artist_id) = seeded().await;
        let show_id = repo
            .create_show(&ShowDraft {
                artist_id,
                venue_id,
                start_time: at(2035, 4, 1),
            })
            .await
            .expect("Failed to create show");

        let rows = repo.show_rows_for_venue(venue_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].show_id, show_id);
        assert_eq!(rows[0].artist_name, "The Wild Sax Band");
        assert_eq!(rows[0].venue_name, "The Dueling Pianos Bar");
        assert_eq!(rows[0].start_time, at(2035, 4, 1));

        assert_eq!(repo.show_rows_for_artist(artist_id).await.unwrap(), rows);
        assert_eq!(repo.show_rows().await.unwrap(), rows);
    }

    #[tokio::test]
    async fn test_show_with_missing_artist_is_rejected() {
        let (repo, venue_id, _) = seeded().await;
        let result = repo
            .create_show(&ShowDraft {
                artist_id: 404,
                venue_id,
                start_time: at(2035, 4, 1),
            })
            .await;

        assert!(matches!(result, Err(Error::Precondition(_))));
        assert_eq!(repo.count_shows().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_show_with_missing_venue_is_rejected() {
        let (repo, _, artist_id) = seeded().await;
        let result = repo
            .create_show(&ShowDraft {
                artist_id,
                venue_id: 404,
                start_time: at(2035, 4, 1),
            })
            .await;

        assert!(matches!(result, Err(Error::Precondition(_))));
        assert_eq!(repo.count_shows().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_shows_ordered_by_start_time() {
        let (repo, venue_id, artist_id) = seeded().await;
        for start_time in [at(2036, 1, 1), at(2019, 5, 21), at(2035, 4, 8)] {
            let draft = ShowDraft {
                artist_id,
                venue_id,
                start_time,
            };
            repo.create_show(&draft).await.unwrap();
        }

        let times: Vec<NaiveDateTime> =
            repo.list_shows().await.unwrap().iter().map(|s| s.start_time).collect();
        assert_eq!(times, vec![at(2019, 5, 21), at(2035, 4, 8), at(2036, 1, 1)]);
    }
}
