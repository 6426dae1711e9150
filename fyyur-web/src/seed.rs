//! Demo catalog
//!
//! Sample venues, artists and shows for a fresh database. Seeding only runs
//! against an empty catalog.

use fyyur_common::db::{
    insert_artist, insert_show, insert_venue, ArtistDraft, ShowDraft, VenueDraft,
};
use fyyur_common::time::parse_start_time;
use fyyur_common::{CatalogRepository, Result};
use tracing::info;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn venues() -> Vec<VenueDraft> {
    vec![
        VenueDraft {
            name: "The Musical Hop".to_string(),
            genres: strings(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]),
            address: "1015 Folsom Street".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "123-123-1234".to_string(),
            website: Some("https://www.themusicalhop.com".to_string()),
            facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
            seeking_talent: true,
            seeking_description: Some(
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .to_string(),
            ),
            image_link:
                "https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400&q=60"
                    .to_string(),
        },
        VenueDraft {
            name: "The Dueling Pianos Bar".to_string(),
            genres: strings(&["Classical", "R&B", "Hip-Hop"]),
            address: "335 Delancey Street".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: "914-003-1132".to_string(),
            website: Some("https://www.theduelingpianos.com".to_string()),
            facebook_link: "https://www.facebook.com/theduelingpianos".to_string(),
            seeking_talent: false,
            seeking_description: None,
            image_link:
                "https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=750&q=80"
                    .to_string(),
        },
        VenueDraft {
            name: "Park Square Live Music & Coffee".to_string(),
            genres: strings(&["Rock n Roll", "Jazz", "Classical", "Folk"]),
            address: "34 Whiskey Moore Ave".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "415-000-1234".to_string(),
            website: Some("https://www.parksquarelivemusicandcoffee.com".to_string()),
            facebook_link: "https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string(),
            seeking_talent: false,
            seeking_description: None,
            image_link:
                "https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=747&q=80"
                    .to_string(),
        },
    ]
}

fn artists() -> Vec<ArtistDraft> {
    vec![
        ArtistDraft {
            name: "Guns N Petals".to_string(),
            genres: strings(&["Rock n Roll"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            website: Some("https://www.gunsnpetalsband.com".to_string()),
            facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows to perform at in the San Francisco Bay Area!".to_string(),
            ),
            image_link:
                "https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300&q=80"
                    .to_string(),
        },
        ArtistDraft {
            name: "Matt Quevedo".to_string(),
            genres: strings(&["Jazz"]),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: "300-400-5000".to_string(),
            website: None,
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".to_string()),
            seeking_venue: false,
            seeking_description: None,
            image_link:
                "https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334&q=80"
                    .to_string(),
        },
        ArtistDraft {
            name: "The Wild Sax Band".to_string(),
            genres: strings(&["Jazz", "Classical"]),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "432-325-5432".to_string(),
            website: None,
            facebook_link: None,
            seeking_venue: false,
            seeking_description: None,
            image_link:
                "https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794&q=80"
                    .to_string(),
        },
    ]
}

type ShowEntry = (usize, usize, &'static str);

/// `(venue index, artist index, start time)` into the lists above
const SHOWS: &[ShowEntry] = &[
    (0, 0, "2019-05-21 21:30:00"),
    (2, 1, "2019-06-15 23:00:00"),
    (2, 2, "2035-04-01 20:00:00"),
    (2, 2, "2035-04-08 20:00:00"),
    (2, 2, "2035-04-15 20:00:00"),
];

/// Insert the demo catalog when the store is empty
///
/// Returns `false` without writing anything if any venue or artist exists.
/// All records go in through one transaction, so a failure leaves the
/// catalog empty.
pub async fn seed_demo_data(catalog: &CatalogRepository) -> Result<bool> {
    if !catalog.is_empty().await? {
        info!("Catalog already has data, skipping demo seed");
        return Ok(false);
    }

    insert_demo_records(catalog, SHOWS).await?;
    Ok(true)
}

async fn insert_demo_records(catalog: &CatalogRepository, shows: &[ShowEntry]) -> Result<()> {
    let mut tx = catalog.pool().begin().await?;

    let mut venue_ids = Vec::new();
    for venue in venues() {
        venue_ids.push(insert_venue(&mut tx, &venue).await?);
    }

    let mut artist_ids = Vec::new();
    for artist in artists() {
        artist_ids.push(insert_artist(&mut tx, &artist).await?);
    }

    for &(venue, artist, start_time) in shows {
        let draft = ShowDraft {
            artist_id: artist_ids[artist],
            venue_id: venue_ids[venue],
            start_time: parse_start_time(start_time)?,
        };
        insert_show(&mut tx, &draft).await?;
    }

    tx.commit().await?;

    info!(
        "Seeded demo catalog: {} venues, {} artists, {} shows",
        venue_ids.len(),
        artist_ids.len(),
        shows.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_common::db::init_memory_database;
    use fyyur_common::validation::{validate_artist, validate_venue};

    #[test]
    fn test_demo_records_pass_validation() {
        for venue in venues() {
            validate_venue(&venue).unwrap();
        }
        for artist in artists() {
            validate_artist(&artist).unwrap();
        }
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let catalog = CatalogRepository::new(init_memory_database().await.unwrap());

        assert!(seed_demo_data(&catalog).await.unwrap());
        assert!(!seed_demo_data(&catalog).await.unwrap());

        assert_eq!(catalog.list_venues().await.unwrap().len(), 3);
        assert_eq!(catalog.list_artists().await.unwrap().len(), 3);
        assert_eq!(catalog.count_shows().await.unwrap(), SHOWS.len() as i64);
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_catalog_empty() {
        let catalog = CatalogRepository::new(init_memory_database().await.unwrap());
        let shows: [ShowEntry; 2] = [(0, 0, "2035-04-01 20:00:00"), (1, 1, "not a time")];

        assert!(insert_demo_records(&catalog, &shows).await.is_err());

        assert!(catalog.is_empty().await.unwrap());
        assert_eq!(catalog.count_shows().await.unwrap(), 0);
    }
}
