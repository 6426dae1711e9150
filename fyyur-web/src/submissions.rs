//! Create and edit submissions
//!
//! Each submission validates the submitted values, persists them in one
//! transaction and turns the result into a user-facing message. Failures are
//! recovered here: the caller always gets something renderable back.

use fyyur_common::validation::{validate_artist, validate_venue};
use fyyur_common::{CatalogRepository, Error};
use tracing::warn;

use crate::forms::{artist_draft, show_draft, venue_draft, FormFields};
use crate::pages::layout::Flash;

/// Result of an edit: the id to redirect to, or the failure message
pub type EditOutcome = Result<i64, Flash>;

/// Text shown for a failed create/update, naming the entity and the cause
fn failure(kind: &str, name: &str, action: &str, err: &Error) -> Flash {
    Flash::Error(format!(
        "An error occurred. {} {} could not be {}. {}",
        kind, name, action, err
    ))
}

pub async fn submit_new_venue(catalog: &CatalogRepository, fields: &FormFields) -> Flash {
    let draft = venue_draft(fields);
    let result = match validate_venue(&draft) {
        Ok(()) => catalog.create_venue(&draft).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Flash::Success(format!("Venue {} was successfully listed!", draft.name)),
        Err(e) => {
            warn!("Venue '{}' was not listed: {}", draft.name, e);
            failure("Venue", &draft.name, "listed", &e)
        }
    }
}

pub async fn submit_venue_edit(
    catalog: &CatalogRepository,
    id: i64,
    fields: &FormFields,
) -> EditOutcome {
    let draft = venue_draft(fields);
    let result = match validate_venue(&draft) {
        Ok(()) => catalog.update_venue(id, &draft).await,
        Err(e) => Err(e),
    };

    result.map(|()| id).map_err(|e| {
        warn!(venue_id = id, "Venue '{}' was not updated: {}", draft.name, e);
        failure("Venue", &draft.name, "updated", &e)
    })
}

pub async fn submit_new_artist(catalog: &CatalogRepository, fields: &FormFields) -> Flash {
    let draft = artist_draft(fields);
    let result = match validate_artist(&draft) {
        Ok(()) => catalog.create_artist(&draft).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Flash::Success(format!("Artist {} was successfully listed!", draft.name)),
        Err(e) => {
            warn!("Artist '{}' was not listed: {}", draft.name, e);
            failure("Artist", &draft.name, "listed", &e)
        }
    }
}

pub async fn submit_artist_edit(
    catalog: &CatalogRepository,
    id: i64,
    fields: &FormFields,
) -> EditOutcome {
    let draft = artist_draft(fields);
    let result = match validate_artist(&draft) {
        Ok(()) => catalog.update_artist(id, &draft).await,
        Err(e) => Err(e),
    };

    result.map(|()| id).map_err(|e| {
        warn!(artist_id = id, "Artist '{}' was not updated: {}", draft.name, e);
        failure("Artist", &draft.name, "updated", &e)
    })
}

pub async fn submit_new_show(catalog: &CatalogRepository, fields: &FormFields) -> Flash {
    let result = match show_draft(fields) {
        Ok(draft) => catalog.create_show(&draft).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Flash::Success("Show was successfully listed!".to_string()),
        Err(Error::Precondition(detail)) => {
            warn!("Show was not listed: {}", detail);
            Flash::Error(
                "An error occurred. Show could not be listed. Invalid artist or venue id."
                    .to_string(),
            )
        }
        Err(e) => {
            warn!("Show was not listed: {}", e);
            Flash::Error("An error occurred. Show could not be listed.".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_common::db::init_memory_database;

    async fn catalog() -> CatalogRepository {
        CatalogRepository::new(init_memory_database().await.unwrap())
    }

    fn venue_form(extra: &[(&'static str, &'static str)]) -> FormFields {
        let mut pairs = vec![
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("image_link", "https://images.example.com/hop.jpg"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
        ];
        pairs.extend_from_slice(extra);
        FormFields::new(pairs)
    }

    #[tokio::test]
    async fn test_new_venue_without_checkbox_is_not_seeking() {
        let catalog = catalog().await;
        let flash = submit_new_venue(&catalog, &venue_form(&[])).await;
        assert_eq!(flash, Flash::Success("Venue The Musical Hop was successfully listed!".into()));

        let venues = catalog.list_venues().await.unwrap();
        assert_eq!(venues.len(), 1);
        assert!(!venues[0].seeking_talent);
    }

    #[tokio::test]
    async fn test_invalid_venue_names_entity_and_cause() {
        let catalog = catalog().await;
        let flash = submit_new_venue(&catalog, &venue_form(&[("genres", "   ")])).await;
        assert!(!flash.is_error(), "blank extra genre is dropped, Jazz remains");

        let fields = FormFields::new([("name", "Nowhere Hall"), ("state", "CA")]);
        let flash = submit_new_venue(&catalog, &fields).await;
        assert!(flash.is_error());
        assert!(flash.message().contains("Venue Nowhere Hall could not be listed"));
        assert!(flash.message().contains("city is required"));
        assert_eq!(catalog.list_venues().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_edit_leaves_venue_unchanged() {
        let catalog = catalog().await;
        submit_new_venue(&catalog, &venue_form(&[("seeking_talent", "y")])).await;
        let id = catalog.list_venues().await.unwrap()[0].id;
        let before = catalog.get_venue(id).await.unwrap();

        let fields = FormFields::new([("name", "Renamed"), ("phone", "not a phone")]);
        let outcome = submit_venue_edit(&catalog, id, &fields).await;
        assert!(matches!(outcome, Err(Flash::Error(_))));

        assert_eq!(catalog.get_venue(id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_edit_unknown_artist_fails() {
        let catalog = catalog().await;
        let fields = FormFields::new([
            ("name", "Matt Quevedo"),
            ("city", "New York"),
            ("state", "NY"),
            ("phone", "300-400-5000"),
            ("genres", "Jazz"),
            ("image_link", "https://images.example.com/matt.jpg"),
        ]);
        let outcome = submit_artist_edit(&catalog, 12, &fields).await;
        let flash = outcome.unwrap_err();
        assert!(flash.message().contains("Artist Matt Quevedo could not be updated"));
        assert!(flash.message().contains("Not found"));
    }

    #[tokio::test]
    async fn test_show_with_unknown_ids_reports_invalid_ids() {
        let catalog = catalog().await;
        let fields = FormFields::new([
            ("artist_id", "1"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]);
        let flash = submit_new_show(&catalog, &fields).await;
        assert!(flash.is_error());
        assert!(flash.message().contains("Invalid artist or venue id"));
        assert_eq!(catalog.count_shows().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_show_with_bad_time_is_generic_failure() {
        let catalog = catalog().await;
        let fields =
            FormFields::new([("artist_id", "1"), ("venue_id", "1"), ("start_time", "soon")]);
        let flash = submit_new_show(&catalog, &fields).await;
        assert_eq!(flash, Flash::Error("An error occurred. Show could not be listed.".into()));
    }
}
