//! Submitted form fields
//!
//! Forms arrive as `application/x-www-form-urlencoded` pairs. Genres come
//! from a multi-select, so a field may repeat; checkboxes follow browser
//! semantics, where an unchecked box sends nothing.

use fyyur_common::db::{ArtistDraft, ShowDraft, VenueDraft};
use fyyur_common::time::parse_start_time;
use fyyur_common::{Error, Result};
use serde::Deserialize;

/// Raw name/value pairs from one form submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Trimmed value, empty when absent
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Trimmed value, `None` when absent or blank
    pub fn optional(&self, name: &str) -> Option<String> {
        Some(self.text(name)).filter(|v| !v.is_empty())
    }

    /// Every non-blank value submitted under `name`, in submission order
    pub fn all(&self, name: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Checkbox: present with any value means checked
    pub fn checkbox(&self, name: &str) -> bool {
        self.0.iter().any(|(key, _)| key == name)
    }
}

pub fn venue_draft(fields: &FormFields) -> VenueDraft {
    VenueDraft {
        name: fields.text("name"),
        genres: fields.all("genres"),
        address: fields.text("address"),
        city: fields.text("city"),
        state: fields.text("state"),
        phone: fields.text("phone"),
        website: fields.optional("website"),
        facebook_link: fields.text("facebook_link"),
        seeking_talent: fields.checkbox("seeking_talent"),
        seeking_description: fields.optional("seeking_description"),
        image_link: fields.text("image_link"),
    }
}

pub fn artist_draft(fields: &FormFields) -> ArtistDraft {
    ArtistDraft {
        name: fields.text("name"),
        genres: fields.all("genres"),
        city: fields.text("city"),
        state: fields.text("state"),
        phone: fields.text("phone"),
        website: fields.optional("website"),
        facebook_link: fields.optional("facebook_link"),
        seeking_venue: fields.checkbox("seeking_venue"),
        seeking_description: fields.optional("seeking_description"),
        image_link: fields.text("image_link"),
    }
}

fn id_field(fields: &FormFields, name: &str) -> Result<i64> {
    let raw = fields.text(name);
    raw.parse()
        .map_err(|_| Error::Validation(format!("{} '{}' is not a valid id", name, raw)))
}

pub fn show_draft(fields: &FormFields) -> Result<ShowDraft> {
    Ok(ShowDraft {
        artist_id: id_field(fields, "artist_id")?,
        venue_id: id_field(fields, "venue_id")?,
        start_time: parse_start_time(&fields.text("start_time"))?,
    })
}

/// `search_term` of the search box
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue_fields() -> Vec<(&'static str, &'static str)> {
        vec![
            ("name", " The Musical Hop "),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("genres", ""),
            ("image_link", "https://images.example.com/hop.jpg"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("website", ""),
        ]
    }

    #[test]
    fn test_absent_checkbox_is_false() {
        let draft = venue_draft(&FormFields::new(venue_fields()));
        assert!(!draft.seeking_talent);
    }

    #[test]
    fn test_present_checkbox_is_true_regardless_of_value() {
        for value in ["y", "on", "", "false"] {
            let mut pairs = venue_fields();
            pairs.push(("seeking_talent", value));
            let draft = venue_draft(&FormFields::new(pairs));
            assert!(draft.seeking_talent, "value {:?} should count as checked", value);
        }
    }

    #[test]
    fn test_repeated_genres_collected_in_order() {
        let draft = venue_draft(&FormFields::new(venue_fields()));
        assert_eq!(draft.genres, vec!["Jazz", "Reggae"]);
    }

    #[test]
    fn test_blank_optional_is_none_and_text_trimmed() {
        let draft = venue_draft(&FormFields::new(venue_fields()));
        assert_eq!(draft.name, "The Musical Hop");
        assert_eq!(draft.website, None);
        assert_eq!(draft.seeking_description, None);
    }

    #[test]
    fn test_artist_checkbox_and_optional_links() {
        let fields = FormFields::new([
            ("name", "Guns N Petals"),
            ("seeking_venue", "y"),
            ("facebook_link", "https://www.facebook.com/GunsNPetals"),
        ]);
        let draft = artist_draft(&fields);
        assert!(draft.seeking_venue);
        assert_eq!(draft.facebook_link.as_deref(), Some("https://www.facebook.com/GunsNPetals"));
        assert_eq!(draft.website, None);
    }

    #[test]
    fn test_show_draft_parses_ids_and_time() {
        let fields = FormFields::new([
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]);
        let draft = show_draft(&fields).unwrap();
        assert_eq!(draft.artist_id, 4);
        assert_eq!(draft.venue_id, 1);
        assert_eq!(draft.start_time.to_string(), "2035-04-01 20:00:00");
    }

    #[test]
    fn test_show_draft_rejects_non_numeric_id() {
        let fields = FormFields::new([
            ("artist_id", "four"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]);
        assert!(matches!(show_draft(&fields), Err(Error::Validation(_))));
    }
}
