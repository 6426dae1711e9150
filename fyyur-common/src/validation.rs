//! Validation of submitted venue and artist fields
//!
//! Runs against the values the user actually submitted. All problems are
//! collected and reported together as one `Error::Validation`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::db::{ArtistDraft, VenueDraft};
use crate::{Error, Result};

/// Genre choices offered by the forms; stored genres are free text
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Two-letter state codes accepted in the `state` field
pub const STATE_CHOICES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

// 123-456-7890, (123) 456-7890, 123.456.7890, 1234567890
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}$").expect("valid phone regex"));

#[derive(Default)]
struct Problems(Vec<String>);

impl Problems {
    fn required(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.0.push(format!("{} is required", field));
        }
    }

    fn state(&mut self, value: &str) {
        if !value.trim().is_empty() && !STATE_CHOICES.contains(&value.trim()) {
            self.0.push(format!("state '{}' is not a valid state code", value));
        }
    }

    fn phone(&mut self, value: &str) {
        if !value.trim().is_empty() && !PHONE_RE.is_match(value.trim()) {
            self.0.push(format!("phone '{}' is not a valid phone number", value));
        }
    }

    fn genres(&mut self, genres: &[String]) {
        if genres.is_empty() {
            self.0.push("at least one genre is required".to_string());
        } else if genres.iter().any(|g| g.trim().is_empty()) {
            self.0.push("genres must not be blank".to_string());
        }
    }

    fn link(&mut self, field: &str, value: &str) {
        let value = value.trim();
        if !value.is_empty() && !(value.starts_with("http://") || value.starts_with("https://")) {
            self.0.push(format!("{} must be an http(s) URL", field));
        }
    }

    fn finish(self) -> Result<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(self.0.join("; ")))
        }
    }
}

pub fn validate_venue(draft: &VenueDraft) -> Result<()> {
    let mut problems = Problems::default();

    problems.required("name", &draft.name);
    problems.required("city", &draft.city);
    problems.required("state", &draft.state);
    problems.required("address", &draft.address);
    problems.required("phone", &draft.phone);
    problems.required("image_link", &draft.image_link);
    problems.required("facebook_link", &draft.facebook_link);
    problems.state(&draft.state);
    problems.phone(&draft.phone);
    problems.genres(&draft.genres);
    problems.link("image_link", &draft.image_link);
    problems.link("facebook_link", &draft.facebook_link);
    if let Some(website) = &draft.website {
        problems.link("website", website);
    }

    problems.finish()
}

pub fn validate_artist(draft: &ArtistDraft) -> Result<()> {
    let mut problems = Problems::default();

    problems.required("name", &draft.name);
    problems.required("city", &draft.city);
    problems.required("state", &draft.state);
    problems.required("phone", &draft.phone);
    problems.required("image_link", &draft.image_link);
    problems.state(&draft.state);
    problems.phone(&draft.phone);
    problems.genres(&draft.genres);
    problems.link("image_link", &draft.image_link);
    if let Some(facebook_link) = &draft.facebook_link {
        problems.link("facebook_link", facebook_link);
    }
    if let Some(website) = &draft.website {
        problems.link("website", website);
    }

    problems.finish()
}
