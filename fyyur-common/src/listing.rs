//! Listing aggregation
//!
//! Pure transformations from catalog rows into the records every page
//! renders: venues grouped by city, name search with upcoming-show counts,
//! and per-venue/per-artist show histories split into past and upcoming.
//!
//! One temporal rule is shared by every operation: a show is upcoming iff
//! `start_time > now`. A show starting exactly at `now` is past.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::{Artist, Show, ShowRow, Venue};
use crate::time::format_start_time;

/// True iff a show starting at `start_time` has not started yet
pub fn is_upcoming(start_time: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    start_time > now
}

/// Anything with a start time that can be classified as past or upcoming
pub trait Scheduled {
    fn start_time(&self) -> &NaiveDateTime;
}

impl Scheduled for Show {
    fn start_time(&self) -> &NaiveDateTime {
        &self.start_time
    }
}

impl Scheduled for ShowRow {
    fn start_time(&self) -> &NaiveDateTime {
        &self.start_time
    }
}

/// Split shows into `(past, upcoming)`, keeping input order within each side
pub fn partition_shows<T, I>(shows: I, now: &NaiveDateTime) -> (Vec<T>, Vec<T>)
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    shows
        .into_iter()
        .partition(|show| !is_upcoming(show.start_time(), now))
}

/// Which side of a show an upcoming-show count is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowSide {
    Venue,
    Artist,
}

impl ShowSide {
    fn id_of(self, show: &Show) -> i64 {
        match self {
            ShowSide::Venue => show.venue_id,
            ShowSide::Artist => show.artist_id,
        }
    }
}

/// Upcoming-show count for every venue or artist id referenced by `shows`
///
/// Ids with no upcoming show are absent from the map.
pub fn upcoming_counts(shows: &[Show], side: ShowSide, now: &NaiveDateTime) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for show in shows.iter().filter(|s| is_upcoming(&s.start_time, now)) {
        *counts.entry(side.id_of(show)).or_insert(0) += 1;
    }
    counts
}

/// `{id, name, num_upcoming_shows}` entry used by listings and search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// One city/state group on the venues page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntitySummary>,
}

/// Group venues by `(city, state)`
///
/// Groups appear in the order their city is first seen in `venues`; venues
/// inside a group are ordered by id. A city without venues cannot appear.
pub fn group_venues_by_city(
    venues: &[Venue],
    shows: &[Show],
    now: &NaiveDateTime,
) -> Vec<CityArea> {
    let counts = upcoming_counts(shows, ShowSide::Venue, now);
    let mut areas: Vec<CityArea> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for venue in venues {
        let key = (venue.city.as_str(), venue.state.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            areas.push(CityArea {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: Vec::new(),
            });
            areas.len() - 1
        });

        areas[slot].venues.push(EntitySummary {
            id: venue.id,
            name: venue.name.clone(),
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
        });
    }

    for area in &mut areas {
        area.venues.sort_by_key(|v| v.id);
    }

    areas
}

/// `{count, data}` result of a name search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<EntitySummary>,
}

/// Case-insensitive substring match; an empty term matches every name
///
/// The term is matched as given, whitespace included.
pub fn name_matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

fn search<'a>(
    entities: impl Iterator<Item = (i64, &'a str)>,
    counts: &HashMap<i64, usize>,
    term: &str,
) -> SearchResults {
    let data: Vec<EntitySummary> = entities
        .filter(|(_, name)| name_matches(name, term))
        .map(|(id, name)| EntitySummary {
            id,
            name: name.to_string(),
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
        })
        .collect();

    SearchResults {
        count: data.len(),
        data,
    }
}

/// Venues whose name contains `term`, in store order
pub fn search_venues(
    venues: &[Venue],
    shows: &[Show],
    term: &str,
    now: &NaiveDateTime,
) -> SearchResults {
    let counts = upcoming_counts(shows, ShowSide::Venue, now);
    search(venues.iter().map(|v| (v.id, v.name.as_str())), &counts, term)
}

/// Artists whose name contains `term`, in store order
pub fn search_artists(
    artists: &[Artist],
    shows: &[Show],
    term: &str,
    now: &NaiveDateTime,
) -> SearchResults {
    let counts = upcoming_counts(shows, ShowSide::Artist, now);
    search(artists.iter().map(|a| (a.id, a.name.as_str())), &counts, term)
}

/// Artist side of a show, as listed on a venue page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl From<ShowRow> for ArtistShow {
    fn from(row: ShowRow) -> Self {
        Self {
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: format_start_time(&row.start_time),
        }
    }
}

/// Venue side of a show, as listed on an artist page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

impl From<ShowRow> for VenueShow {
    fn from(row: ShowRow) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            start_time: format_start_time(&row.start_time),
        }
    }
}

/// Venue page: venue fields plus its show history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Artist page: artist fields plus its show history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Build the venue page from the venue and its joined show rows
pub fn venue_detail(venue: Venue, shows: Vec<ShowRow>, now: &NaiveDateTime) -> VenueDetail {
    let (past, upcoming) = partition_shows(shows, now);
    let past_shows: Vec<ArtistShow> = past.into_iter().map(ArtistShow::from).collect();
    let upcoming_shows: Vec<ArtistShow> = upcoming.into_iter().map(ArtistShow::from).collect();

    VenueDetail {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

/// Build the artist page from the artist and its joined show rows
pub fn artist_detail(artist: Artist, shows: Vec<ShowRow>, now: &NaiveDateTime) -> ArtistDetail {
    let (past, upcoming) = partition_shows(shows, now);
    let past_shows: Vec<VenueShow> = past.into_iter().map(VenueShow::from).collect();
    let upcoming_shows: Vec<VenueShow> = upcoming.into_iter().map(VenueShow::from).collect();

    ArtistDetail {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}

/// `{id, name}` entry on the artists page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}

pub fn artist_summaries(artists: &[Artist]) -> Vec<ArtistSummary> {
    artists
        .iter()
        .map(|a| ArtistSummary {
            id: a.id,
            name: a.name.clone(),
        })
        .collect()
}

/// One entry on the shows page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSummary {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl From<ShowRow> for ShowSummary {
    fn from(row: ShowRow) -> Self {
        Self {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: format_start_time(&row.start_time),
        }
    }
}

pub fn show_summaries(rows: Vec<ShowRow>) -> Vec<ShowSummary> {
    rows.into_iter().map(ShowSummary::from).collect()
}
