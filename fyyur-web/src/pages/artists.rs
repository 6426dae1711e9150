//! Artist pages

use std::fmt::Write;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use fyyur_common::db::ArtistDraft;
use fyyur_common::listing::{
    artist_detail, artist_summaries, search_artists, ArtistDetail, VenueShow,
};
use fyyur_common::time::{now, DateStyle};

use super::{home, RecordId};
use super::layout::{
    checkbox, display_time, escape, external_link, genre_list, genre_select, item_row, page,
    search_box, state_select, text_input, textarea,
};
use crate::error::PageError;
use crate::forms::{FormFields, SearchForm};
use crate::submissions::{submit_artist_edit, submit_new_artist};
use crate::AppState;

const SEARCH_PLACEHOLDER: &str = "Find an artist";

/// GET /artists
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let artists = state.catalog.list_artists().await?;

    let mut body = search_box("/artists/search", SEARCH_PLACEHOLDER, "");
    body.push_str("<ul>");
    for artist in artist_summaries(&artists) {
        let _ = write!(
            body,
            r#"<li><a href="/artists/{}">{}</a></li>"#,
            artist.id,
            escape(&artist.name)
        );
    }
    body.push_str("</ul>");

    Ok(Html(page("Artists", None, &body)))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let artists = state.catalog.list_artists().await?;
    let shows = state.catalog.list_shows().await?;
    let results = search_artists(&artists, &shows, &form.search_term, &now());

    let mut body = search_box("/artists/search", SEARCH_PLACEHOLDER, &form.search_term);
    let _ = write!(
        body,
        "<h3>Number of search results for \"{}\": {}</h3><ul>",
        escape(&form.search_term),
        results.count
    );
    for artist in &results.data {
        let _ = write!(
            body,
            r#"<li><a href="/artists/{}">{}</a> <span class="muted">{} upcoming</span></li>"#,
            artist.id,
            escape(&artist.name),
            artist.num_upcoming_shows
        );
    }
    body.push_str("</ul>");

    Ok(Html(page("Artist Search", None, &body)))
}

fn show_section(heading: &str, shows: &[VenueShow]) -> String {
    let mut html = format!("<h3>{} ({})</h3>", heading, shows.len());
    for show in shows {
        html.push_str(&item_row(
            &format!("/venues/{}", show.venue_id),
            &show.venue_image_link,
            &show.venue_name,
            &display_time(&show.start_time, DateStyle::Full),
        ));
    }
    html
}

fn render_detail(detail: &ArtistDetail) -> String {
    let artist = &detail.artist;
    let seeking = if artist.seeking_venue {
        format!(
            "<p><strong>Currently seeking performance venues</strong></p><p>{}</p>",
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="muted">Not currently seeking performance venues</p>"#.to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="muted">ID: {id}</p>
<p>{genres}</p>
<p>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}{seeking}
<img src="{image}" alt="{name}" style="max-width: 100%;">
{past}{upcoming}
<p><a href="/artists/{id}/edit">Edit artist</a></p>"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_list(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = external_link("Website", artist.website.as_deref()),
        facebook = external_link("Facebook", artist.facebook_link.as_deref()),
        seeking = seeking,
        image = escape(&artist.image_link),
        past = show_section("Past Shows", &detail.past_shows),
        upcoming = show_section("Upcoming Shows", &detail.upcoming_shows),
    );

    page(&artist.name, None, &body)
}

/// GET /artists/:artist_id
pub async fn detail(
    State(state): State<AppState>,
    RecordId(artist_id): RecordId,
) -> Result<Html<String>, PageError> {
    let artist = state.catalog.get_artist(artist_id).await?;
    let rows = state.catalog.show_rows_for_artist(artist_id).await?;
    let detail = artist_detail(artist, rows, &now());
    Ok(Html(render_detail(&detail)))
}

/// Artist form, blank for a new artist or filled from the stored record
pub fn render_form(heading: &str, action: &str, draft: &ArtistDraft) -> String {
    let body = format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
{name}{city}{state}{phone}{genres}{facebook}{image}{website}{seeking}{description}
<p><input type="submit" value="{heading}"></p>
</form>"#,
        heading = escape(heading),
        action = escape(action),
        name = text_input("name", "Name", &draft.name),
        city = text_input("city", "City", &draft.city),
        state = state_select(&draft.state),
        phone = text_input("phone", "Phone", &draft.phone),
        genres = genre_select(&draft.genres),
        facebook = text_input(
            "facebook_link",
            "Facebook link",
            draft.facebook_link.as_deref().unwrap_or_default()
        ),
        image = text_input("image_link", "Image link", &draft.image_link),
        website = text_input("website", "Website", draft.website.as_deref().unwrap_or_default()),
        seeking = checkbox("seeking_venue", "Seeking venues", draft.seeking_venue),
        description = textarea(
            "seeking_description",
            "Seeking description",
            draft.seeking_description.as_deref().unwrap_or_default()
        ),
    );

    page(heading, None, &body)
}

/// GET /artists/create
pub async fn create_form() -> Html<String> {
    Html(render_form("List a new artist", "/artists/create", &ArtistDraft::default()))
}

/// POST /artists/create
pub async fn create_submission(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Html<String> {
    let flash = submit_new_artist(&state.catalog, &fields).await;
    Html(home::render(Some(&flash)))
}

/// GET /artists/:artist_id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RecordId(artist_id): RecordId,
) -> Result<Html<String>, PageError> {
    let artist = state.catalog.get_artist(artist_id).await?;
    Ok(Html(render_form(
        "Edit artist",
        &format!("/artists/{}/edit", artist_id),
        &artist.to_draft(),
    )))
}

/// POST /artists/:artist_id/edit
pub async fn edit_submission(
    State(state): State<AppState>,
    RecordId(artist_id): RecordId,
    Form(fields): Form<FormFields>,
) -> Response {
    match submit_artist_edit(&state.catalog, artist_id, &fields).await {
        Ok(id) => Redirect::to(&format!("/artists/{}", id)).into_response(),
        Err(flash) => Html(home::render(Some(&flash))).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_common::db::Artist;

    fn artist() -> Artist {
        Artist {
            id: 4,
            name: "Guns N Petals".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            website: Some("https://www.gunsnpetalsband.com".to_string()),
            facebook_link: None,
            seeking_venue: true,
            seeking_description: Some(
                "Looking for shows in the San Francisco Bay Area!".to_string(),
            ),
            image_link: "https://images.example.com/gnp.jpg".to_string(),
        }
    }

    #[test]
    fn test_detail_lists_shows_with_dates() {
        let detail = ArtistDetail {
            artist: artist(),
            past_shows: vec![VenueShow {
                venue_id: 1,
                venue_name: "The Musical Hop".to_string(),
                venue_image_link: "https://images.example.com/hop.jpg".to_string(),
                start_time: "2019-05-21T21:30:00".to_string(),
            }],
            upcoming_shows: vec![],
            past_shows_count: 1,
            upcoming_shows_count: 0,
        };
        let html = render_detail(&detail);

        assert!(html.contains("Past Shows (1)"));
        assert!(html.contains("Upcoming Shows (0)"));
        assert!(html.contains("Tuesday May, 21, 2019 at 9:30PM"));
        assert!(html.contains(r#"href="/venues/1""#));
        assert!(html.contains("Currently seeking performance venues"));
        assert!(!html.contains("Facebook"));
    }

    #[test]
    fn test_edit_form_is_prepopulated() {
        let html = render_form("Edit artist", "/artists/4/edit", &artist().to_draft());
        assert!(html.contains(r#"value="Guns N Petals""#));
        assert!(html.contains(r#"<option value="Rock n Roll" selected>"#));
        assert!(html.contains(r#"value="https://www.gunsnpetalsband.com""#));
        assert!(html.contains(r#"name="seeking_venue" value="y" checked"#));
    }
}
