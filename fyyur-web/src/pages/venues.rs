//! Venue pages

use std::fmt::Write;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use fyyur_common::db::VenueDraft;
use fyyur_common::listing::{
    group_venues_by_city, search_venues, venue_detail, ArtistShow, VenueDetail,
};
use fyyur_common::time::{now, DateStyle};

use super::{home, RecordId};
use super::layout::{
    checkbox, display_time, escape, external_link, genre_list, genre_select, item_row, page,
    search_box, state_select, text_input, textarea,
};
use crate::error::PageError;
use crate::forms::{FormFields, SearchForm};
use crate::submissions::{submit_new_venue, submit_venue_edit};
use crate::AppState;

const SEARCH_PLACEHOLDER: &str = "Find a venue";

/// GET /venues
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let venues = state.catalog.list_venues().await?;
    let shows = state.catalog.list_shows().await?;
    let areas = group_venues_by_city(&venues, &shows, &now());

    let mut body = search_box("/venues/search", SEARCH_PLACEHOLDER, "");
    if areas.is_empty() {
        body.push_str(r#"<p class="muted">No venues listed yet.</p>"#);
    }
    for area in &areas {
        let _ = write!(body, "<h3>{}, {}</h3><ul>", escape(&area.city), escape(&area.state));
        for venue in &area.venues {
            let _ = write!(
                body,
                r#"<li><a href="/venues/{}">{}</a> <span class="muted">{} upcoming</span></li>"#,
                venue.id,
                escape(&venue.name),
                venue.num_upcoming_shows
            );
        }
        body.push_str("</ul>");
    }

    Ok(Html(page("Venues", None, &body)))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let venues = state.catalog.list_venues().await?;
    let shows = state.catalog.list_shows().await?;
    let results = search_venues(&venues, &shows, &form.search_term, &now());

    let mut body = search_box("/venues/search", SEARCH_PLACEHOLDER, &form.search_term);
    let _ = write!(
        body,
        "<h3>Number of search results for \"{}\": {}</h3><ul>",
        escape(&form.search_term),
        results.count
    );
    for venue in &results.data {
        let _ = write!(
            body,
            r#"<li><a href="/venues/{}">{}</a> <span class="muted">{} upcoming</span></li>"#,
            venue.id,
            escape(&venue.name),
            venue.num_upcoming_shows
        );
    }
    body.push_str("</ul>");

    Ok(Html(page("Venue Search", None, &body)))
}

fn show_section(heading: &str, shows: &[ArtistShow]) -> String {
    let mut html = format!("<h3>{} ({})</h3>", heading, shows.len());
    for show in shows {
        html.push_str(&item_row(
            &format!("/artists/{}", show.artist_id),
            &show.artist_image_link,
            &show.artist_name,
            &display_time(&show.start_time, DateStyle::Full),
        ));
    }
    html
}

fn render_detail(detail: &VenueDetail) -> String {
    let venue = &detail.venue;
    let seeking = if venue.seeking_talent {
        format!(
            "<p><strong>Currently seeking talent</strong></p><p>{}</p>",
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        )
    } else {
        r#"<p class="muted">Not currently seeking talent</p>"#.to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="muted">ID: {id}</p>
<p>{genres}</p>
<p>{address}<br>{city}, {state}</p>
<p>{phone}</p>
{website}{facebook}{seeking}
<img src="{image}" alt="{name}" style="max-width: 100%;">
{past}{upcoming}
<p><a href="/venues/{id}/edit">Edit venue</a></p>"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_list(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(&venue.phone),
        website = external_link("Website", venue.website.as_deref()),
        facebook = external_link("Facebook", Some(venue.facebook_link.as_str())),
        seeking = seeking,
        image = escape(&venue.image_link),
        past = show_section("Past Shows", &detail.past_shows),
        upcoming = show_section("Upcoming Shows", &detail.upcoming_shows),
    );

    page(&venue.name, None, &body)
}

/// GET /venues/:venue_id
pub async fn detail(
    State(state): State<AppState>,
    RecordId(venue_id): RecordId,
) -> Result<Html<String>, PageError> {
    let venue = state.catalog.get_venue(venue_id).await?;
    let rows = state.catalog.show_rows_for_venue(venue_id).await?;
    let detail = venue_detail(venue, rows, &now());
    Ok(Html(render_detail(&detail)))
}

/// Venue form, blank for a new venue or filled from the stored record
pub fn render_form(heading: &str, action: &str, draft: &VenueDraft) -> String {
    let body = format!(
        r#"<h1>{heading}</h1>
<form method="post" action="{action}">
{name}{city}{state}{address}{phone}{genres}{facebook}{image}{website}{seeking}{description}
<p><input type="submit" value="{heading}"></p>
</form>"#,
        heading = escape(heading),
        action = escape(action),
        name = text_input("name", "Name", &draft.name),
        city = text_input("city", "City", &draft.city),
        state = state_select(&draft.state),
        address = text_input("address", "Address", &draft.address),
        phone = text_input("phone", "Phone", &draft.phone),
        genres = genre_select(&draft.genres),
        facebook = text_input("facebook_link", "Facebook link", &draft.facebook_link),
        image = text_input("image_link", "Image link", &draft.image_link),
        website = text_input("website", "Website", draft.website.as_deref().unwrap_or_default()),
        seeking = checkbox("seeking_talent", "Seeking talent", draft.seeking_talent),
        description = textarea(
            "seeking_description",
            "Seeking description",
            draft.seeking_description.as_deref().unwrap_or_default()
        ),
    );

    page(heading, None, &body)
}

/// GET /venues/create
pub async fn create_form() -> Html<String> {
    Html(render_form("List a new venue", "/venues/create", &VenueDraft::default()))
}

/// POST /venues/create
pub async fn create_submission(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Html<String> {
    let flash = submit_new_venue(&state.catalog, &fields).await;
    Html(home::render(Some(&flash)))
}

/// GET /venues/:venue_id/edit
pub async fn edit_form(
    State(state): State<AppState>,
    RecordId(venue_id): RecordId,
) -> Result<Html<String>, PageError> {
    let venue = state.catalog.get_venue(venue_id).await?;
    Ok(Html(render_form(
        "Edit venue",
        &format!("/venues/{}/edit", venue_id),
        &venue.to_draft(),
    )))
}

/// POST /venues/:venue_id/edit
pub async fn edit_submission(
    State(state): State<AppState>,
    RecordId(venue_id): RecordId,
    Form(fields): Form<FormFields>,
) -> Response {
    match submit_venue_edit(&state.catalog, venue_id, &fields).await {
        Ok(id) => Redirect::to(&format!("/venues/{}", id)).into_response(),
        Err(flash) => Html(home::render(Some(&flash))).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_form_is_prepopulated() {
        let draft = VenueDraft {
            name: "The Dueling Pianos Bar".to_string(),
            genres: vec!["Classical".to_string(), "R&B".to_string()],
            state: "NY".to_string(),
            seeking_talent: true,
            ..Default::default()
        };
        let html = render_form("Edit venue", "/venues/2/edit", &draft);

        assert!(html.contains(r#"value="The Dueling Pianos Bar""#));
        assert!(html.contains(r#"<option value="NY" selected>"#));
        assert!(html.contains(r#"<option value="R&amp;B" selected>"#));
        assert!(html.contains(" checked"));
        assert!(html.contains(r#"action="/venues/2/edit""#));
    }

    #[test]
    fn test_blank_form_has_nothing_checked() {
        let html = render_form("List a new venue", "/venues/create", &VenueDraft::default());
        assert!(!html.contains(" checked"));
        assert!(!html.contains(" selected"));
    }
}
