//! Show pages

use axum::{extract::State, response::Html, Form};
use fyyur_common::listing::{show_summaries, ShowSummary};
use fyyur_common::time::{now, DateStyle};

use super::home;
use super::layout::{display_time, item_row, page, text_input};
use crate::error::PageError;
use crate::forms::FormFields;
use crate::submissions::submit_new_show;
use crate::AppState;

fn render_list(shows: &[ShowSummary]) -> String {
    let mut body = String::from("<h1>Shows</h1>");
    if shows.is_empty() {
        body.push_str(r#"<p class="muted">No shows listed yet.</p>"#);
    }
    for show in shows {
        let subtitle = format!(
            "{} at {}",
            display_time(&show.start_time, DateStyle::Medium),
            show.venue_name
        );
        body.push_str(&item_row(
            &format!("/artists/{}", show.artist_id),
            &show.artist_image_link,
            &show.artist_name,
            &subtitle,
        ));
    }
    page("Shows", None, &body)
}

/// GET /shows
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let rows = state.catalog.show_rows().await?;
    Ok(Html(render_list(&show_summaries(rows))))
}

/// GET /shows/create
pub async fn create_form() -> Html<String> {
    let default_start = now().format("%Y-%m-%d %H:%M:%S").to_string();
    let body = format!(
        r#"<h1>List a new show</h1>
<form method="post" action="/shows/create">
{artist}{venue}{start}
<p><input type="submit" value="Create Show"></p>
</form>"#,
        artist = text_input("artist_id", "Artist ID", ""),
        venue = text_input("venue_id", "Venue ID", ""),
        start = text_input("start_time", "Start time (YYYY-MM-DD HH:MM:SS)", &default_start),
    );
    Html(page("New Show", None, &body))
}

/// POST /shows/create
pub async fn create_submission(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Html<String> {
    let flash = submit_new_show(&state.catalog, &fields).await;
    Html(home::render(Some(&flash)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_shows_medium_dates_and_escapes_names() {
        let shows = vec![ShowSummary {
            venue_id: 3,
            venue_name: "Park Square Live Music & Coffee".to_string(),
            artist_id: 6,
            artist_name: "The Wild Sax Band".to_string(),
            artist_image_link: "https://images.example.com/sax.jpg".to_string(),
            start_time: "2035-04-01T20:00:00".to_string(),
        }];
        let html = render_list(&shows);

        assert!(html.contains("Sun 04, 01, 2035 8:00PM at Park Square Live Music &amp; Coffee"));
        assert!(html.contains(r#"href="/artists/6""#));
    }

    #[test]
    fn test_empty_list() {
        assert!(render_list(&[]).contains("No shows listed yet."));
    }
}
