//! Home page

use axum::response::Html;

use super::layout::{page, Flash};

/// Home page, optionally showing the outcome of a submission
pub fn render(flash: Option<&Flash>) -> String {
    page(
        "Home",
        flash,
        r#"<h1>Fyyur</h1>
<p>Discover venues and artists, and book the shows that bring them together.</p>
<p><a href="/venues">Find a venue</a> &middot;
<a href="/artists">Find an artist</a> &middot;
<a href="/shows">Upcoming shows</a></p>"#,
    )
}

/// GET /
pub async fn index() -> Html<String> {
    Html(render(None))
}
