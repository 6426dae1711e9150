//! Shared page chrome and small HTML building blocks

use std::fmt::Write;

use fyyur_common::time::{format_datetime, parse_start_time, DateStyle};
use fyyur_common::validation::{GENRE_CHOICES, STATE_CHOICES};

const STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            margin: 0;
        }
        nav {
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 12px 20px;
            display: flex;
            gap: 20px;
            align-items: center;
        }
        nav a { color: #4a9eff; text-decoration: none; }
        nav form { margin-left: auto; }
        main { padding: 20px; max-width: 960px; margin: 0 auto; }
        .flash { padding: 10px 14px; border-radius: 4px; margin-bottom: 20px; }
        .flash.success { background-color: #1f3d2a; color: #7fd99a; }
        .flash.error { background-color: #4a1f1f; color: #ff8a8a; }
        .item { display: flex; gap: 12px; align-items: center; margin: 6px 0; }
        .item img { width: 48px; height: 48px; object-fit: cover; border-radius: 4px; }
        .muted { color: #888; }
        label { display: block; margin-top: 10px; }
        input, select, textarea {
            width: 100%; padding: 6px; background: #2a2a2a; color: #e0e0e0;
            border: 1px solid #3a3a3a;
        }
        input[type=checkbox] { width: auto; }
"#;

/// Outcome message shown at the top of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn message(&self) -> &str {
        match self {
            Flash::Success(msg) | Flash::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Flash::Error(_))
    }
}

/// Escape text for HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the site layout
pub fn page(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = flash
        .map(|f| {
            format!(
                r#"<div class="flash {}">{}</div>"#,
                if f.is_error() { "error" } else { "success" },
                escape(f.message())
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <style>{style}</style>
</head>
<body>
    <nav>
        <a href="/"><strong>Fyyur</strong></a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <a href="/venues/create">Post a venue</a>
        <a href="/artists/create">Post an artist</a>
        <a href="/shows/create">Post a show</a>
    </nav>
    <main>
        {flash}
        {body}
    </main>
</body>
</html>"#,
        title = escape(title),
        style = STYLE,
        flash = flash_html,
        body = body,
    )
}

pub fn not_found_page() -> String {
    page(
        "Not Found",
        None,
        r#"<h1>404</h1>
<p>Sorry, the page you were looking for could not be found.</p>
<p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    page(
        "Server Error",
        None,
        r#"<h1>500</h1>
<p>Something went wrong on our end. Please try again later.</p>
<p><a href="/">Back home</a></p>"#,
    )
}

/// Search box posting `search_term` to `action`
pub fn search_box(action: &str, placeholder: &str, term: &str) -> String {
    format!(
        r#"<form method="post" action="{}">
<input type="search" name="search_term" placeholder="{}" value="{}">
</form>"#,
        escape(action),
        escape(placeholder),
        escape(term)
    )
}

pub fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}">"#,
        name = name,
        label = escape(label),
        value = escape(value)
    )
}

pub fn textarea(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<textarea id="{name}" name="{name}">{value}</textarea>"#,
        name = name,
        label = escape(label),
        value = escape(value)
    )
}

pub fn checkbox(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{}" value="y"{}> {}</label>"#,
        name,
        if checked { " checked" } else { "" },
        escape(label)
    )
}

pub fn state_select(selected: &str) -> String {
    let mut html =
        String::from(r#"<label for="state">State</label><select id="state" name="state">"#);
    for state in STATE_CHOICES {
        let _ = write!(
            html,
            r#"<option value="{0}"{1}>{0}</option>"#,
            state,
            if *state == selected { " selected" } else { "" }
        );
    }
    html.push_str("</select>");
    html
}

/// Multi-select of genres; stored genres outside the choice list are kept
pub fn genre_select(selected: &[String]) -> String {
    let mut html = String::from(
        r#"<label for="genres">Genres</label>
<select id="genres" name="genres" multiple>"#,
    );
    let mut options: Vec<&str> = GENRE_CHOICES.to_vec();
    options.extend(
        selected
            .iter()
            .map(String::as_str)
            .filter(|g| !GENRE_CHOICES.contains(g)),
    );
    for genre in options {
        let _ = write!(
            html,
            r#"<option value="{0}"{1}>{0}</option>"#,
            escape(genre),
            if selected.iter().any(|g| g == genre) { " selected" } else { "" }
        );
    }
    html.push_str("</select>");
    html
}

/// Render an ISO start time for display, falling back to the raw value
pub fn display_time(start_time: &str, style: DateStyle) -> String {
    parse_start_time(start_time)
        .map(|t| format_datetime(&t, style))
        .unwrap_or_else(|_| start_time.to_string())
}

/// Comma-separated genre list
pub fn genre_list(genres: &[String]) -> String {
    escape(&genres.join(", "))
}

/// Optional external link, `None` renders nothing
pub fn external_link(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) if !href.is_empty() => format!(
            r#"<p><a href="{0}" rel="noopener">{1}</a></p>"#,
            escape(href),
            escape(label)
        ),
        _ => String::new(),
    }
}

/// Thumbnail + link row used in show lists
pub fn item_row(href: &str, image_link: &str, title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="item"><img src="{}" alt="">
<div><a href="{}">{}</a><div class="muted">{}</div></div></div>"#,
        escape(image_link),
        escape(href),
        escape(title),
        escape(subtitle)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_page_renders_flash() {
        let flash = Flash::Error("Venue <X> could not be listed".into());
        let html = page("Home", Some(&flash), "");
        assert!(html.contains(r#"class="flash error""#));
        assert!(html.contains("Venue &lt;X&gt; could not be listed"));
    }

    #[test]
    fn test_genre_select_keeps_custom_genres() {
        let html = genre_select(&["Jazz".to_string(), "Gypsy Jazz".to_string()]);
        assert!(html.contains(r#"<option value="Jazz" selected>"#));
        assert!(html.contains(r#"<option value="Gypsy Jazz" selected>"#));
        assert!(html.contains(r#"<option value="Blues">"#));
    }

    #[test]
    fn test_display_time_styles() {
        let start = "2035-04-01T20:00:00";
        assert_eq!(display_time(start, DateStyle::Full), "Sunday April, 1, 2035 at 8:00PM");
        assert_eq!(display_time(start, DateStyle::Medium), "Sun 04, 01, 2035 8:00PM");
        assert_eq!(display_time("someday", DateStyle::Full), "someday");
    }

    #[test]
    fn test_checkbox_state() {
        assert!(checkbox("seeking_talent", "Seeking talent", true).contains(" checked"));
        assert!(!checkbox("seeking_talent", "Seeking talent", false).contains(" checked"));
    }
}
