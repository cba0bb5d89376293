use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};

use crate::{filters::{self, FilterError}, schedule::ShowSlot};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

/// Makes `text` safe to drop into a template, including its `{placeholder}` braces.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn escape_opt(text: &Option<String>) -> String {
    text.as_deref().map(escape).unwrap_or_default()
}

/// Wraps page content in the site layout along with any flashed messages.
pub fn page(title: &str, content: &str, flashes: &[String]) -> String {
    let flashes: String = flashes.iter()
        .map(|message| format!("<li class=\"flash\">{}</li>", escape(message)))
        .collect();

    include_res!(str, "/layout.html")
        .replace("{title}", &escape(title))
        .replace("{flashes}", &flashes)
        .replace("{content}", content)
}

/// Cards for a detail page's show list; `kind` is where each card links, `venues` or `artists`.
pub fn show_cards(kind: &str, slots: &[ShowSlot]) -> Result<String, FilterError> {
    let mut cards = String::new();
    for slot in slots {
        cards += &include_res!(str, "/pages/show_card.html")
            .replace("{kind}", kind)
            .replace("{id}", &slot.id.to_string())
            .replace("{image_link}", &escape_opt(&slot.image_link))
            .replace("{name}", &escape(&slot.name))
            .replace("{start_time}", &filters::datetime(&slot.start_time, "full")?);
    }
    Ok(cards)
}

/// Genre tags.
pub fn genres(genres: &[String]) -> String {
    genres.iter()
        .map(|genre| format!("<span class=\"genre\">{}</span> ", escape(genre)))
        .collect()
}

pub fn home(flashes: &[String]) -> Response {
    Html(page("Fyyur", include_res!(str, "/pages/home.html"), flashes)).into_response()
}

/// The 404 page.
pub fn sorry(what: &str) -> Response {
    let content = include_res!(str, "/pages/errors/404.html")
        .replace("{what}", &escape(what));

    (StatusCode::NOT_FOUND, Html(page("Not found", &content, &[]))).into_response()
}

/// The 500 page, carrying `message` as its only flash.
pub fn failure(message: &str) -> Response {
    let content = include_res!(str, "/pages/errors/500.html");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(page("Server error", content, &[message.to_owned()])),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralises_markup_and_placeholders() {
        assert_eq!(
            escape("<a href=\"x\">{name} & 'co'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&#123;name&#125; &amp; &#39;co&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn page_lists_flashes() {
        let html = page("Venues", "<p>body</p>", &["Venue <b> was listed".to_owned()]);
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("<li class=\"flash\">Venue &lt;b&gt; was listed</li>"));
        assert!(!html.contains("{flashes}"));
    }
}
