//! Share-link builders for the event detail page.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use url::form_urlencoded::byte_serialize;

fn encode(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}

/// Outbound share targets shown under an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLinks {
    pub facebook: String,
    pub twitter: String,
    pub whatsapp: String,
}

impl ShareLinks {
    /// Links sharing `page_url` with `title` as the message text.
    pub fn new(page_url: &str, title: &str) -> Self {
        let url = encode(page_url);
        let text = encode(title);
        let combined = encode(&format!("{title} {page_url}"));
        Self {
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
            twitter: format!("https://twitter.com/intent/tweet?url={url}&text={text}"),
            whatsapp: format!("https://wa.me/?text={combined}"),
        }
    }
}

/// Absolute URL of the detail page for `path` under `origin`.
pub fn page_url(origin: &str, path: &str) -> String {
    format!("{}{path}", origin.trim_end_matches('/'))
}
