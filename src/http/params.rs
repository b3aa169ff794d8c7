//! Query parameter extraction for the pick endpoint.
//!
//! # Responsibilities
//! - Percent-encode a nested absolute URL left unescaped by the client
//! - Decode `url` and `line` from the query string
//!
//! # Design Decisions
//! - Works on the raw path-and-query so a nested `?` or `&` never splits
//!   the document URL
//! - Everything from the nested URL to the end belongs to `url`; callers
//!   sending it unescaped must put `line` first

use axum::http::Uri;
use std::borrow::Cow;
use url::form_urlencoded;

/// Parameters accepted by `/pick-random-line`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickParams {
    pub url: Option<String>,
    pub line: Option<String>,
}

impl PickParams {
    /// Decode parameters from a raw query string. Later duplicates win.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "url" => params.url = Some(value.into_owned()),
                "line" => params.line = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }

    /// Decode parameters from a request URI, escaping a nested URL first.
    pub fn from_uri(uri: &Uri) -> Self {
        let raw = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
        let escaped = escape_embedded_url(raw);
        if let Cow::Owned(ref rewritten) = escaped {
            tracing::debug!(original = %raw, rewritten = %rewritten, "Encoded embedded URL");
        }

        let query = escaped.split_once('?').map(|(_, q)| q).unwrap_or("");
        Self::from_query(query)
    }

    /// The `url` value if present and not blank.
    pub fn document_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// Percent-encode the first absolute `http(s)://` URL that follows other
/// request content, through to the end of the string.
///
/// Returns the input unchanged when no such URL is present.
pub fn escape_embedded_url(raw: &str) -> Cow<'_, str> {
    let lower = raw.to_ascii_lowercase();
    let start = lower.match_indices("http").map(|(i, _)| i).find(|&i| {
        i > 0 && (lower[i..].starts_with("http://") || lower[i..].starts_with("https://"))
    });

    match start {
        Some(i) => {
            let encoded: String = form_urlencoded::byte_serialize(raw[i..].as_bytes()).collect();
            Cow::Owned(format!("{}{}", &raw[..i], encoded))
        }
        None => Cow::Borrowed(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_basic() {
        let params = PickParams::from_query("url=http%3A%2F%2Fa.com%2Fx.txt&line=3");
        assert_eq!(params.url.as_deref(), Some("http://a.com/x.txt"));
        assert_eq!(params.line.as_deref(), Some("3"));
    }

    #[test]
    fn test_from_query_ignores_unknown_and_keeps_last() {
        let params = PickParams::from_query("foo=bar&line=1&line=two+words");
        assert_eq!(params.url, None);
        assert_eq!(params.line.as_deref(), Some("two words"));
    }

    #[test]
    fn test_document_url_blank() {
        let params = PickParams::from_query("url=%20%20");
        assert_eq!(params.document_url(), None);
        assert_eq!(PickParams::default().document_url(), None);
    }

    #[test]
    fn test_escape_leaves_plain_requests_alone() {
        let raw = "/pick-random-line?url=http%3A%2F%2Fa.com&line=2";
        assert!(matches!(escape_embedded_url(raw), Cow::Borrowed(_)));
        assert!(matches!(escape_embedded_url("http://a.com"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_nested_url() {
        let raw = "/pick-random-line?line=2&url=http://a.com/f.txt?x=1&y=2";
        let escaped = escape_embedded_url(raw);
        assert_eq!(
            escaped,
            "/pick-random-line?line=2&url=http%3A%2F%2Fa.com%2Ff.txt%3Fx%3D1%26y%3D2"
        );
    }

    #[test]
    fn test_escape_is_case_insensitive_and_https() {
        let raw = "/p?url=HTTPS://A.com/x";
        assert_eq!(escape_embedded_url(raw), "/p?url=HTTPS%3A%2F%2FA.com%2Fx");
    }

    #[test]
    fn test_from_uri_keeps_nested_query() {
        let uri: Uri = "/pick-random-line?line=banana&url=http://a.com/list?page=2&sort=asc"
            .parse()
            .unwrap();
        let params = PickParams::from_uri(&uri);
        assert_eq!(
            params.url.as_deref(),
            Some("http://a.com/list?page=2&sort=asc")
        );
        assert_eq!(params.line.as_deref(), Some("banana"));
    }

    #[test]
    fn test_from_uri_without_query() {
        let uri: Uri = "/pick-random-line".parse().unwrap();
        assert_eq!(PickParams::from_uri(&uri), PickParams::default());
    }
}
