//! Short link slug extraction and formatting.

use url::Url;

/// Extracts the slug from whatever the user pasted.
///
/// Handles:
/// - bare slugs (`abc123`)
/// - host-prefixed links (`encurtar.link/abc123`)
/// - full URLs (`https://encurtar.link/abc123?utm=x#top`)
///
/// Trailing slashes, query strings and fragments are ignored. Returns `None`
/// when nothing slug-like remains.
///
/// # Examples
///
/// ```
/// use shortener_client::utils::slug::extract_slug;
///
/// assert_eq!(extract_slug("https://encurtar.link/promo").as_deref(), Some("promo"));
/// assert_eq!(extract_slug("encurtar.link/promo/").as_deref(), Some("promo"));
/// assert_eq!(extract_slug("promo").as_deref(), Some("promo"));
/// ```
pub fn extract_slug(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let path = if input.contains("://") {
        let url = Url::parse(input).ok()?;
        url.path().to_string()
    } else {
        let without_suffix = input
            .split(['?', '#'])
            .next()
            .unwrap_or(input);
        match without_suffix.split_once('/') {
            Some((_host, rest)) => rest.to_string(),
            None => without_suffix.to_string(),
        }
    };

    path.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_string)
}

/// Public short link without the scheme, e.g. `encurtar.link/abc123`.
pub fn short_link_display(base_url: &str, slug: &str) -> String {
    let host = base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    format!("{host}/{slug}")
}

/// Public short link including the scheme, e.g. `https://encurtar.link/abc123`.
pub fn short_link_url(base_url: &str, slug: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bare_slug() {
        assert_eq!(extract_slug("abc123").as_deref(), Some("abc123"));
        assert_eq!(extract_slug("  abc123  ").as_deref(), Some("abc123"));
    }

    #[test]
    fn test_extract_from_host_path() {
        assert_eq!(extract_slug("encurtar.link/abc").as_deref(), Some("abc"));
        assert_eq!(extract_slug("localhost:5173/abc/").as_deref(), Some("abc"));
    }

    #[test]
    fn test_extract_from_full_url() {
        assert_eq!(
            extract_slug("https://encurtar.link/abc?ref=mail#top").as_deref(),
            Some("abc")
        );
        assert_eq!(extract_slug("http://127.0.0.1:5173/x-y_z").as_deref(), Some("x-y_z"));
    }

    #[test]
    fn test_extract_strips_query_without_scheme() {
        assert_eq!(extract_slug("encurtar.link/abc?x=1").as_deref(), Some("abc"));
    }

    #[test]
    fn test_extract_nothing() {
        assert_eq!(extract_slug(""), None);
        assert_eq!(extract_slug("   "), None);
        assert_eq!(extract_slug("https://encurtar.link/"), None);
        assert_eq!(extract_slug("encurtar.link/"), None);
    }

    #[test]
    fn test_short_link_display_strips_scheme() {
        assert_eq!(
            short_link_display("https://encurtar.link/", "abc"),
            "encurtar.link/abc"
        );
        assert_eq!(
            short_link_display("http://localhost:5173", "abc"),
            "localhost:5173/abc"
        );
    }

    #[test]
    fn test_short_link_url_keeps_scheme() {
        assert_eq!(
            short_link_url("https://encurtar.link/", "abc"),
            "https://encurtar.link/abc"
        );
    }
}
