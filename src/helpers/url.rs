//! URL helper functions

use percent_encoding::percent_decode_str;

/// Resolve a site-relative path against the site's base URL
///
/// # Examples
/// ```ignore
/// full_url_for("https://example.com/", "/2023/01/hello/") // -> "https://example.com/2023/01/hello/"
/// ```
pub fn full_url_for(site: &str, path: &str) -> String {
    let base = site.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Decode a percent-encoded query component. `+` is kept literally, as the
/// search page's links never encode spaces that way.
pub fn decode_component(value: &str) -> String {
    percent_decode_str(value).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_for() {
        assert_eq!(
            full_url_for("https://example.com", "/2023/01/hello/"),
            "https://example.com/2023/01/hello/"
        );
        assert_eq!(
            full_url_for("https://example.com/", "/atom.xml"),
            "https://example.com/atom.xml"
        );
        assert_eq!(full_url_for("https://example.com/blog/", ""), "https://example.com/blog/");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("machine%20learning"), "machine learning");
        assert_eq!(decode_component("c%2B%2B"), "c++");
        assert_eq!(decode_component("c++"), "c++");
        assert_eq!(decode_component("a+b"), "a+b");
    }
}
