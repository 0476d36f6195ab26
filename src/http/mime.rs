//! Content-Type selection.
//!
//! Returns the Content-Type for a served file based on its extension.

use std::path::Path;

/// Maps a file path to a Content-Type by extension.
///
/// Only HTML and CSS are recognized; everything else, including files
/// without an extension, is served as plain text.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use kiosk::http::mime::content_type;
/// assert_eq!(content_type(Path::new("index.html")), "text/html");
/// assert_eq!(content_type(Path::new("style.css")), "text/css");
/// assert_eq!(content_type(Path::new("notes.txt")), "text/plain");
/// ```
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        _ => "text/plain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(content_type(Path::new("www/index.html")), "text/html");
        assert_eq!(content_type(Path::new("www/style.css")), "text/css");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type(Path::new("data.json")), "text/plain");
        assert_eq!(content_type(Path::new("README")), "text/plain");
    }
}
