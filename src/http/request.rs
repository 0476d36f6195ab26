/// Represents a parsed HTTP request from a client.
///
/// Only the pieces of the request this server acts on are kept: the method
/// token and the path token from the request line. The path is stored
/// exactly as sent, without any decoding. Headers beyond the Host
/// validation done at parse time are ignored, and bodies are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token, e.g. "GET". Kept as a string so that unknown
    /// methods can still be answered with 405 rather than rejected at
    /// parse time.
    pub method: String,
    /// The request path as sent (e.g. "/index.html"), not yet resolved
    /// against the document root.
    pub path: String,
}

impl Request {
    /// True when the method token is exactly "GET" (case-sensitive).
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }

    /// True when the path names a directory explicitly, i.e. ends in "/".
    pub fn wants_directory(&self) -> bool {
        self.path.ends_with('/')
    }
}
