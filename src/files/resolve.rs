//! Request path resolution.
//!
//! Joins a request path onto the document root and canonicalizes the
//! result before anything is opened. Canonicalization resolves symlinks
//! and `..` segments, so the containment check below compares real
//! filesystem locations rather than raw strings.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::warn;

/// Outcome of resolving a request path against the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A servable path. For directory requests this already includes the
    /// index file name.
    File(PathBuf),
    /// The path names a directory but lacks its trailing slash; the client
    /// is redirected to this location.
    Redirect(String),
    /// The path does not exist or escapes the document root.
    NotFound,
}

/// Resolves `request_path` to a location beneath `root`.
///
/// The request path is stripped of leading and trailing slashes, joined
/// onto the root, and canonicalized. A path that cannot be canonicalized
/// does not exist; a canonical path outside the canonical root is a
/// traversal attempt. Both yield `NotFound` before any file is opened.
pub async fn resolve(root: &Path, request_path: &str, index_file: &str) -> Resolved {
    let relative = request_path.trim_matches('/');
    let joined = root.join(relative);

    let Ok(canonical_root) = fs::canonicalize(root).await else {
        warn!("Document root {} not found or inaccessible", root.display());
        return Resolved::NotFound;
    };

    let Ok(mut resolved) = fs::canonicalize(&joined).await else {
        return Resolved::NotFound;
    };

    if !resolved.starts_with(&canonical_root) {
        warn!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            resolved.display()
        );
        return Resolved::NotFound;
    }

    let is_file = fs::metadata(&resolved)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);

    // A directory reached without a trailing slash redirects to the
    // slash-terminated form of the original path.
    if !request_path.ends_with('/') && !is_file {
        return Resolved::Redirect(format!("{}/", request_path));
    }

    if request_path.ends_with('/') {
        resolved.push(index_file);
    }

    Resolved::File(resolved)
}
