use std::fs;
use std::path::{Path, PathBuf};

use kiosk::files::resolve::{Resolved, resolve};
use tempfile::TempDir;

/// Lays out a document root inside a temp directory:
///
/// ```text
/// <tmp>/secret.txt          (outside the root)
/// <tmp>/www/index.html
/// <tmp>/www/style.css
/// <tmp>/www/docs/page.html  (no index.html in docs/)
/// ```
fn fixture() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("www");

    fs::create_dir(&root).unwrap();
    fs::create_dir(root.join("docs")).unwrap();
    fs::write(root.join("index.html"), "<h1>home</h1>").unwrap();
    fs::write(root.join("style.css"), "body {}").unwrap();
    fs::write(root.join("docs").join("page.html"), "<p>docs</p>").unwrap();
    fs::write(tmp.path().join("secret.txt"), "keep out").unwrap();

    (tmp, root)
}

fn canonical(root: &Path, tail: &str) -> PathBuf {
    let mut path = root.canonicalize().unwrap();
    path.push(tail);
    path
}

#[tokio::test]
async fn test_resolve_plain_file() {
    let (_tmp, root) = fixture();

    let resolved = resolve(&root, "/style.css", "index.html").await;

    assert_eq!(resolved, Resolved::File(canonical(&root, "style.css")));
}

#[tokio::test]
async fn test_resolve_root_path_appends_index() {
    let (_tmp, root) = fixture();

    let resolved = resolve(&root, "/", "index.html").await;

    assert_eq!(resolved, Resolved::File(canonical(&root, "index.html")));
}

#[tokio::test]
async fn test_resolve_directory_with_slash_appends_index() {
    let (_tmp, root) = fixture();

    // docs/ has no index.html; resolution still points at it and the
    // read step turns the miss into 404.
    let resolved = resolve(&root, "/docs/", "index.html").await;

    assert_eq!(resolved, Resolved::File(canonical(&root, "docs/index.html")));
}

#[tokio::test]
async fn test_resolve_directory_without_slash_redirects() {
    let (_tmp, root) = fixture();

    let resolved = resolve(&root, "/docs", "index.html").await;

    assert_eq!(resolved, Resolved::Redirect("/docs/".to_string()));
}

#[tokio::test]
async fn test_resolve_missing_path() {
    let (_tmp, root) = fixture();

    let resolved = resolve(&root, "/missing.css", "index.html").await;

    assert_eq!(resolved, Resolved::NotFound);
}

#[tokio::test]
async fn test_resolve_blocks_dotdot_traversal() {
    let (_tmp, root) = fixture();

    // secret.txt exists, but canonicalization places it outside the root.
    let resolved = resolve(&root, "/../secret.txt", "index.html").await;

    assert_eq!(resolved, Resolved::NotFound);
}

#[tokio::test]
async fn test_resolve_blocks_deep_traversal() {
    let (_tmp, root) = fixture();

    let resolved = resolve(&root, "/../../../../etc/passwd", "index.html").await;

    assert_eq!(resolved, Resolved::NotFound);
}

#[cfg(unix)]
#[tokio::test]
async fn test_resolve_blocks_symlink_escape() {
    let (tmp, root) = fixture();

    std::os::unix::fs::symlink(tmp.path().join("secret.txt"), root.join("leak.txt")).unwrap();

    let resolved = resolve(&root, "/leak.txt", "index.html").await;

    assert_eq!(resolved, Resolved::NotFound);
}

#[tokio::test]
async fn test_resolve_missing_root() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("nonexistent");

    let resolved = resolve(&root, "/index.html", "index.html").await;

    assert_eq!(resolved, Resolved::NotFound);
}
