//! File reading and response construction.

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tracing::error;

use crate::config::StaticFilesConfig;
use crate::files::resolve::{Resolved, resolve};
use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

/// Serves files beneath the configured document root.
///
/// Expects the request to have already passed parsing and the method
/// check; from here every outcome is a response, never an error.
pub struct FileHandler {
    config: StaticFilesConfig,
}

impl FileHandler {
    pub fn new(config: StaticFilesConfig) -> Self {
        Self { config }
    }

    pub async fn serve(&self, request: &Request) -> Response {
        match resolve(&self.config.root, &request.path, &self.config.index_file).await {
            Resolved::NotFound => Response::empty(StatusCode::NotFound),
            Resolved::Redirect(location) => Response::redirect(location),
            Resolved::File(path) => self.read_file(&path).await,
        }
    }

    /// Reads a validated path and builds the 200 response. A file that
    /// vanished since resolution, or an index file that never existed, is
    /// still a 404; anything else the filesystem reports is a 500.
    async fn read_file(&self, path: &Path) -> Response {
        match fs::read(path).await {
            Ok(body) => Response::file(body, mime::content_type(path)),
            Err(e) if e.kind() == ErrorKind::NotFound => Response::empty(StatusCode::NotFound),
            Err(e) => {
                error!("Failed to read file {}: {}", path.display(), e);
                Response::empty(StatusCode::InternalServerError)
            }
        }
    }
}
