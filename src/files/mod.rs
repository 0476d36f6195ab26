//! Static file serving.
//!
//! This module maps request paths to files beneath the configured document
//! root and turns them into HTTP responses, including the containment
//! check that keeps every served file inside the root.

pub mod handler;
pub mod resolve;

pub use handler::FileHandler;
pub use resolve::{Resolved, resolve};
