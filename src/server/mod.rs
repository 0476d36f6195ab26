//! TCP accept loop.
//!
//! Owns the listening socket and dispatches each accepted connection to
//! one `Connection` task.

pub mod listener;
