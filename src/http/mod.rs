//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one GET request per connection,
//! one response, then the connection is closed. Requests are parsed from a
//! single bounded read with informal line splitting rather than a full
//! RFC parser.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection handler running the request decision
//!   sequence
//! - **`parser`**: parses the request line and validates the Host header
//! - **`request`**: parsed request representation
//! - **`response`**: HTTP response representation with builder
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: Content-Type selection based on file extension
//!
//! # Request lifecycle
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read from the socket
//!        └──────┬──────┘
//!               │ Request bytes received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, validate, resolve file, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
