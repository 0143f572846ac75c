//! HTTP protocol implementation.
//!
//! This module implements a deliberately small HTTP/1.x subset: one request
//! per connection, lenient parsing, `Connection: close` on every response.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection handler sequencing read → parse →
//!   route → respond → close
//! - **`parser`**: Parses an incoming request from the raw byte buffer
//! - **`request`**: HTTP request representation and construction utilities
//! - **`response`**: HTTP response representation with builder pattern
//! - **`serializer`**: Renders a response to wire bytes and writes it out
//!
//! # Connection Lifecycle
//!
//! Each client connection is handled exactly once:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read, capped at MAX_REQUEST_SIZE
//!        └──────┬──────┘
//!               │ Bytes received (zero bytes → close, no response)
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Parse, resolve handler, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, then always close
//!        └──────────────────┘
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod serializer;
