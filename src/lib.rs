//! Portico - Minimal HTTP/1.x Request Server
//!
//! One request per connection, exact-match routing, close after response.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod static_files;
