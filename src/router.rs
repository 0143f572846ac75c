//! Exact-match routing.
//!
//! The route table maps `(method, normalized path)` to a handler. Entries
//! are registered during server setup and the table is read-only while
//! serving, so lookups need no synchronization.

use std::collections::HashMap;

use crate::http::parser::normalize_path;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// A handler computes a Response from a Request. It may perform its own
/// I/O (e.g. read a file), but has no other contract with the server.
pub type Handler = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Route table keyed by `(method, normalized path)`.
pub struct Router {
    routes: HashMap<(Method, String), Handler>,
    default_resource: String,
}

impl Router {
    pub fn new(default_resource: impl Into<String>) -> Self {
        Self {
            routes: HashMap::new(),
            default_resource: default_resource.into(),
        }
    }

    /// Registers a handler under `(method, path)`.
    ///
    /// The path is normalized the same way the parser normalizes request
    /// paths, so registering `/` and `/index.html` targets the same entry.
    /// Re-registering a key silently replaces the previous handler.
    pub fn register(&mut self, method: Method, path: &str, handler: Handler) {
        let path = normalize_path(path, &self.default_resource);
        self.routes.insert((method, path), handler);
    }

    /// Looks up the handler registered for exactly `(method, path)`.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<&Handler> {
        self.routes.get(&(method.clone(), path.to_string()))
    }

    /// Resolves and invokes the handler for a request.
    ///
    /// A route table miss produces the built-in 404 response with the
    /// request's protocol echoed back.
    pub fn dispatch(&self, request: &Request) -> Response {
        match self.resolve(&request.method, &request.path) {
            Some(handler) => handler(request),
            None => {
                let mut response = Response::not_found();
                if !request.protocol.is_empty() {
                    response.protocol = request.protocol.clone();
                }
                response
            }
        }
    }
}
