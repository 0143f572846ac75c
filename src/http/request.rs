use std::collections::HashMap;

use bytes::Bytes;

/// HTTP request methods.
///
/// The four routable methods are first-class variants. Anything else on
/// the wire is carried through as `Other` rather than rejected, so
/// unrecognized methods still reach routing (and miss).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// POST - Create or submit data
    Post,
    /// PUT - Replace a resource
    Put,
    /// DELETE - Delete a resource
    Delete,
    /// Any other token, passed through as received
    Other(String),
}

impl Method {
    /// Maps a request-line token to a method. Never fails: unknown tokens
    /// become `Method::Other`.
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            other => Method::Other(other.to_string()),
        }
    }

    /// Returns the wire token for this method.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Other(s) => s,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// All string fields are always present; parsing is best-effort, so a
/// malformed request line leaves the corresponding fields empty rather
/// than failing.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path, normalized (`""`/`"/"` → the default resource)
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1"), echoed in responses
    pub protocol: String,
    /// Header name → ordered values, names kept case-sensitive as received
    pub headers: HashMap<String, Vec<String>>,
    /// Request body bytes, possibly empty
    pub body: Bytes,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Method,
    path: String,
    protocol: String,
    headers: HashMap<String, Vec<String>>,
    body: Bytes,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            path: String::new(),
            protocol: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            path: self.path,
            protocol: self.protocol,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Retrieves the first value recorded for a header name.
    ///
    /// Lookup is case-sensitive, matching how headers are stored.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(|v| v.as_str())
    }

    /// Retrieves every value recorded for a header name, in insertion order.
    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers.get(name).map(|v| v.as_slice()).unwrap_or(&[])
    }
}
