use std::collections::HashMap;

use bytes::Bytes;

/// Represents a complete HTTP response produced by a handler.
///
/// Handlers fill in status, protocol, headers, and body. `Content-Length`
/// and `Connection` are owned by the serializer and must not be set here;
/// the serializer always appends them last.
#[derive(Debug, Clone)]
pub struct Response {
    /// Numeric HTTP status code (e.g. 200, 404)
    pub status_code: u16,
    /// Reason phrase sent after the status code
    pub status_message: String,
    /// Protocol token for the status line, normally echoed from the request
    pub protocol: String,
    /// Header name → ordered values
    pub headers: HashMap<String, Vec<String>>,
    /// Response body as bytes
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(200, "OK")
///     .header("Content-Type", "application/json")
///     .body("{}")
///     .build();
/// ```
pub struct ResponseBuilder {
    status_code: u16,
    status_message: String,
    protocol: String,
    headers: HashMap<String, Vec<String>>,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new response builder with the given status line parts.
    pub fn new(status_code: u16, status_message: impl Into<String>) -> Self {
        Self {
            status_code,
            status_message: status_message.into(),
            protocol: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
            body: Bytes::new(),
        }
    }

    /// Sets the protocol token echoed in the status line.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Appends a header value, preserving insertion order within the name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status_code: self.status_code,
            status_message: self.status_message,
            protocol: self.protocol,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a simple 200 OK response with the given body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(200, "OK").body(body).build()
    }

    /// Creates an HTML error response: `<h1>message</h1>` with the given code.
    pub fn error(status_code: u16, message: &str) -> Self {
        ResponseBuilder::new(status_code, message)
            .header("Content-Type", "text/html")
            .body(format!("<h1>{}</h1>", message))
            .build()
    }

    /// The built-in 404 response returned on a route table miss.
    pub fn not_found() -> Self {
        Self::error(404, "Not Found")
    }
}
