use std::collections::HashMap;

use bytes::Bytes;

use crate::http::request::{Method, Request};

/// Parses a raw request buffer captured from a single socket read.
///
/// Parsing is total and best-effort: a malformed request line leaves the
/// affected fields empty, malformed header lines are skipped, and no error
/// is ever produced. An empty or `/` path is rewritten to `default_resource`
/// before the request is returned.
///
/// Header lines are whitespace-split after the name token: every further
/// token on the line becomes its own value (with one trailing comma
/// removed). This is not RFC header folding and is kept that way on purpose
/// for wire compatibility, so `X-Foo: a, b` parses as two values `a`, `b`.
pub fn parse_request(buf: &[u8], default_resource: &str) -> Request {
    // Header section runs up to the blank-line terminator (a lone `\r`
    // between two newlines). Without one, the whole buffer is headers and
    // the body is empty.
    let terminator = find_header_terminator(buf);
    let header_bytes = match terminator {
        Some(pos) => &buf[..pos],
        None => buf,
    };

    let header_text = String::from_utf8_lossy(header_bytes);
    let mut lines = header_text.split('\n');

    // Request line: up to three whitespace-separated tokens, missing ones
    // leave the fields empty.
    let mut request_line = lines.next().unwrap_or("").split_whitespace();
    let method = Method::from_token(request_line.next().unwrap_or(""));
    let path = request_line.next().unwrap_or("");
    let protocol = request_line.next().unwrap_or("").to_string();

    let path = normalize_path(path, default_resource);

    // Header lines until the terminator line or end of buffer.
    let mut headers: HashMap<String, Vec<String>> = HashMap::new();
    for line in lines {
        if line == "\r" {
            break;
        }

        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        let name = strip_first(name, ':');

        let values = headers.entry(name).or_default();
        for token in tokens {
            values.push(strip_first(token, ','));
        }
    }

    let body = match terminator {
        Some(pos) => extract_body(&buf[pos + 3..]),
        None => Bytes::new(),
    };

    Request {
        method,
        path,
        protocol,
        headers,
        body,
    }
}

/// Rewrites an empty or root path to the configured default resource.
pub fn normalize_path(path: &str, default_resource: &str) -> String {
    if path.is_empty() || path == "/" {
        default_resource.to_string()
    } else {
        path.to_string()
    }
}

fn find_header_terminator(buf: &[u8]) -> Option<usize> {
    buf.windows(3).position(|w| w == b"\n\r\n")
}

/// Removes the first occurrence of `c`, if any. Matches the historical
/// behavior of stripping the colon from header names and the comma from
/// values wherever it appears first.
fn strip_first(token: &str, c: char) -> String {
    match token.find(c) {
        Some(pos) => {
            let mut s = token.to_string();
            s.remove(pos);
            s
        }
        None => token.to_string(),
    }
}

/// Body bytes run verbatim to the first NUL byte or end of buffer.
fn extract_body(rest: &[u8]) -> Bytes {
    let end = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
    Bytes::copy_from_slice(&rest[..end])
}
