use portico::http::parser::{normalize_path, parse_request};
use portico::http::request::Method;

const DEFAULT: &str = "/index.html";

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /page.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.method, Method::Get);
    assert_eq!(parsed.path, "/page.html");
    assert_eq!(parsed.protocol, "HTTP/1.1");
    assert_eq!(parsed.header_values("Host"), ["example.com"]);
}

#[test]
fn test_parse_request_line_tokens_reproduced_exactly() {
    let req = b"POST /api/items?id=7 HTTP/1.0\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.method, Method::Post);
    assert_eq!(parsed.path, "/api/items?id=7");
    assert_eq!(parsed.protocol, "HTTP/1.0");
}

#[test]
fn test_parse_root_path_normalized_to_default_resource() {
    let req = b"GET / HTTP/1.1\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.path, "/index.html");
}

#[test]
fn test_parse_empty_buffer_normalizes_path_to_default() {
    let parsed = parse_request(b"", DEFAULT);

    assert_eq!(parsed.method, Method::Other(String::new()));
    assert_eq!(parsed.path, "/index.html");
    assert_eq!(parsed.protocol, "");
    assert!(parsed.headers.is_empty());
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_missing_request_line_tokens_left_empty() {
    let req = b"GET\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.method, Method::Get);
    assert_eq!(parsed.path, "/index.html"); // empty path normalized
    assert_eq!(parsed.protocol, "");
}

#[test]
fn test_parse_unrecognized_method_passed_through() {
    let req = b"BREW /pot HTTP/1.1\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
    assert_eq!(parsed.path, "/pot");
}

#[test]
fn test_parse_comma_separated_header_yields_two_values() {
    let req = b"GET /x HTTP/1.1\r\nX-Foo: a, b\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.header_values("X-Foo"), ["a", "b"]);
}

#[test]
fn test_parse_space_separated_tokens_become_multiple_values() {
    // Not RFC folding: every whitespace-separated token is its own value.
    let req = b"GET /x HTTP/1.1\r\nAccept: text/html text/plain\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.header_values("Accept"), ["text/html", "text/plain"]);
}

#[test]
fn test_parse_header_value_order_preserved() {
    let req = b"GET /x HTTP/1.1\r\nX-Seq: one, two, three\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.header_values("X-Seq"), ["one", "two", "three"]);
}

#[test]
fn test_parse_header_names_case_sensitive() {
    let req = b"GET /x HTTP/1.1\r\ncontent-type: a\r\nContent-Type: b\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.header_values("content-type"), ["a"]);
    assert_eq!(parsed.header_values("Content-Type"), ["b"]);
}

#[test]
fn test_parse_repeated_header_name_appends_values() {
    let req = b"GET /x HTTP/1.1\r\nX-Tag: a\r\nX-Tag: b\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.header_values("X-Tag"), ["a", "b"]);
}

#[test]
fn test_parse_body_after_blank_line() {
    let req = b"POST /submit HTTP/1.1\r\nHost: x\r\n\r\nname=value";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(&parsed.body[..], b"name=value");
}

#[test]
fn test_parse_body_truncated_at_nul_byte() {
    let req = b"POST /submit HTTP/1.1\r\n\r\nabc\0def";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(&parsed.body[..], b"abc");
}

#[test]
fn test_parse_no_blank_line_terminator_yields_empty_body() {
    let req = b"GET /x HTTP/1.1\r\nHost: example.com\r\n";
    let parsed = parse_request(req, DEFAULT);

    assert_eq!(parsed.header_values("Host"), ["example.com"]);
    assert!(parsed.body.is_empty());
}

#[test]
fn test_parse_header_line_without_tokens_skipped() {
    let req = b"GET /x HTTP/1.1\r\n   \r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req, DEFAULT);

    // The whitespace-only line carries no tokens and is ignored.
    assert_eq!(parsed.header_values("Host"), ["example.com"]);
}

#[test]
fn test_normalize_path_rules() {
    assert_eq!(normalize_path("", DEFAULT), "/index.html");
    assert_eq!(normalize_path("/", DEFAULT), "/index.html");
    assert_eq!(normalize_path("/about.html", DEFAULT), "/about.html");
    assert_eq!(normalize_path("/", "/home.html"), "/home.html");
}
