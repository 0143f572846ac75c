use anyhow::Result;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::http::parser::parse_request;
use crate::http::serializer::ResponseWriter;
use crate::router::Router;

/// Upper bound on the bytes taken from a connection. A single read is
/// performed; anything beyond the cap is truncated, never rejected.
pub const MAX_REQUEST_SIZE: usize = 30720;

/// Handles exactly one request on an accepted connection.
///
/// The sequence is fixed: one read, one parse, one route dispatch, one
/// write, then the connection closes when the stream drops. A zero-byte
/// read means the client went away before sending anything; the
/// connection is closed with no response.
pub struct Connection<'a> {
    stream: TcpStream,
    router: &'a Router,
    default_resource: &'a str,
}

impl<'a> Connection<'a> {
    pub fn new(stream: TcpStream, router: &'a Router, default_resource: &'a str) -> Self {
        Self {
            stream,
            router,
            default_resource,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut buf = vec![0u8; MAX_REQUEST_SIZE];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            return Ok(());
        }

        let request = parse_request(&buf[..n], self.default_resource);
        debug!(
            method = request.method.as_str(),
            path = %request.path,
            protocol = %request.protocol,
            "request received"
        );

        let response = self.router.dispatch(&request);

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }
}
