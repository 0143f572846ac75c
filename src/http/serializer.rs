use anyhow::Result;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

/// Renders a response to the exact wire bytes.
///
/// Layout: status line, then each handler header as `Name: v1, v2\r\n`
/// (values joined with `", "`), then `Content-Length` computed from the
/// body and a fixed `Connection: close`, a blank line, and the raw body.
/// Handler header order across names follows map iteration and is
/// unspecified; Content-Length and Connection always come last.
pub fn serialize(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        resp.protocol, resp.status_code, resp.status_message
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Handler headers
    for (name, values) in &resp.headers {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(values.join(", ").as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Computed headers, always last
    buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.body.len()).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
