use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::{debug, info};

use crate::config::StaticFilesConfig;
use crate::files::FileHandler;
use crate::http::parser::parse_request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Handles one accepted connection: a single bounded read, a single
/// response, then the stream is dropped by the caller.
///
/// Generic over the stream so tests can drive it with an in-memory duplex
/// instead of a real socket.
pub struct Connection<S> {
    stream: S,
    handler: FileHandler,
    read_buffer_size: usize,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: StaticFilesConfig) -> Self {
        Self {
            read_buffer_size: config.read_buffer_size,
            handler: FileHandler::new(config),
            stream,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let response = self.process().await?;

        let mut writer = ResponseWriter::new(&response);
        writer.write_to_stream(&mut self.stream).await?;

        Ok(())
    }

    /// The request decision sequence. Each check is terminal: the first
    /// one that fails produces the response and nothing later runs.
    /// Request-level failures become status codes here; only socket
    /// errors surface as `Err`.
    async fn process(&mut self) -> anyhow::Result<Response> {
        // One read, truncating anything past the buffer limit.
        let mut buf = BytesMut::with_capacity(self.read_buffer_size);
        self.stream.read_buf(&mut buf).await?;

        let request = match parse_request(&buf) {
            Ok(request) => request,
            Err(e) => {
                debug!("Rejecting request: {:?}", e);
                return Ok(Response::empty(StatusCode::BadRequest));
            }
        };

        if !request.is_get() {
            debug!(
                "Rejecting {} {}: only GET is supported",
                request.method, request.path
            );
            return Ok(Response::empty(StatusCode::MethodNotAllowed));
        }

        let response = self.handler.serve(&request).await;

        info!(
            status = response.status.as_u16(),
            method = %request.method,
            path = %request.path,
            "Request served"
        );

        Ok(response)
    }
}
