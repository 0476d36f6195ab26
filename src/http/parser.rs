use crate::http::request::Request;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidEncoding,
    MissingHostHeader,
    DuplicateHostHeader,
    InvalidRequestLine,
}

/// Parses the single request read from the socket.
///
/// Deliberately informal: the buffer is decoded as UTF-8, split into lines
/// on `\n`, and only the first two whitespace-separated tokens of the
/// request line are extracted. Header handling is limited to requiring
/// exactly one line with the case-sensitive prefix `Host:`. Every error
/// maps to a 400 response at the connection layer.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;

    let lines: Vec<&str> = text.split('\n').collect();

    // Exactly one Host header, as HTTP/1.1 requires.
    let host_lines = lines.iter().filter(|line| line.starts_with("Host:")).count();
    match host_lines {
        0 => return Err(ParseError::MissingHostHeader),
        1 => {}
        _ => return Err(ParseError::DuplicateHostHeader),
    }

    let mut tokens = lines[0].split_whitespace();
    let (method, path) = match (tokens.next(), tokens.next()) {
        (Some(method), Some(path)) => (method, path),
        _ => return Err(ParseError::InvalidRequestLine),
    };

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
    })
}
