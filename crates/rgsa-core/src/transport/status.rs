//! Reason phrase extraction from collected response header lines.

/// One raw header line as text. Invalid UTF-8 is replaced, not dropped, so
/// every status line stays in order.
pub(crate) fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Reason phrase for the final response.
///
/// Uses the last `HTTP/...` status line (redirects and interim responses come
/// earlier). HTTP/2 carries no phrase, so the canonical one is substituted.
pub(crate) fn reason_phrase(lines: &[String], code: u32) -> String {
    lines
        .iter()
        .filter_map(|l| status_line_reason(l))
        .last()
        .filter(|r| !r.is_empty())
        .or_else(|| canonical_reason(code).map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {code}"))
}

fn status_line_reason(line: &str) -> Option<String> {
    let line = line.trim();
    if !line.starts_with("HTTP/") {
        return None;
    }
    let mut parts = line.splitn(3, ' ');
    parts.next()?;
    parts.next()?;
    Some(parts.next().unwrap_or("").trim().to_string())
}

/// Standard reason phrase for common status codes.
pub fn canonical_reason(code: u32) -> Option<&'static str> {
    let reason = match code {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        413 => "Content Too Large",
        415 => "Unsupported Media Type",
        422 => "Unprocessable Content",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => return None,
    };
    Some(reason)
}
