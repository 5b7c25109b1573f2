use crate::error::StreamError;
use crate::pull_request::PullRequest;

/// Name of the SSE event carrying the rendered list.
pub const PR_EVENT: &str = "pr";

/// Render every pull request as an `<li>` row and concatenate them in order.
pub fn render_list(prs: &[PullRequest]) -> Result<String, StreamError> {
    let mut html = String::new();
    for pr in prs {
        html.push_str(&render_pull_request(pr)?);
    }
    Ok(html)
}

/// Render a single pull request row.
///
/// Title and state are HTML-escaped; the number and reformatted timestamp
/// cannot contain markup.
pub fn render_pull_request(pr: &PullRequest) -> Result<String, StreamError> {
    let created = format_created_at(&pr.created_at)?;
    Ok(format!(
        "<li><div class=\"col col-1\">{}</div><div class=\"col col-2\">{}</div><div class=\"col col-3\">{}</div><div class=\"col col-4\">{}</div></li>",
        pr.number,
        html_escape(&pr.title),
        html_escape(&pr.state),
        created,
    ))
}

/// `YYYY-MM-DDTHH:MM:SS...` -> `YYYY-MM-DD HH:MM:SS`.
///
/// Anything after the seconds (fraction, zone) is dropped. Inputs shorter
/// than 19 bytes, or whose slice points are not on char boundaries, fail.
pub fn format_created_at(ts: &str) -> Result<String, StreamError> {
    match (ts.get(..10), ts.get(11..19)) {
        (Some(date), Some(time)) => Ok(format!("{date} {time}")),
        _ => Err(StreamError::TimestampFormat(ts.to_string())),
    }
}

/// Encode one SSE message: `event: <name>`, one `data:` line per line of
/// `data`, then a blank line.
///
/// An empty payload still gets a single empty `data:` line; EventSource
/// clients drop events whose data buffer was never written.
pub fn encode_event(event: &str, data: &str) -> String {
    let mut frame = format!("event: {event}\n");
    for line in data.replace("\r\n", "\n").split(['\r', '\n']) {
        frame.push_str("data: ");
        frame.push_str(line);
        frame.push('\n');
    }
    frame.push('\n');
    frame
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
